//! Waiting for a search job to finish.
//!
//! Responsibilities:
//! - Issue status checks one at a time, sleeping a fixed interval in between.
//! - Decide completion from `dispatchState` or `isDone`.
//!
//! Does NOT handle:
//! - Turning "never finished" into an error; the caller owns the timeout error.
//! - Retrying failed status requests (the orchestrator decides that).
//!
//! Invariants:
//! - A non-2xx status aborts immediately with `JobStatusFetchFailed`.
//! - An unparsable or content-less body counts as "not done yet".
//! - Every unfinished check is followed by one interval of sleep, so a job
//!   that never finishes is given `max_attempts * interval` in total.

use std::future::Future;
use std::time::Duration;

use splunk_query_config::SearchSettings;
use tracing::debug;

use crate::cancellation::CancellationToken;
use crate::error::{AttemptError, ClientError, SearchError};
use crate::models::{JobStatusResponse, JobStatusSnapshot};

/// How many status checks to make and how far apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for PollPolicy {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            max_attempts: settings.poll_max_attempts,
            interval: settings.poll_interval,
        }
    }
}

/// Poll `fetch_status` until the job reports completion.
///
/// Returns `Ok(true)` once done and `Ok(false)` when the attempts run out.
pub async fn wait_until_done<F, Fut>(
    mut fetch_status: F,
    policy: PollPolicy,
    cancel: &CancellationToken,
) -> Result<bool, AttemptError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<JobStatusResponse, ClientError>>,
{
    for attempt in 1..=policy.max_attempts {
        let response = cancel.run(fetch_status()).await?;
        if !response.is_success() {
            return Err(SearchError::JobStatusFetchFailed {
                status: response.status,
            }
            .into());
        }

        let snapshot = JobStatusSnapshot::parse(&response.body);
        if snapshot.as_ref().is_some_and(JobStatusSnapshot::is_done) {
            debug!(attempt, "Search job finished");
            return Ok(true);
        }
        debug!(
            attempt,
            max_attempts = policy.max_attempts,
            dispatch_state = snapshot
                .as_ref()
                .and_then(|s| s.dispatch_state.as_deref())
                .unwrap_or("<unknown>"),
            "Search job not finished yet"
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SearchError::Cancelled.into()),
            _ = tokio::time::sleep(policy.interval) => {}
        }
    }
    Ok(false)
}
