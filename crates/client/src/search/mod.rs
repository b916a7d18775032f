//! Search orchestration.
//!
//! Responsibilities:
//! - Validate a query and resolve the primary endpoint ([`SearchRequest`]).
//! - Run one attempt: login, submit, resolve the SID, poll, fetch, normalize.
//! - Retry the whole attempt once against the management port when the first
//!   failure looks transient.
//!
//! Does NOT handle:
//! - Loading configuration (see `splunk_query_config::ConfigLoader`).
//! - Writing results anywhere (the CLI formatters do that).
//!
//! Invariants:
//! - At most two attempts per search; the second always targets
//!   `{retry_scheme}://{host}:{management_port}`.
//! - Each attempt builds its own client, so no session or connection state
//!   leaks from a failed attempt into the retry.
//! - Cancellation is never retried.

pub mod normalize;
pub mod poll;
pub mod query;
pub mod sid;

use splunk_query_config::{Config, Endpoint, Scheme};
use tracing::{debug, info, warn};

use crate::auth::AuthStrategy;
use crate::cancellation::CancellationToken;
use crate::client::SearchClient;
use crate::error::{AttemptError, SearchError};
use crate::models::NormalizedRecord;
use crate::redact_query;

use self::poll::{PollPolicy, wait_until_done};

/// Knobs for the orchestrator that are not part of user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Scheme used for the management-port retry.
    pub retry_scheme: Scheme,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            retry_scheme: Scheme::Https,
        }
    }
}

/// A validated search invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Normalized query, without a leading `search` keyword.
    pub query: String,
    pub endpoint: Endpoint,
    pub auth: Option<AuthStrategy>,
}

impl SearchRequest {
    /// Validate `query` and resolve the primary endpoint from `config`.
    ///
    /// # Errors
    ///
    /// - `SearchError::QueryRequired` for a blank query.
    /// - `SearchError::BaseUrlRequired` when no base URL is configured.
    /// - `SearchError::Config` when the base URL cannot be parsed.
    pub fn new(query: &str, config: &Config) -> Result<Self, SearchError> {
        let query = query::normalize_query(query).ok_or(SearchError::QueryRequired)?;
        let base_url = config
            .connection
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(SearchError::BaseUrlRequired)?;
        let endpoint = Endpoint::resolve(
            Some(base_url),
            None,
            None,
            config.connection.management_port,
        )?;

        Ok(Self {
            query,
            endpoint,
            auth: AuthStrategy::from_config(config),
        })
    }
}

enum State {
    Attempt(Endpoint),
    Retry(Endpoint),
    Done(Vec<NormalizedRecord>),
    Failed(SearchError),
}

/// Run `query` against the configured Splunk instance.
///
/// Equivalent to [`search_with_options`] with default options.
pub async fn search(
    query: &str,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<Vec<NormalizedRecord>, SearchError> {
    search_with_options(query, config, &SearchOptions::default(), cancel).await
}

/// Run `query`, retrying once on the management port after a transient failure.
///
/// # Errors
///
/// - Validation errors from [`SearchRequest::new`].
/// - A fatal first failure: `SearchError` kinds unchanged, transport
///   failures as `SearchError::NetworkError`.
/// - A failed retry: `SearchError::SearchFailed` wrapping the second failure.
/// - `SearchError::Cancelled` once `cancel` fires.
pub async fn search_with_options(
    query: &str,
    config: &Config,
    options: &SearchOptions,
    cancel: &CancellationToken,
) -> Result<Vec<NormalizedRecord>, SearchError> {
    let request = SearchRequest::new(query, config)?;
    info!(
        endpoint = %request.endpoint,
        auth = request.auth.as_ref().map(auth_kind).unwrap_or("none"),
        "Running search {}",
        redact_query(&request.query)
    );

    let mut state = State::Attempt(request.endpoint.clone());
    loop {
        state = match state {
            State::Attempt(endpoint) => match run_attempt(&request, &endpoint, config, cancel).await
            {
                Ok(records) => State::Done(records),
                Err(e) if e.is_retryable() => {
                    let retry = endpoint.with_port_and_scheme(
                        config.connection.management_port,
                        options.retry_scheme,
                    );
                    warn!(
                        error = %e,
                        from = %endpoint,
                        to = %retry,
                        "Search attempt failed with a transient error, retrying on the management port"
                    );
                    State::Retry(retry)
                }
                Err(e) => State::Failed(e.into_search_error()),
            },
            State::Retry(endpoint) => match run_attempt(&request, &endpoint, config, cancel).await {
                Ok(records) => State::Done(records),
                Err(AttemptError::Search(SearchError::Cancelled)) => {
                    State::Failed(SearchError::Cancelled)
                }
                Err(e) => State::Failed(SearchError::SearchFailed {
                    source: Box::new(e),
                }),
            },
            State::Done(records) => {
                debug!(records = records.len(), "Search finished");
                return Ok(records);
            }
            State::Failed(e) => return Err(e),
        };
    }
}

fn auth_kind(strategy: &AuthStrategy) -> &'static str {
    match strategy {
        AuthStrategy::ApiToken { .. } => "token",
        AuthStrategy::Basic { .. } => "basic",
        AuthStrategy::Session { .. } => "session",
    }
}

/// One full login/submit/poll/fetch/normalize sequence against `endpoint`.
async fn run_attempt(
    request: &SearchRequest,
    endpoint: &Endpoint,
    config: &Config,
    cancel: &CancellationToken,
) -> Result<Vec<NormalizedRecord>, AttemptError> {
    let mut client = SearchClient::builder()
        .endpoint(endpoint.clone())
        .auth_strategy(request.auth.clone())
        .insecure_tls(config.connection.insecure_tls)
        .timeout(config.connection.timeout)
        .build()?;
    debug!(endpoint = %endpoint, "Starting search attempt");

    cancel.run(client.authenticate()).await?;

    let submission = cancel
        .run(client.submit_job(&query::submission_text(&request.query)))
        .await?;
    let sid = sid::extract_sid(&submission)?;

    let policy = PollPolicy::from(&config.search);
    let client_ref = &client;
    let sid_ref = sid.as_str();
    let finished = wait_until_done(
        move || client_ref.fetch_job_status(sid_ref),
        policy,
        cancel,
    )
    .await?;
    if !finished {
        return Err(SearchError::JobTimeout {
            attempts: policy.max_attempts,
        }
        .into());
    }

    let body = cancel
        .run(client.fetch_results(&sid, config.search.results_count))
        .await?;
    let table = normalize::derive_table(&body);
    debug!(
        sid = %sid,
        fields = table.fields.len(),
        rows = table.rows.len(),
        "Derived result table"
    );
    Ok(normalize::to_records(&table))
}
