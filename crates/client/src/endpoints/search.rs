//! Search job endpoints.
//!
//! # What this module handles:
//! - Submitting a search job
//! - Fetching job status
//! - Fetching job results
//!
//! # What this module does NOT handle:
//! - Extracting the SID from a submission (see [`crate::search::sid`])
//! - Deciding when a job is done (see [`crate::search::poll`])

use reqwest::Client;
use reqwest::header::LOCATION;
use tracing::debug;

use crate::auth::Authenticator;
use crate::endpoints::{api_error, encode_path_segment, send_request};
use crate::error::Result;
use crate::models::{JobStatusResponse, SubmissionBody, SubmitResponse};
use crate::redact_query;

/// Submit a search job.
///
/// `search` is the full search string as sent in the form body. Redirect
/// responses are returned as-is so their `Location` header can be used to
/// recover the SID.
pub async fn submit_job(
    client: &Client,
    base_url: &str,
    auth: &Authenticator,
    search: &str,
) -> Result<SubmitResponse> {
    debug!("Creating search job: {}", redact_query(search));

    let url = format!("{}/services/search/jobs", base_url);
    let builder = auth
        .apply(client.post(&url))
        .form(&[("search", search), ("output_mode", "json")]);

    let response = builder.send().await?;
    let status = response.status();
    if !(status.is_success() || status.is_redirection()) {
        return Err(api_error(response).await);
    }

    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let text = response.text().await?;
    debug!(
        status = status.as_u16(),
        body_len = text.len(),
        has_location = location.is_some(),
        "Search job submitted"
    );

    Ok(SubmitResponse {
        status: status.as_u16(),
        location,
        body: SubmissionBody::decode(&text),
    })
}

/// Fetch the status document of a job.
///
/// Non-2xx statuses are returned, not turned into errors, so the poller can
/// report them with the job context.
pub async fn fetch_job_status(
    client: &Client,
    base_url: &str,
    auth: &Authenticator,
    sid: &str,
) -> Result<JobStatusResponse> {
    let url = format!(
        "{}/services/search/jobs/{}",
        base_url,
        encode_path_segment(sid)
    );
    let response = auth
        .apply(client.get(&url))
        .query(&[("output_mode", "json")])
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;
    debug!(sid, status, body_len = body.len(), "Fetched job status");

    Ok(JobStatusResponse { status, body })
}

/// Fetch the results of a finished job as raw text.
pub async fn fetch_results(
    client: &Client,
    base_url: &str,
    auth: &Authenticator,
    sid: &str,
    count: u64,
) -> Result<String> {
    let url = format!(
        "{}/services/search/jobs/{}/results",
        base_url,
        encode_path_segment(sid)
    );
    let builder = auth
        .apply(client.get(&url))
        .query(&[("output_mode", "json".to_string()), ("count", count.to_string())]);

    let response = send_request(builder).await?;
    let body = response.text().await?;
    debug!(sid, body_len = body.len(), "Fetched job results");

    Ok(body)
}
