//! HTTP client bound to one Splunk endpoint.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retrying against another endpoint (see [`crate::search`])
//!
//! # Invariants
//! - A client targets exactly one `Endpoint` for its whole life; the retry
//!   path builds a new client.
//! - Redirects are never followed, so a `Location` header reaches the caller.

pub mod builder;

use splunk_query_config::Endpoint;
use tracing::debug;

use crate::auth::Authenticator;
use crate::endpoints;
use crate::error::Result;
use crate::models::{JobStatusResponse, SubmitResponse};

/// Splunk search API client for one endpoint.
///
/// ```rust,ignore
/// use splunk_query_client::{AuthStrategy, SearchClient};
///
/// let mut client = SearchClient::builder()
///     .endpoint(endpoint)
///     .auth_strategy(AuthStrategy::from_config(&config))
///     .timeout(config.connection.timeout)
///     .build()?;
/// client.authenticate().await?;
/// let submission = client.submit_job("search index=main").await?;
/// ```
#[derive(Debug)]
pub struct SearchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) endpoint: Endpoint,
    pub(crate) base_url: String,
    pub(crate) auth: Authenticator,
}

impl SearchClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SearchClientBuilder {
        builder::SearchClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Log in when session login is configured and no key is held yet.
    ///
    /// No-op for token, Basic and anonymous clients.
    pub async fn authenticate(&mut self) -> Result<()> {
        let Some((username, password)) = self.auth.pending_login() else {
            return Ok(());
        };
        let key = endpoints::auth::login(&self.http, &self.base_url, username, password).await?;
        debug!(endpoint = %self.endpoint, "Obtained session key");
        self.auth.set_session_key(key);
        Ok(())
    }

    /// Submit `search` (the full search string) as a new job.
    pub async fn submit_job(&self, search: &str) -> Result<SubmitResponse> {
        endpoints::search::submit_job(&self.http, &self.base_url, &self.auth, search).await
    }

    /// Fetch the status document of a job.
    pub async fn fetch_job_status(&self, sid: &str) -> Result<JobStatusResponse> {
        endpoints::search::fetch_job_status(&self.http, &self.base_url, &self.auth, sid).await
    }

    /// Fetch up to `count` results of a finished job.
    pub async fn fetch_results(&self, sid: &str, count: u64) -> Result<String> {
        endpoints::search::fetch_results(&self.http, &self.base_url, &self.auth, sid, count).await
    }
}
