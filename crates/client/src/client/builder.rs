//! Client builder for constructing [`SearchClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (endpoint)
//! - Configuring the underlying HTTP client (timeout, TLS verification, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SearchClient`] methods in `mod.rs`)
//! - Resolving the endpoint from a base URL (see `splunk_query_config::Endpoint`)
//!
//! # Invariants
//! - `endpoint` is required and must be provided before calling `build()`
//! - `insecure_tls` applies to this client only; nothing process-wide is touched
//! - `insecure_tls` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use splunk_query_config::{Endpoint, Scheme, constants::DEFAULT_TIMEOUT_SECS};

use crate::auth::{AuthStrategy, Authenticator};
use crate::client::SearchClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SearchClient`].
///
/// ```rust,ignore
/// use splunk_query_client::{AuthStrategy, SearchClient};
/// use secrecy::SecretString;
///
/// let client = SearchClient::builder()
///     .endpoint(endpoint)
///     .auth_strategy(Some(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     }))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct SearchClientBuilder {
    endpoint: Option<Endpoint>,
    auth_strategy: Option<AuthStrategy>,
    insecure_tls: bool,
    timeout: Duration,
}

impl Default for SearchClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            auth_strategy: None,
            insecure_tls: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SearchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection target.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the authentication strategy; `None` sends no credentials.
    pub fn auth_strategy(mut self, strategy: Option<AuthStrategy>) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Accept invalid TLS certificates for this client.
    ///
    /// # Security Warning
    /// Only use this against servers with self-signed certificates you trust.
    pub fn insecure_tls(mut self, insecure: bool) -> Self {
        self.insecure_tls = insecure;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the [`SearchClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no endpoint was provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<SearchClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ClientError::InvalidUrl("endpoint is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::none());

        if self.insecure_tls {
            if endpoint.scheme == Scheme::Https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "insecure_tls=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        let base_url = endpoint.base_url();

        Ok(SearchClient {
            http,
            endpoint,
            base_url,
            auth: Authenticator::new(self.auth_strategy),
        })
    }
}
