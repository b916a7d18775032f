//! Error types for the search client.
//!
//! Responsibilities:
//! - `ClientError`: transport and API-level failures of single HTTP calls.
//! - `SearchError`: the domain failures a search invocation reports to callers.
//! - `AttemptError`: the failure of one submit/poll/fetch attempt, which the
//!   orchestrator classifies as retryable or fatal.
//!
//! Invariants:
//! - Only the orchestrator turns an `AttemptError` into a `SearchError`.
//! - Retry classification looks at the whole source chain, not just the top
//!   message, since reqwest hides hyper and io errors behind `source()`.

use std::error::Error as StdError;
use std::io;

use splunk_query_config::ConfigError;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// HTTP status Splunk uses as a generic failure sentinel.
pub const GENERIC_FAILURE_STATUS: u16 = 600;

/// Message fragments that mark a failure as transient.
const RETRYABLE_SIGNATURES: [&str; 4] = [
    "No session key",
    "ECONNRESET",
    "socket hang up",
    "connection closed before message completed",
];

/// Errors that can occur during a single HTTP exchange with Splunk.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Splunk.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Invalid response format from Splunk.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL or missing connection target.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Failures reported by a search invocation.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("query is required. Pass --query, --query-file or pipe it on stdin.")]
    QueryRequired,

    #[error("base URL is required. Set SPLUNK_URL or pass --url.")]
    BaseUrlRequired,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no SID returned from search job submission")]
    NoSidReturned,

    #[error("job status fetch failed: {status}")]
    JobStatusFetchFailed { status: u16 },

    #[error("search job did not finish after {attempts} status checks")]
    JobTimeout { attempts: u32 },

    #[error("network error: {source}")]
    NetworkError { source: ClientError },

    #[error("search failed after retrying on the management port: {source}")]
    SearchFailed { source: Box<AttemptError> },

    #[error("search cancelled")]
    Cancelled,
}

/// Walk an error and its sources looking for a transient-failure marker.
fn chain_is_transient(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::ConnectionReset {
                return true;
            }
        }
        let message = err.to_string();
        if RETRYABLE_SIGNATURES.iter().any(|sig| message.contains(sig)) {
            return true;
        }
        current = err.source();
    }
    false
}

/// Failure of one search attempt against one endpoint.
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl AttemptError {
    /// HTTP status carried by the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Search(SearchError::JobStatusFetchFailed { status }) => Some(*status),
            Self::Search(_) => None,
            Self::Client(e) => e.status(),
        }
    }

    /// True when the failure looks transient and the whole attempt should be
    /// repeated once against the management endpoint.
    pub fn is_retryable(&self) -> bool {
        if matches!(self, Self::Search(SearchError::Cancelled)) {
            return false;
        }
        if self.status() == Some(GENERIC_FAILURE_STATUS) {
            return true;
        }

        chain_is_transient(self)
    }

    /// Convert into the error a caller sees when no retry happens.
    ///
    /// Search errors propagate unchanged; transport errors are wrapped as
    /// `SearchError::NetworkError`.
    pub fn into_search_error(self) -> SearchError {
        match self {
            Self::Search(e) => e,
            Self::Client(source) => SearchError::NetworkError { source },
        }
    }
}
