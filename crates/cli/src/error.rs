//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `SearchError` and `ConfigError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 3-10 identify one search failure kind each.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use splunk_query_client::SearchError;
use splunk_query_config::ConfigError;

/// Structured exit codes for splunk-query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Search completed and results were written.
    Success = 0,

    /// Unclassified failure (I/O, output writing, bad input file).
    GeneralError = 2,

    /// No query given, or the query was blank.
    QueryRequired = 3,

    /// No base URL configured.
    BaseUrlRequired = 4,

    /// Transport or API failure on the first attempt.
    NetworkError = 5,

    /// The management-port retry failed too.
    SearchFailed = 6,

    /// The submission response carried no recognizable SID.
    NoSidReturned = 7,

    /// The job status endpoint returned a non-success status.
    JobStatusFetchFailed = 8,

    /// The job did not finish within the configured number of status checks.
    ///
    /// Scripts may retry with a narrower time range.
    JobTimeout = 9,

    /// Invalid configuration value (URL, port, timeout, flag).
    ConfigError = 10,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&SearchError> for ExitCode {
    fn from(err: &SearchError) -> Self {
        match err {
            SearchError::QueryRequired => ExitCode::QueryRequired,
            SearchError::BaseUrlRequired => ExitCode::BaseUrlRequired,
            SearchError::Config(e) => ExitCode::from(e),
            SearchError::NoSidReturned => ExitCode::NoSidReturned,
            SearchError::JobStatusFetchFailed { .. } => ExitCode::JobStatusFetchFailed,
            SearchError::JobTimeout { .. } => ExitCode::JobTimeout,
            SearchError::NetworkError { .. } => ExitCode::NetworkError,
            SearchError::SearchFailed { .. } => ExitCode::SearchFailed,
            SearchError::Cancelled => ExitCode::Interrupted,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingBaseUrl => ExitCode::BaseUrlRequired,
            _ => ExitCode::ConfigError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns `ExitCode::GeneralError` if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(search_err) = cause.downcast_ref::<SearchError>() {
                return ExitCode::from(search_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }
        ExitCode::GeneralError
    }
}
