//! Centralized constants for the splunk-query workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Splunk management port.
pub const DEFAULT_MANAGEMENT_PORT: u16 = 8089;

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Default number of job status checks before giving up.
pub const DEFAULT_POLL_ATTEMPTS: u32 = 60;

/// Default spacing between job status checks in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Default `count` passed to the results endpoint.
pub const DEFAULT_RESULTS_COUNT: u64 = 100;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_URL: &str = "SPLUNK_URL";
pub const ENV_URL_ALIAS: &str = "SPLUNK_BASE_URL";
pub const ENV_TOKEN: &str = "SPLUNK_TOKEN";
pub const ENV_TOKEN_ALIAS: &str = "SPLUNK_API_TOKEN";
pub const ENV_USER: &str = "SPLUNK_USER";
pub const ENV_USER_ALIAS: &str = "SPLUNK_USERNAME";
pub const ENV_PASSWORD: &str = "SPLUNK_PASSWORD";
pub const ENV_MGMT_PORT: &str = "SPLUNK_MGMT_PORT";
pub const ENV_SKIP_TLS_VERIFY: &str = "SPLUNK_SKIP_TLS_VERIFY";
pub const ENV_TIMEOUT: &str = "SPLUNK_TIMEOUT";
pub const ENV_SESSION_LOGIN: &str = "SPLUNK_SESSION_LOGIN";
pub const ENV_POLL_ATTEMPTS: &str = "SPLUNK_POLL_ATTEMPTS";
pub const ENV_POLL_INTERVAL_MS: &str = "SPLUNK_POLL_INTERVAL_MS";
pub const ENV_RESULTS_COUNT: &str = "SPLUNK_RESULTS_COUNT";
