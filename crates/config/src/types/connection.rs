//! Connection and search configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, management port, TLS, timeout).
//! - Define search settings (poll policy, results count).
//! - Define the main `Config` structure combining connection, auth and search.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Turning a base URL into a host/port target (see `endpoint` module).
//!
//! Invariants:
//! - Default values come from `constants`, not magic numbers.
//! - `base_url` is optional here; the search entry point reports its absence.

use std::time::Duration;

use crate::constants::{
    DEFAULT_MANAGEMENT_PORT, DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_RESULTS_COUNT, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;

/// Connection configuration for the Splunk server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk server (e.g., https://localhost:8089), normalized
    /// without a trailing slash.
    pub base_url: Option<String>,
    /// Port used when the base URL has none, and for the retry path.
    pub management_port: u16,
    /// Accept invalid TLS certificates for this client only.
    pub insecure_tls: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Exchange username/password for a session key before searching.
    pub session_login: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            management_port: DEFAULT_MANAGEMENT_PORT,
            insecure_tls: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_login: false,
        }
    }
}

/// Search job tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub poll_max_attempts: u32,
    pub poll_interval: Duration,
    pub results_count: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            poll_max_attempts: DEFAULT_POLL_ATTEMPTS,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            results_count: DEFAULT_RESULTS_COUNT,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub search: SearchSettings,
}

impl Config {
    /// Create a config pointing at `base_url` with otherwise default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: Some(base_url.into()),
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }
}
