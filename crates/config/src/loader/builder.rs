//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` merging `.env`, environment and flags.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Resolving the base URL into a host/port target (see `endpoint`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called
//!   after `from_env()`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - A missing base URL is not a build error; the search entry point reports it.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::MAX_TIMEOUT_SECS;
use crate::types::{AuthConfig, Config, ConnectionConfig, SearchSettings};

/// Configuration loader that builds config from `.env`, environment variables
/// and explicit overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    token: Option<SecretString>,
    username: Option<String>,
    password: Option<SecretString>,
    management_port: Option<u16>,
    insecure_tls: Option<bool>,
    timeout: Option<Duration>,
    session_login: Option<bool>,
    poll_max_attempts: Option<u32>,
    poll_interval: Option<Duration>,
    results_count: Option<u64>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the management port.
    pub fn with_management_port(mut self, port: u16) -> Self {
        self.management_port = Some(port);
        self
    }

    /// Accept invalid TLS certificates.
    pub fn with_insecure_tls(mut self, insecure: bool) -> Self {
        self.insecure_tls = Some(insecure);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Log in with username/password to obtain a session key.
    pub fn with_session_login(mut self, enabled: bool) -> Self {
        self.session_login = Some(enabled);
        self
    }

    pub fn with_poll_max_attempts(mut self, attempts: u32) -> Self {
        self.poll_max_attempts = Some(attempts);
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn with_results_count(mut self, count: u64) -> Self {
        self.results_count = Some(count);
        self
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_management_port(&mut self, port: Option<u16>) {
        self.management_port = port;
    }

    pub(crate) fn set_insecure_tls(&mut self, insecure: Option<bool>) {
        self.insecure_tls = insecure;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_session_login(&mut self, enabled: Option<bool>) {
        self.session_login = enabled;
    }

    pub(crate) fn set_poll_max_attempts(&mut self, attempts: Option<u32>) {
        self.poll_max_attempts = attempts;
    }

    pub(crate) fn set_poll_interval(&mut self, interval: Option<Duration>) {
        self.poll_interval = interval;
    }

    pub(crate) fn set_results_count(&mut self, count: Option<u64>) {
        self.results_count = count;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the base URL is present but malformed, or a
    /// numeric setting is out of range.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(validate_and_normalize_base_url)
            .transpose()?;

        let defaults = ConnectionConfig::default();
        let connection = ConnectionConfig {
            base_url,
            management_port: self.management_port.unwrap_or(defaults.management_port),
            insecure_tls: self.insecure_tls.unwrap_or(defaults.insecure_tls),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            session_login: self.session_login.unwrap_or(defaults.session_login),
        };
        Self::validate_connection(&connection)?;

        let search_defaults = SearchSettings::default();
        let search = SearchSettings {
            poll_max_attempts: self
                .poll_max_attempts
                .unwrap_or(search_defaults.poll_max_attempts),
            poll_interval: self.poll_interval.unwrap_or(search_defaults.poll_interval),
            results_count: self.results_count.unwrap_or(search_defaults.results_count),
        };
        Self::validate_search(&search)?;

        Ok(Config {
            connection,
            auth: AuthConfig {
                token: self.token,
                username: self.username,
                password: self.password,
            },
            search,
        })
    }

    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }
        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout must not exceed {MAX_TIMEOUT_SECS} seconds (got {timeout_secs})"
                ),
            });
        }
        if connection.management_port == 0 {
            return Err(ConfigError::invalid("management_port", "must be between 1 and 65535"));
        }
        Ok(())
    }

    fn validate_search(search: &SearchSettings) -> Result<(), ConfigError> {
        if search.poll_max_attempts == 0 {
            return Err(ConfigError::invalid("poll_max_attempts", "must be at least 1"));
        }
        if search.results_count == 0 {
            return Err(ConfigError::invalid("results_count", "must be at least 1"));
        }
        Ok(())
    }
}

/// Validate and normalize a base URL.
///
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
///
/// The input text is kept otherwise; re-serializing through `Url` would drop
/// an explicit default port such as `:443`.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        ConfigError::invalid(
            "base_url",
            format!("must be an absolute http(s) URL with a host (e.g. https://localhost:8089): {e}"),
        )
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::invalid(
            "base_url",
            format!("scheme must be http or https (e.g. https://localhost:8089), got: {scheme}"),
        ));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::invalid(
            "base_url",
            "host is required (e.g. https://localhost:8089)",
        ));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
