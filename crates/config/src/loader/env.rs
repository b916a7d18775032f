//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SPLUNK_*` environment variables.
//! - Apply environment variable values to a `ConfigLoader` instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - The primary name wins over its alias when both are set.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_MGMT_PORT, ENV_PASSWORD, ENV_POLL_ATTEMPTS, ENV_POLL_INTERVAL_MS, ENV_RESULTS_COUNT,
    ENV_SESSION_LOGIN, ENV_SKIP_TLS_VERIFY, ENV_TIMEOUT, ENV_TOKEN, ENV_TOKEN_ALIAS, ENV_URL,
    ENV_URL_ALIAS, ENV_USER, ENV_USER_ALIAS,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_with_alias(primary: &str, alias: &str) -> Option<String> {
    env_var_or_none(primary).or_else(|| env_var_or_none(alias))
}

/// Parse a boolean flag written as `1`/`0`, `true`/`false` or `yes`/`no`.
pub fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::invalid(var, "must be 1, 0, true or false")),
    }
}

fn parse_number<T: FromStr>(var: &str, raw: &str) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::invalid(var, format!("must be a non-negative integer, got '{raw}'")))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_with_alias(ENV_URL, ENV_URL_ALIAS) {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_with_alias(ENV_TOKEN, ENV_TOKEN_ALIAS) {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(username) = env_with_alias(ENV_USER, ENV_USER_ALIAS) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(port) = env_var_or_none(ENV_MGMT_PORT) {
        loader.set_management_port(Some(parse_number(ENV_MGMT_PORT, &port)?));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_TLS_VERIFY) {
        loader.set_insecure_tls(Some(parse_flag(ENV_SKIP_TLS_VERIFY, &skip)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = parse_number(ENV_TIMEOUT, &timeout)?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(session) = env_var_or_none(ENV_SESSION_LOGIN) {
        loader.set_session_login(Some(parse_flag(ENV_SESSION_LOGIN, &session)?));
    }
    if let Some(attempts) = env_var_or_none(ENV_POLL_ATTEMPTS) {
        loader.set_poll_max_attempts(Some(parse_number(ENV_POLL_ATTEMPTS, &attempts)?));
    }
    if let Some(interval) = env_var_or_none(ENV_POLL_INTERVAL_MS) {
        let ms: u64 = parse_number(ENV_POLL_INTERVAL_MS, &interval)?;
        loader.set_poll_interval(Some(Duration::from_millis(ms)));
    }
    if let Some(count) = env_var_or_none(ENV_RESULTS_COUNT) {
        loader.set_results_count(Some(parse_number(ENV_RESULTS_COUNT, &count)?));
    }
    Ok(())
}
