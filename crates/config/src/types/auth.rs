//! Authentication types for splunk-query configuration.
//!
//! Responsibilities:
//! - Hold the configured token and username/password pair.
//! - Select the authentication strategy (token wins over credentials).
//!
//! Does NOT handle:
//! - Building request headers or logging in (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` so `Debug` never prints them.
//! - A username without a password (or the reverse) does not form a strategy.

use secrecy::SecretString;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Bearer token authentication.
    ApiToken { token: SecretString },
    /// Username and password, sent as HTTP Basic or exchanged for a session key.
    Credentials {
        username: String,
        password: SecretString,
    },
}

/// Authentication configuration as resolved from env and CLI flags.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub token: Option<SecretString>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl AuthConfig {
    /// Pick the strategy to use, preferring the API token.
    ///
    /// Returns `None` when neither a token nor a complete username/password
    /// pair is configured; requests are then sent unauthenticated.
    pub fn strategy(&self) -> Option<AuthStrategy> {
        if let Some(token) = &self.token {
            return Some(AuthStrategy::ApiToken {
                token: token.clone(),
            });
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(AuthStrategy::Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}
