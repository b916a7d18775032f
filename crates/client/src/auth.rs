//! Authentication strategies and request decoration.
//!
//! Responsibilities:
//! - Map the configured credentials onto a client-side strategy.
//! - Attach the matching `Authorization` header to outgoing requests.
//! - Hold the session key obtained by a session login.
//!
//! Does NOT handle:
//! - The login HTTP call itself (see `endpoints::auth`).
//!
//! Invariants:
//! - Secrets stay in `SecretString` and are exposed only while building a header.
//! - `Session` sends no header until a session key has been stored.

use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use splunk_query_config::{AuthStrategy as ConfigAuthStrategy, Config};

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// `Authorization: Bearer <token>`.
    ApiToken { token: SecretString },
    /// `Authorization: Basic <base64 user:pass>` on every request.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Username/password exchanged once for a session key.
    Session {
        username: String,
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Derive the strategy from configuration, if any credentials are set.
    ///
    /// Token wins over credentials. Credentials use HTTP Basic unless
    /// `session_login` is enabled.
    pub fn from_config(config: &Config) -> Option<Self> {
        match config.auth.strategy()? {
            ConfigAuthStrategy::ApiToken { token } => Some(Self::ApiToken { token }),
            ConfigAuthStrategy::Credentials { username, password }
                if config.connection.session_login =>
            {
                Some(Self::Session { username, password })
            }
            ConfigAuthStrategy::Credentials { username, password } => {
                Some(Self::Basic { username, password })
            }
        }
    }
}

/// Authentication state for one client instance.
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    strategy: Option<AuthStrategy>,
    session_key: Option<SecretString>,
}

impl Authenticator {
    pub fn new(strategy: Option<AuthStrategy>) -> Self {
        Self {
            strategy,
            session_key: None,
        }
    }

    /// Credentials still waiting to be exchanged for a session key.
    pub fn pending_login(&self) -> Option<(&str, &SecretString)> {
        match (&self.strategy, &self.session_key) {
            (Some(AuthStrategy::Session { username, password }), None) => {
                Some((username.as_str(), password))
            }
            _ => None,
        }
    }

    pub fn set_session_key(&mut self, key: SecretString) {
        self.session_key = Some(key);
    }

    /// Attach the `Authorization` header for the active strategy.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.strategy {
            Some(AuthStrategy::ApiToken { token }) => builder.bearer_auth(token.expose_secret()),
            Some(AuthStrategy::Basic { username, password }) => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Some(AuthStrategy::Session { .. }) => match &self.session_key {
                Some(key) => builder.header(AUTHORIZATION, format!("Splunk {}", key.expose_secret())),
                None => builder,
            },
            None => builder,
        }
    }
}
