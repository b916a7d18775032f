//! Connection target resolution.
//!
//! Responsibilities:
//! - Turn a configured base URL into a `(scheme, host, port)` target.
//! - Apply an explicit port/scheme override (used by the management-port retry).
//!
//! Does NOT handle:
//! - Reading the base URL from env or flags (see `loader`).
//! - Opening connections (see client crate).
//!
//! Invariants:
//! - Port priority: override, then the port written in the base URL, then the
//!   management port.
//! - Only `http` and `https` base URLs with a host are accepted.
//! - An `Endpoint` is never mutated; the retry path builds a new value.

use std::fmt;

use crate::loader::ConfigError;

/// URL scheme of a connection target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved connection target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: Scheme,
    /// Host as it appears in a URL (IPv6 literals keep their brackets).
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Resolve a target from `base_url`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingBaseUrl` when `base_url` is absent or blank.
    /// - `ConfigError::InvalidValue` when it does not parse as an http(s) URL
    ///   with a host.
    pub fn resolve(
        base_url: Option<&str>,
        override_port: Option<u16>,
        override_scheme: Option<Scheme>,
        management_port: u16,
    ) -> Result<Self, ConfigError> {
        let raw = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let parsed = url::Url::parse(raw).map_err(|e| {
            ConfigError::invalid(
                "base_url",
                format!("must be an absolute http(s) URL with a host (e.g. https://localhost:8089): {e}"),
            )
        })?;

        let scheme = Scheme::parse(parsed.scheme()).ok_or_else(|| {
            ConfigError::invalid(
                "base_url",
                format!(
                    "scheme must be http or https (e.g. https://localhost:8089), got: {}",
                    parsed.scheme()
                ),
            )
        })?;

        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                ConfigError::invalid("base_url", "host is required (e.g. https://localhost:8089)")
            })?
            .to_string();

        // `Url::port` is None for a written default port, so check the text.
        let embedded_port = if has_explicit_port(raw) {
            parsed.port_or_known_default()
        } else {
            None
        };
        let port = override_port.or(embedded_port).unwrap_or(management_port);

        Ok(Self {
            scheme: override_scheme.unwrap_or(scheme),
            host,
            port,
        })
    }

    /// Same host on a different port and scheme.
    pub fn with_port_and_scheme(&self, port: u16, scheme: Scheme) -> Self {
        Self {
            scheme,
            host: self.host.clone(),
            port,
        }
    }

    /// Root URL of the target, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// True when the authority of `raw` ends in `:<digits>`.
fn has_explicit_port(raw: &str) -> bool {
    let Some((_, rest)) = raw.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let after_host = match host_port.strip_prefix('[') {
        Some(v6) => v6.split_once(']').map_or("", |(_, tail)| tail),
        None => host_port.rfind(':').map_or("", |i| &host_port[i..]),
    };
    after_host
        .strip_prefix(':')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}
