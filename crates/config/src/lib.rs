//! Configuration management for splunk-query.
//!
//! This crate provides the configuration types, the `.env`/environment
//! loader and the connection target resolver shared by the client and CLI.

pub mod constants;
pub mod endpoint;
mod loader;
pub mod types;

pub use endpoint::{Endpoint, Scheme};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none, parse_flag};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, SearchSettings};
