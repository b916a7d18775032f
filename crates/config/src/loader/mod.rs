//! Configuration loader for `.env` files, environment variables and flags.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Resolving connection targets (see `endpoint`).
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::{env_var_or_none, parse_flag};
pub use error::ConfigError;
