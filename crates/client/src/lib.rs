//! Splunk search job client.
//!
//! This crate submits a search to the Splunk REST API, waits for the job to
//! finish and returns its results as flat, ordered string records. It copes
//! with the several shapes Splunk uses for job IDs and result payloads, and
//! retries once on the management port when the first attempt hits a
//! transient failure.
//!
//! ```rust,ignore
//! use splunk_query_client::{CancellationToken, search};
//! use splunk_query_config::ConfigLoader;
//!
//! let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
//! let records = search("index=main | head 10", &config, &CancellationToken::new()).await?;
//! ```

pub mod auth;
pub mod cancellation;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod redaction;
pub mod search;

pub use auth::AuthStrategy;
pub use cancellation::CancellationToken;
pub use client::SearchClient;
pub use client::builder::SearchClientBuilder;
pub use error::{AttemptError, ClientError, Result, SearchError};
pub use models::{NormalizedRecord, ResultTable, Row};
pub use redaction::redact_query;
pub use search::{SearchOptions, SearchRequest, search, search_with_options};
