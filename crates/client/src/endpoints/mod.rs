//! Raw Splunk REST endpoints.
//!
//! Each function issues one HTTP call and returns a typed response. Retry
//! policy, polling and SID extraction live in [`crate::search`].

pub mod auth;
mod request;
pub mod search;
pub mod url_encoding;

pub use request::{api_error, send_request};
pub use url_encoding::encode_path_segment;
