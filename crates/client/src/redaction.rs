//! Query redaction for logs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Redact a query for logging, keeping only its length and a short hash.
///
/// Lets operators correlate log lines without exposing the query text.
pub fn redact_query(query: &str) -> String {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    format!("<{} chars, hash={:08x}>", query.len(), hasher.finish() as u32)
}
