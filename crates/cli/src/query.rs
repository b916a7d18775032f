//! Query text resolution.
//!
//! Priority: `--query`, then `--query-file`, then stdin. A stdin that cannot
//! be read yields an empty query, which the search rejects as missing.

use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Resolve the query from flags or stdin.
///
/// # Errors
///
/// Fails only when `--query-file` is given and cannot be read.
pub fn resolve_query(query: Option<&str>, query_file: Option<&Path>) -> Result<String> {
    if let Some(query) = query {
        return Ok(query.to_string());
    }
    if let Some(path) = query_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file: {}", path.display()));
    }
    Ok(read_stdin())
}

fn read_stdin() -> String {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        debug!("stdin is a terminal, not reading a query from it");
        return String::new();
    }
    let mut buf = String::new();
    match stdin.read_to_string(&mut buf) {
        Ok(_) => buf,
        Err(e) => {
            debug!(error = %e, "Failed to read query from stdin");
            String::new()
        }
    }
}
