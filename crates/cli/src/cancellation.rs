//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Wire Ctrl+C (SIGINT) to the search's cancellation token.
//! - Recognize cancellation in an `anyhow` error chain.
//! - Centralize the cancellation message.
//!
//! Does NOT handle:
//! - Aborting HTTP calls or the poll loop (the client does that once the token fires).
//!
//! Invariants:
//! - The handler cancels at most once; later signals are ignored.

use splunk_query_client::{CancellationToken, SearchError};

/// Spawn a task that cancels `cancel` on the first Ctrl+C.
pub fn install_ctrl_c_handler(cancel: &CancellationToken) {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        tracing::debug!("Ctrl+C received, cancelling search");
        cancel.cancel();
    });
}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<SearchError>(),
            Some(SearchError::Cancelled)
        )
    })
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
