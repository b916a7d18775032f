//! Cooperative cancellation for a running search.
//!
//! Responsibilities:
//! - Provide a small cancellation token that can be cloned into a signal handler.
//! - Race in-flight HTTP calls and poll sleeps against cancellation.
//!
//! Does NOT handle:
//! - Installing signal handlers (the CLI does that).
//!
//! Invariants:
//! - Once cancelled, a token remains cancelled forever.

use std::future::Future;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

use crate::error::{AttemptError, SearchError};

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// Safe against missed notifications by creating `notified()` future first,
    /// then checking atomic state.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Run `fut` unless the token fires first.
    pub async fn run<T, E, F>(&self, fut: F) -> Result<T, AttemptError>
    where
        F: Future<Output = Result<T, E>>,
        AttemptError: From<E>,
    {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(SearchError::Cancelled.into()),
            result = fut => result.map_err(AttemptError::from),
        }
    }
}
