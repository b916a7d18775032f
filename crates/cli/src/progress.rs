//! Search spinner.
//!
//! Responsibilities:
//! - Show elapsed time while submit, poll and fetch run.
//! - Draw on stderr only, so JSON and CSV piped from stdout stay clean.
//!
//! Does NOT handle:
//! - Deciding visibility; `commands::search` passes `enabled` from `--quiet` and the format.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// An indefinite spinner for the search.
///
/// Always draws to STDERR; no-op when disabled.
pub(crate) struct Spinner {
    label: String,
    pb: Option<ProgressBar>,
}

impl Spinner {
    /// Start the spinner, or a no-op when `enabled` is false.
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_draw_target(ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
            pb.set_style(style);
        }
        pb.set_message(label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            label,
            pb: Some(pb),
        }
    }

    /// Leave a final `<label> done: <detail>` line on stderr.
    pub(crate) fn finish(&self, detail: &str) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.finish_with_message(format!("{} done: {}", self.label, detail));
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        // Clear an unfinished spinner so it does not interleave with error output.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}
