//! Spinner shown around daemon round-trips
//!
//! Daemon queries block on the network; the spinner gives feedback while
//! they run. In quiet mode it degrades to a no-op.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A spinner for blocking command operations
pub struct CommandSpinner {
    bar: Option<ProgressBar>,
}

impl CommandSpinner {
    /// Create a spinner unless quiet mode suppresses it
    pub fn new_maybe(message: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .expect("invalid spinner template"),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Finish and clear the spinner line
    pub fn clear(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Finish the spinner with a failure message
    pub fn fail(self, message: &str) {
        if let Some(bar) = self.bar {
            bar.finish_with_message(format!("{} {}", console::style("\u{2717}").red(), message));
        }
    }
}
