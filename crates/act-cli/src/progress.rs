use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Stderr spinner marking a pending report. Inert when progress output is
/// disabled (quiet mode, non-table formats, or stderr not a terminal).
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        let bar = ui::prefs().progress.then(|| {
            let style = ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner());
            let bar = ProgressBar::new_spinner()
                .with_style(style)
                .with_message(message.to_string());
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        });
        Self { bar }
    }

    /// Remove the spinner before the result is printed.
    pub fn succeed(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Leave a failure line in place of the spinner.
    pub fn fail(self, message: &str) {
        if let Some(bar) = self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}
