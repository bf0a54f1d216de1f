//! Spinner shown while a turn's two requests are in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Message shown next to the spinner
pub const TURN_MESSAGE: &str = "Processing default and user responses...";

/// Indeterminate spinner for one turn at a time
pub struct TurnSpinner {
    bar: Mutex<Option<ProgressBar>>,
    hidden: bool,
}

impl TurnSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            hidden: false,
        }
    }

    /// A spinner that tracks state but never draws
    pub fn hidden() -> Self {
        Self {
            bar: Mutex::new(None),
            hidden: true,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.cyan} {msg:.bold.cyan} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning. A spinner that is already running is replaced.
    pub fn start(&self, message: &str) {
        let pb = if self.hidden {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_style(Self::spinner_style());
        pb.set_message(message.to_string());

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    /// Stop and erase the spinner. Does nothing when none is running.
    pub fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Default for TurnSpinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_finish() {
        let spinner = TurnSpinner::hidden();
        assert!(!spinner.is_active());

        spinner.start(TURN_MESSAGE);
        assert!(spinner.is_active());

        spinner.finish();
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_finish_without_start_is_harmless() {
        let spinner = TurnSpinner::hidden();
        spinner.finish();
        spinner.finish();
        assert!(!spinner.is_active());
    }

    #[test]
    fn test_restart_replaces_running_spinner() {
        let spinner = TurnSpinner::hidden();
        spinner.start("first");
        spinner.start("second");
        assert!(spinner.is_active());
        spinner.finish();
        assert!(!spinner.is_active());
    }
}
