//! Presentation port
//!
//! Everything the session shows to the user goes through this trait. All
//! methods are fire-and-forget.

use companion_domain::{DirectiveHelp, Message, Model, TrackLabel};

/// Renders session output
///
/// Implementations live in the presentation layer.
pub trait SessionPresenter: Send + Sync {
    /// Called once before the startup prompt is read
    fn show_welcome(&self, model: &Model, default_prompt: &str);

    /// Show the prompt the custom track runs with
    fn show_prompt(&self, label: &str, prompt: &str);

    /// Show one track's result. Both results of a turn carry the same
    /// duration: the wall-clock time of the whole joined round.
    fn show_turn_result(&self, label: TrackLabel, message: &Message, duration_secs: f64);

    fn show_status(&self, text: &str);

    fn show_error(&self, text: &str);

    /// List the directives
    fn show_help(&self, entries: &[DirectiveHelp]) {
        self.show_status("Available commands:");
        for entry in entries {
            self.show_status(&format!("{} - {}", entry.name, entry.description));
        }
    }

    /// Called just before both requests of a turn are dispatched
    fn on_turn_start(&self) {}

    /// Called after both requests settled, before results are shown
    fn on_turn_complete(&self) {}
}
