//! Console presenter for the interactive session

use crate::config::OutputConfig;
use crate::output::formatter::{Panel, Theme};
use crate::progress::reporter::{TURN_MESSAGE, TurnSpinner};
use companion_application::SessionPresenter;
use companion_domain::{Directive, DirectiveHelp, Message, Model, TrackLabel};

const WELCOME_TITLE: &str = "Open Router Prompt Companion";

/// Renders session output to stdout (errors to stderr)
pub struct ConsolePresenter {
    theme: Theme,
    clear_screen: bool,
    spinner: TurnSpinner,
}

impl ConsolePresenter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            theme: Theme::new(config.color),
            clear_screen: config.clear_screen,
            spinner: TurnSpinner::new(),
        }
    }

    /// Presenter with colors, screen clearing and the spinner all off
    pub fn plain() -> Self {
        Self {
            theme: Theme::plain(),
            clear_screen: false,
            spinner: TurnSpinner::hidden(),
        }
    }

    pub fn format_welcome(&self, model: &Model, default_prompt: &str) -> String {
        let mut body = String::new();
        body.push_str(&format!("Model: {}\n\n", model));

        body.push_str("Available commands:\n\n");
        for entry in &Directive::HELP {
            body.push_str(&format!("• {} - {}\n", entry.name, entry.description));
        }

        body.push_str("\nHow it works:\n\n");
        body.push_str("• Every message is sent to OpenRouter twice, at the same time.\n");
        body.push_str("• One request uses the default system prompt below.\n");
        body.push_str("• The other uses the system prompt you enter now.\n");
        body.push_str("• Leave the prompt empty to run both requests with the default.\n");
        body.push_str("• Each request carries only its system prompt and your latest message.\n");

        body.push_str("\nDefault System Prompt:\n\n");
        body.push_str(default_prompt);
        body.push_str("\n\nEnter a system prompt to customize the AI's responses.");

        Panel::new(WELCOME_TITLE, &body).render(&self.theme)
    }

    pub fn format_turn_result(
        &self,
        label: TrackLabel,
        message: &Message,
        duration_secs: f64,
    ) -> String {
        let name = label.display_name();
        let mut out = if message.is_error() {
            self.theme.error(message.content())
        } else {
            let title = format!("{} AI Response", name);
            Panel::new(&title, message.content()).render(&self.theme)
        };
        out.push('\n');
        out.push_str(&self.theme.success(&format!(
            "{} response generated in {:.2} seconds",
            name, duration_secs
        )));
        out
    }

    pub fn format_help(&self, entries: &[DirectiveHelp]) -> String {
        let mut out = self.theme.heading("Available commands:");
        for entry in entries {
            out.push_str(&format!("\n{} - {}", entry.name, entry.description));
        }
        out
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

impl SessionPresenter for ConsolePresenter {
    fn show_welcome(&self, model: &Model, default_prompt: &str) {
        if self.clear_screen {
            // ANSI: erase display, cursor home
            print!("\x1B[2J\x1B[1;1H");
        }
        println!("{}", self.format_welcome(model, default_prompt));
    }

    fn show_prompt(&self, label: &str, prompt: &str) {
        println!("{}", Panel::new(label, prompt).render(&self.theme));
    }

    fn show_turn_result(&self, label: TrackLabel, message: &Message, duration_secs: f64) {
        println!("{}", self.format_turn_result(label, message, duration_secs));
    }

    fn show_status(&self, text: &str) {
        println!("{}", self.theme.success(text));
    }

    fn show_error(&self, text: &str) {
        eprintln!("{}", self.theme.error(text));
    }

    fn show_help(&self, entries: &[DirectiveHelp]) {
        println!("{}", self.format_help(entries));
    }

    fn on_turn_start(&self) {
        self.spinner.start(TURN_MESSAGE);
    }

    fn on_turn_complete(&self) {
        self.spinner.finish();
        println!();
    }
}
