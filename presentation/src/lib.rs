//! Presentation layer for prompt-companion
//!
//! This crate contains CLI definitions, console output, the turn spinner,
//! and the line-editor input adapter.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ReadlineInput;
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsolePresenter;
pub use output::formatter::{Panel, Theme};
pub use progress::reporter::TurnSpinner;
