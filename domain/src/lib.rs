//! Domain layer for prompt-companion
//!
//! This crate contains the core entities and value objects for comparing two
//! system prompts side by side. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tracks
//!
//! Every user turn is evaluated on two [`ConversationTrack`]s:
//!
//! - **Baseline**: seeded with the built-in default system prompt
//! - **Custom**: seeded with the prompt the user entered at startup
//!   (or the default one when nothing was entered)
//!
//! ## Transcript
//!
//! The [`Transcript`] flattens both tracks into one export-only record:
//! the user message, then the baseline result, then the custom result.

pub mod core;
pub mod interaction;
pub mod prompt;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use interaction::{Directive, DirectiveHelp};
pub use prompt::{DEFAULT_SYSTEM_PROMPT, PromptPair};
pub use session::{
    entities::{ERROR_PREFIX, Message, Role},
    response::{ApiErrorBody, ApiReply, Choice, ChoiceMessage},
    track::ConversationTrack,
    transcript::Transcript,
};
pub use turn::{
    label::TrackLabel,
    outcome::{TrackResult, TurnFailure, resolve_outcome},
};
