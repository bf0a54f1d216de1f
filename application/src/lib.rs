//! Application layer for prompt-companion
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    input::{InputError, LineReader},
    llm_gateway::{GatewayError, LlmGateway},
    presenter::SessionPresenter,
    transcript_store::{StoreError, TranscriptStore},
};
pub use use_cases::dual_track::{DualTrackSession, TurnReport};
pub use use_cases::run_session::{RunSessionError, RunSessionUseCase, SessionExit};
