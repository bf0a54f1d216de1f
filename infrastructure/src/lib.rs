//! Infrastructure layer for prompt-companion
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openrouter;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ApiCredential, ConfigError, ConfigLoader, FileApiConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, load_dotenv,
};
pub use logging::JsonlConversationLogger;
pub use openrouter::{gateway::OpenRouterGateway, protocol::ChatRequest};
pub use storage::JsonTranscriptStore;
