//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod api;
mod logging;
mod output;
mod repl;

pub use api::FileApiConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use companion_application::SessionConfig;
use companion_domain::{DEFAULT_SYSTEM_PROMPT, DomainError, Model};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat-completion endpoint settings
    pub api: FileApiConfig,
    /// Model both tracks are sent to
    pub model: FileModelConfig,
    /// Baseline system prompt
    pub prompts: FilePromptsConfig,
    /// Where `/save` writes the transcript
    pub transcript: FileTranscriptConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Diagnostic and conversation logs
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Session settings for the application layer
    pub fn session_config(&self) -> Result<SessionConfig, DomainError> {
        Ok(SessionConfig::new(Model::new(&self.model.id)?)
            .with_default_prompt(self.prompts.default.clone()))
    }
}

/// `[model]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    pub id: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            id: Model::DEFAULT_ID.to_string(),
        }
    }
}

/// `[prompts]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptsConfig {
    /// Baseline prompt, also used for the custom track when none is entered
    pub default: String,
}

impl Default for FilePromptsConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// `[transcript]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Relative paths resolve against the working directory
    pub file: PathBuf,
}

impl Default for FileTranscriptConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("conversation_history.json"),
        }
    }
}
