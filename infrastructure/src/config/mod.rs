//! Configuration file loading for prompt-companion
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PROMPT_COMPANION_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./companion.toml` or `./.companion.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/prompt-companion/config.toml`
//! 5. Default values
//!
//! The API credential itself is never read from these files; it comes from
//! the environment variable named by `api.api_key_env`.

mod credential;
mod file_config;
mod loader;

pub use credential::{ApiCredential, ConfigError, load_dotenv};
pub use file_config::{
    FileApiConfig, FileConfig, FileLoggingConfig, FileModelConfig, FileOutputConfig,
    FilePromptsConfig, FileReplConfig, FileTranscriptConfig,
};
pub use loader::ConfigLoader;
