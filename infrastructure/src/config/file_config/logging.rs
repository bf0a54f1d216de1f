//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write diagnostics here instead of stderr
    pub file: Option<PathBuf>,
    /// Record every turn as JSONL events
    pub conversation_log: Option<PathBuf>,
}
