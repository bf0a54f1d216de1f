//! Transcript persistence port

use companion_domain::Transcript;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persists the unified transcript
pub trait TranscriptStore: Send + Sync {
    /// Write the whole transcript, replacing any previous save.
    ///
    /// Returns the location written to.
    fn save(&self, transcript: &Transcript) -> Result<PathBuf, StoreError>;
}
