//! Line input port

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Read(String),
}

/// Blocking source of input lines
pub trait LineReader {
    /// Show `prompt` and read one line without its trailing newline.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError>;
}
