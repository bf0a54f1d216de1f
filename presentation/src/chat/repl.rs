//! rustyline adapter for the line input port

use crate::config::ReplConfig;
use companion_application::{InputError, LineReader};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::debug;

/// Line editor with history, backed by rustyline
///
/// Ctrl-C abandons the current line and prompts again; Ctrl-D ends input.
/// History is written back when the reader is dropped.
pub struct ReadlineInput {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl ReadlineInput {
    pub fn new(config: &ReplConfig) -> Result<Self, InputError> {
        let mut editor = DefaultEditor::new().map_err(|e| InputError::Read(e.to_string()))?;

        let history_path = config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent()
                && let Err(e) = std::fs::create_dir_all(parent)
            {
                debug!("Could not create history directory {}: {}", parent.display(), e);
            }
            if let Err(e) = editor.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineReader for ReadlineInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(InputError::Read(err.to_string())),
            }
        }
    }
}

impl Drop for ReadlineInput {
    fn drop(&mut self) {
        if let Some(ref path) = self.history_path
            && let Err(e) = self.editor.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }
    }
}
