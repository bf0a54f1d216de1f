//! JSON file writer for the unified transcript.
//!
//! Each save overwrites the file with the whole transcript as an indented
//! array of `{role, content}` objects.

use companion_application::{StoreError, TranscriptStore};
use companion_domain::Transcript;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &[u8] = b"    ";

pub struct JsonTranscriptStore {
    path: PathBuf,
}

impl JsonTranscriptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(transcript: &Transcript) -> Result<Vec<u8>, StoreError> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        transcript.serialize(&mut serializer)?;
        Ok(buf)
    }
}

impl TranscriptStore for JsonTranscriptStore {
    fn save(&self, transcript: &Transcript) -> Result<PathBuf, StoreError> {
        let bytes = Self::render(transcript)?;
        std::fs::write(&self.path, bytes)?;
        debug!(
            path = %self.path.display(),
            messages = transcript.len(),
            "Transcript saved"
        );
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use companion_domain::Message;

    fn two_turns() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.record_user("Hi");
        transcript.record_result(Message::assistant("Hello!"));
        transcript.record_result(Message::assistant("Bonjour !"));
        transcript.record_user("How are you?");
        transcript.record_result(Message::assistant("Fine, thanks."));
        transcript.record_result(Message::error("Empty response from API"));
        transcript
    }

    #[test]
    fn test_save_writes_ordered_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTranscriptStore::new(dir.path().join("conversation_history.json"));

        let transcript = two_turns();
        let path = store.save(&transcript).unwrap();
        assert_eq!(path, store.path());

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], serde_json::json!({"role": "user", "content": "Hi"}));
        assert_eq!(
            items[5],
            serde_json::json!({"role": "assistant", "content": "Error: Empty response from API"})
        );

        let restored: Transcript = serde_json::from_str(&content).unwrap();
        assert_eq!(restored, transcript);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTranscriptStore::new(dir.path().join("t.json"));

        let mut transcript = Transcript::new();
        transcript.record_user("Hi");
        store.save(&transcript).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "[\n    {\n        \"role\": \"user\",\n        \"content\": \"Hi\"\n    }\n]"
        );
    }

    #[test]
    fn test_save_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTranscriptStore::new(dir.path().join("t.json"));

        store.save(&two_turns()).unwrap();
        store.save(&Transcript::new()).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTranscriptStore::new(dir.path().join("missing").join("t.json"));

        assert!(matches!(
            store.save(&Transcript::new()),
            Err(StoreError::Io(_))
        ));
    }
}
