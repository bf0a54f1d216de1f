//! Unified transcript of both tracks.
//!
//! Per turn: the user message, then the baseline result, then the custom
//! result. Serializes as a plain JSON array of messages.

use super::entities::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_user(&mut self, content: &str) {
        self.messages.push(Message::user(content));
    }

    pub fn record_result(&mut self, result: Message) {
        self.messages.push(result);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
