//! Conversation track: one prompt variant's linear history.
//!
//! Index 0 is always the system message. Each recorded turn appends a user
//! message followed by exactly one assistant (or error) message.
//!
//! The history is kept for export and reset only. Requests are built by
//! [`ConversationTrack::turn_payload`], which always sends just the system
//! prompt and the current user message, so both prompt variants are compared
//! on the same bounded context no matter how long the session runs.

use super::entities::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTrack {
    messages: Vec<Message>,
}

impl ConversationTrack {
    /// Create a track seeded with `prompt`
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(prompt)],
        }
    }

    /// Replace the whole history with a single system message
    pub fn seed(&mut self, prompt: impl Into<String>) {
        self.messages.clear();
        self.messages.push(Message::system(prompt));
    }

    /// The system prompt this track was seeded with
    pub fn system_prompt(&self) -> &str {
        self.messages[0].content()
    }

    /// Request payload for one turn: `[system, user]`, never the history.
    pub fn turn_payload(&self, user_text: &str) -> Vec<Message> {
        vec![self.messages[0].clone(), Message::user(user_text)]
    }

    /// Append the user message and the turn's resulting message.
    pub fn record_result(&mut self, user_text: &str, result: Message) {
        self.messages.push(Message::user(user_text));
        self.messages.push(result);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of recorded turns
    pub fn turn_count(&self) -> usize {
        (self.messages.len() - 1) / 2
    }
}
