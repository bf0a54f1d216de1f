//! Wire types for the chat-completions endpoint

use companion_domain::{ApiReply, Message, Model};
use serde::Serialize;

/// Request body: the model and the ordered messages, nothing else
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a Model, messages: &'a [Message]) -> Self {
        Self {
            model: model.as_str(),
            messages,
        }
    }
}

/// Longest raw body quoted in an error message
const MAX_ERROR_BODY: usize = 200;

/// Best-effort description of a non-success response body.
///
/// Prefers the provider's `error.message`; falls back to the (truncated)
/// raw body.
pub fn describe_error_body(body: &str) -> String {
    if let Ok(reply) = serde_json::from_str::<ApiReply>(body)
        && let Some(message) = reply.error_message()
    {
        return message.to_string();
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
