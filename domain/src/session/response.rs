//! Structured reply of a chat-completion call.
//!
//! Mirrors the OpenAI-compatible response body. Every field is optional on
//! the wire so that a malformed reply still deserializes and can be judged
//! by [`resolve_outcome`](crate::turn::outcome::resolve_outcome) instead of
//! failing at the transport layer.
//!
//! ```
//! use companion_domain::ApiReply;
//!
//! let reply: ApiReply = serde_json::from_str(
//!     r#"{"choices":[{"message":{"role":"assistant","content":"Hello!"}}]}"#,
//! ).unwrap();
//! assert_eq!(reply.first_content(), Some("Hello!"));
//! ```

use serde::{Deserialize, Serialize};

/// A chat-completion reply with zero or more choices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Model that actually served the request (routers may substitute)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Provider error object, present on some failed requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl ApiReply {
    /// A reply with a single assistant choice
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: Some(ChoiceMessage {
                    role: Some("assistant".to_string()),
                    content: Some(text.into()),
                }),
            }],
            ..Self::default()
        }
    }

    /// Content of the first choice's message. Later choices are ignored.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }

    /// Message of the provider error object, if the reply carries one
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_content_ignores_later_choices() {
        let reply: ApiReply = serde_json::from_str(
            r#"{"choices":[
                {"message":{"role":"assistant","content":"first"}},
                {"message":{"role":"assistant","content":"second"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reply.first_content(), Some("first"));
    }

    #[test]
    fn test_missing_choices_deserializes_empty() {
        let reply: ApiReply = serde_json::from_str(
            r#"{"error":{"message":"No auth credentials found","code":401}}"#,
        )
        .unwrap();
        assert!(reply.choices.is_empty());
        assert_eq!(reply.first_content(), None);
        assert_eq!(reply.error_message(), Some("No auth credentials found"));
    }

    #[test]
    fn test_null_content() {
        let reply: ApiReply = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.first_content(), None);
    }

    #[test]
    fn test_from_text() {
        let reply = ApiReply::from_text("ok");
        assert_eq!(reply.first_content(), Some("ok"));
        assert!(reply.error.is_none());
    }
}
