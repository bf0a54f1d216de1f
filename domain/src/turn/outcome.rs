//! Normalization of a track's transport outcome into a message.
//!
//! A turn never fails as a whole. Each track's outcome is collapsed into an
//! assistant message: the completion text on success, or an
//! `"Error: <reason>"` placeholder when
//!
//! 1. the transport call failed,
//! 2. the reply has no usable `choices[0].message.content`, or
//! 3. that content is empty after trimming,
//!
//! checked in that order.
//!
//! ```
//! use companion_domain::{ApiReply, resolve_outcome};
//!
//! let ok = resolve_outcome(Ok::<_, String>(ApiReply::from_text("  Hi!\n")));
//! assert_eq!(ok.content(), "  Hi!\n");
//!
//! let failed = resolve_outcome(Err::<ApiReply, _>("connection reset"));
//! assert_eq!(failed.content(), "Error: connection reset");
//! ```

use super::label::TrackLabel;
use crate::session::entities::Message;
use crate::session::response::ApiReply;
use thiserror::Error;

/// Why a track produced an error turn instead of a completion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnFailure {
    #[error("{0}")]
    Transport(String),

    #[error("Invalid response from API{}", detail_suffix(.detail))]
    MissingContent { detail: Option<String> },

    #[error("Empty response from API")]
    EmptyContent,
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl TurnFailure {
    /// Judge a successful transport reply, returning the completion text.
    pub fn check_reply(reply: &ApiReply) -> Result<&str, TurnFailure> {
        let content = reply
            .first_content()
            .ok_or_else(|| TurnFailure::MissingContent {
                detail: reply.error_message().map(str::to_string),
            })?;
        if content.trim().is_empty() {
            return Err(TurnFailure::EmptyContent);
        }
        Ok(content)
    }
}

/// Collapse one transport outcome into the track's resulting message.
pub fn resolve_outcome<E: std::fmt::Display>(outcome: Result<ApiReply, E>) -> Message {
    let failure = match outcome {
        Ok(reply) => match TurnFailure::check_reply(&reply) {
            Ok(content) => return Message::assistant(content),
            Err(failure) => failure,
        },
        Err(e) => TurnFailure::Transport(e.to_string()),
    };
    Message::error(failure)
}

/// A track's resulting message for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackResult {
    pub label: TrackLabel,
    pub message: Message,
}

impl TrackResult {
    pub fn new(label: TrackLabel, message: Message) -> Self {
        Self { label, message }
    }

    pub fn is_error(&self) -> bool {
        self.message.is_error()
    }
}
