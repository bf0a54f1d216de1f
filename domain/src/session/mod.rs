//! Conversation domain.
//!
//! - [`entities::Message`]: a single role/content message
//! - [`response::ApiReply`]: the structured reply of a chat-completion call
//! - [`track::ConversationTrack`]: one prompt variant's linear history
//! - [`transcript::Transcript`]: the export-only record of both tracks

pub mod entities;
pub mod response;
pub mod track;
pub mod transcript;
