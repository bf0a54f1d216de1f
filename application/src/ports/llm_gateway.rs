//! LLM Gateway port
//!
//! Defines the interface for exchanging one chat-completion request with a
//! provider.

use async_trait::async_trait;
use companion_domain::{ApiReply, Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    InvalidResponse(String),

    #[error("Request task failed: {0}")]
    TaskFailed(String),
}

/// Gateway for LLM communication
///
/// The same gateway instance serves both tracks of a turn concurrently, so
/// implementations must be safe to call from two tasks at once.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `messages`, in order, to `model` and return the structured reply.
    async fn invoke(&self, model: &Model, messages: &[Message])
    -> Result<ApiReply, GatewayError>;
}
