//! OpenRouter (OpenAI-compatible) chat-completion adapter
//!
//! - [`gateway::OpenRouterGateway`]: [`LlmGateway`](companion_application::LlmGateway)
//!   implementation over HTTPS
//! - [`protocol`]: request body and error body helpers

pub mod gateway;
pub mod protocol;
