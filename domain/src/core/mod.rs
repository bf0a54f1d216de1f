//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the chat-completion model both tracks are sent to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
