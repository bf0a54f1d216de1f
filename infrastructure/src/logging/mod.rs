//! Structured conversation logging

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
