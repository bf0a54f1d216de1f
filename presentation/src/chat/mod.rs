//! Interactive line input
//!
//! Provides a readline-based [`LineReader`](companion_application::LineReader)
//! with persistent history.

mod repl;

pub use repl::ReadlineInput;
