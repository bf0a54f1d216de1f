//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dual_track;
pub mod run_session;
