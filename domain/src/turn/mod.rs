//! Per-turn concepts shared by both tracks.
//!
//! - [`label::TrackLabel`]: which prompt variant a result belongs to
//! - [`outcome::resolve_outcome`]: turns a transport outcome into a message

pub mod label;
pub mod outcome;
