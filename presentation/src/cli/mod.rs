//! Command-line arguments

pub mod commands;
