//! Command-line interface for pomobar.

pub mod args;
pub mod commands;
