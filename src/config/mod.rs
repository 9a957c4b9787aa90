//! Configuration management for pomobar.
//!
//! This module handles loading and saving configuration from `~/.pomobar/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, NotificationConfig, TimerConfig};
