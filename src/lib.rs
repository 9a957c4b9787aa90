//! pomobar - A Pomodoro focus timer for macOS
//!
//! This crate implements the Pomodoro cycle (focus, short rest, long rest,
//! wait for the user to return) as a thread-safe state machine, with macOS
//! platform services (Notification Center, HID idle time, LaunchAgents)
//! behind narrow traits.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomobarError;
pub use timer::SessionController;
