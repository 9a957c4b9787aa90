//! Command implementations for the pomobar CLI.

mod autostart;

pub use autostart::autostart;
