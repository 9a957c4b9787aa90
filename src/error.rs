//! Error types for pomobar.

use thiserror::Error;

/// Errors that can occur in pomobar.
///
/// The timer state machine itself is total and cannot fail; these cover
/// the edges of the program (configuration, platform services, terminal).
#[derive(Error, Debug)]
pub enum PomobarError {
    /// Configuration loading, parsing, or path resolution failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A platform service (launchctl, osascript, ioreg) misbehaved in a
    /// way that could not be swallowed at the boundary.
    #[error("Platform error: {0}")]
    Platform(String),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
