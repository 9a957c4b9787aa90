//! Configuration settings for pomobar.
//!
//! Settings are loaded from `~/.pomobar/config.yaml`.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomobarError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Timer durations and cadence.
    pub timer: TimerConfig,
    /// Desktop notification behavior.
    pub notifications: NotificationConfig,
}

/// Timer durations and long-rest cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus session duration in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Short rest duration in minutes.
    #[serde(default = "default_short_rest_minutes")]
    pub short_rest_minutes: u32,
    /// Long rest duration in minutes.
    #[serde(default = "default_long_rest_minutes")]
    pub long_rest_minutes: u32,
    /// Every Nth completed focus session earns a long rest.
    #[serde(default = "default_sessions_until_long_rest")]
    pub sessions_until_long_rest: u32,
}

impl TimerConfig {
    /// Planned focus duration.
    #[must_use]
    pub fn focus_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.focus_minutes))
    }

    /// Planned short rest duration.
    #[must_use]
    pub fn short_rest_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.short_rest_minutes))
    }

    /// Planned long rest duration.
    #[must_use]
    pub fn long_rest_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.long_rest_minutes))
    }
}

/// Desktop notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Play notification sound.
    #[serde(default = "default_true")]
    pub sound: bool,
}

// Default value functions for serde
const fn default_focus_minutes() -> u32 {
    25
}

const fn default_short_rest_minutes() -> u32 {
    5
}

const fn default_long_rest_minutes() -> u32 {
    15
}

const fn default_sessions_until_long_rest() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            short_rest_minutes: default_short_rest_minutes(),
            long_rest_minutes: default_long_rest_minutes(),
            sessions_until_long_rest: default_sessions_until_long_rest(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            sound: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomobarError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomobarError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomobarError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomobarError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), PomobarError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomobarError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomobarError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomobarError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
