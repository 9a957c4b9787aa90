//! Autostart command implementation.
//!
//! Enables, disables, or reports the launch-at-login LaunchAgent.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{AutostartCommands, OutputFormat};
use crate::error::PomobarError;
use crate::platform::{Autostart, LaunchAgent};

/// Execute autostart subcommands.
///
/// # Errors
///
/// Returns an error if the LaunchAgent plist cannot be written or removed.
pub fn autostart(cmd: AutostartCommands, format: OutputFormat) -> Result<String, PomobarError> {
    let agent = LaunchAgent::new()?;
    run(&agent, cmd, format)
}

fn run(
    agent: &dyn Autostart,
    cmd: AutostartCommands,
    format: OutputFormat,
) -> Result<String, PomobarError> {
    match cmd {
        AutostartCommands::Enable => {
            agent.enable()?;
            match format {
                OutputFormat::Json => to_status_json(true),
                OutputFormat::Pretty => Ok(format!(
                    "{} pomobar will start automatically when you log in.",
                    "Auto-start enabled.".green()
                )),
            }
        }

        AutostartCommands::Disable => {
            agent.disable()?;
            match format {
                OutputFormat::Json => to_status_json(false),
                OutputFormat::Pretty => Ok(format!(
                    "{} pomobar will not start automatically on login.",
                    "Auto-start disabled.".yellow()
                )),
            }
        }

        AutostartCommands::Status => {
            let enabled = agent.is_enabled();
            match format {
                OutputFormat::Json => to_status_json(enabled),
                OutputFormat::Pretty => Ok(if enabled {
                    format!("Auto-start is {}.", "enabled".green())
                } else {
                    format!("Auto-start is {}.", "disabled".yellow())
                }),
            }
        }
    }
}

fn to_status_json(enabled: bool) -> Result<String, PomobarError> {
    Ok(serde_json::to_string_pretty(&json!({ "enabled": enabled }))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_agent(dir: &TempDir) -> LaunchAgent {
        LaunchAgent::with_paths(
            dir.path().join("agent.plist"),
            PathBuf::from("/usr/local/bin/pomobar"),
        )
    }

    #[test]
    fn test_enable_then_status() {
        let dir = TempDir::new().unwrap();
        let agent = test_agent(&dir);

        run(&agent, AutostartCommands::Enable, OutputFormat::Pretty).unwrap();
        let status = run(&agent, AutostartCommands::Status, OutputFormat::Pretty).unwrap();
        assert!(status.contains("enabled"));
    }

    #[test]
    fn test_disable_then_status_json() {
        let dir = TempDir::new().unwrap();
        let agent = test_agent(&dir);

        run(&agent, AutostartCommands::Enable, OutputFormat::Json).unwrap();
        run(&agent, AutostartCommands::Disable, OutputFormat::Json).unwrap();

        let status = run(&agent, AutostartCommands::Status, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&status).unwrap();
        assert_eq!(parsed["enabled"], false);
    }

    #[test]
    fn test_status_json_shape() {
        let dir = TempDir::new().unwrap();
        let agent = test_agent(&dir);

        let status = run(&agent, AutostartCommands::Status, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&status).unwrap();
        assert!(parsed.get("enabled").is_some());
    }
}
