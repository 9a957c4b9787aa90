use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomobar")]
#[command(about = "A Pomodoro focus timer for macOS")]
#[command(long_about = "pomobar - A Pomodoro focus timer for macOS

Cycles you through focus sessions and rests, notifies you at each
transition, and starts the next focus session when you come back to the
keyboard. Durations live in ~/.pomobar/config.yaml.

QUICK START:
  pomobar                   Run the timer
  pomobar autostart enable  Launch pomobar automatically at login

KEYS (while running):
  s  Start focus      k  Skip to rest / skip to focus
  x  Stop timer       a  Toggle start-at-login
  q  Quit

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  pomobar <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer (default when no command is given)
    ///
    /// Starts the interactive timer UI. The countdown runs in the
    /// background; use the keys shown in the status bar to start a focus
    /// session, skip, or stop.
    ///
    /// # Examples
    ///
    ///   pomobar
    ///   pomobar run
    #[command(alias = "r")]
    Run,

    /// Manage launch-at-login registration
    ///
    /// Registers or removes a LaunchAgent so pomobar starts automatically
    /// when you log in. This never touches the timer itself.
    ///
    /// # Examples
    ///
    ///   pomobar autostart enable
    ///   pomobar autostart status -o json
    #[command(alias = "auto")]
    Autostart(AutostartArgs),
}

#[derive(Args)]
pub struct AutostartArgs {
    #[command(subcommand)]
    pub command: AutostartCommands,
}

#[derive(Subcommand)]
pub enum AutostartCommands {
    /// Register pomobar to launch at login
    Enable,
    /// Remove the launch-at-login registration
    Disable,
    /// Show whether launch-at-login is registered
    Status,
}
