use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomobar::cli::args::{Cli, Commands};
use pomobar::cli::commands;
use pomobar::config::Config;
use pomobar::platform::{LaunchAgent, MacIdleProbe, OsaNotifier};
use pomobar::timer::{Durations, RandomPicker, SessionController, TimerEngine};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = Config::load()?;
            let notifier = OsaNotifier::new(
                config.notifications.enabled,
                config.notifications.sound,
            );
            let engine = TimerEngine::new(
                Durations::from(&config.timer),
                Box::new(notifier),
                Box::new(MacIdleProbe),
                Box::new(RandomPicker),
            );
            let controller = SessionController::new(engine);
            let agent = LaunchAgent::new()?;
            pomobar::tui::run(&controller, &agent)?;
            String::new()
        }
        Commands::Autostart(args) => commands::autostart(args.command, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
