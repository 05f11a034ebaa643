//! # tasks-console
//!
//! Binary entry point: loads settings, initializes logging, and runs the
//! menu loop on stdin/stdout.

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tasks_console::Console;
use tasks_logging::LogLevel;
use tasks_settings::TasksSettings;

/// In-memory task manager demo.
#[derive(Parser, Debug)]
#[command(name = "tasks-console", about = "Add, list, complete, and delete tasks")]
struct Cli {
    /// Settings file (defaults to `~/.tasks/settings.json`).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log level for stderr output (overrides settings).
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Skip the welcome banner.
    #[arg(long)]
    no_welcome: bool,
}

impl Cli {
    /// Fold command-line flags over loaded settings.
    fn apply(&self, settings: &mut TasksSettings) {
        if let Some(level) = self.log_level {
            settings.logging.level = level;
        }
        if self.no_welcome {
            settings.console.show_welcome = false;
        }
    }
}

fn parse_log_level(value: &str) -> std::result::Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| {
        format!("unknown log level \"{value}\" (expected trace, debug, info, warn, or error)")
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let settings_path = args
        .settings
        .clone()
        .unwrap_or_else(tasks_settings::settings_path);
    // the configured level is not known until settings load, so rejected
    // overrides are reported at the CLI level or the default
    let mut settings =
        tasks_logging::with_bootstrap_subscriber(args.log_level.unwrap_or_default(), || {
            tasks_settings::load_settings_from_path(&settings_path)
        })
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;
    args.apply(&mut settings);

    tasks_logging::init_subscriber(settings.logging.level);
    tracing::debug!(path = %settings_path.display(), ?settings, "settings loaded");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), settings.console);
    console.run().context("Console session failed")?;
    Ok(())
}
