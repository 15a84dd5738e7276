//! Command-line front end for joblog.
//!
//! Usage:
//!   joblog [--config PATH] log <message|warning|error> <message...>
//!   joblog [--config PATH] destinations

use clap::Parser;
use joblog::cli::{Cli, Command, cmd_destinations, cmd_log};
use joblog::config::Config;
use joblog::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config decides destinations and message types, so it must load before anything else
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    match cli.command {
        Command::Log { severity, message } => cmd_log(&config, severity.into(), &message),
        Command::Destinations => cmd_destinations(&config),
    }
}
