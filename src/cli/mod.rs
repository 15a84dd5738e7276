//! CLI module for joblog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Severity for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SeverityArg {
    Message,
    Warning,
    Error,
}

impl From<SeverityArg> for crate::severity::Severity {
    fn from(severity: SeverityArg) -> Self {
        match severity {
            SeverityArg::Message => Self::Message,
            SeverityArg::Warning => Self::Warning,
            SeverityArg::Error => Self::Error,
        }
    }
}

/// joblog - Send messages through the configured log destinations.
#[derive(Parser)]
#[command(
    name = "joblog",
    version,
    about = "Send messages through the configured log destinations"
)]
pub struct Cli {
    /// Config file (defaults to joblog/joblog.toml in the user config directory)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message.
    Log {
        /// Message type
        #[arg(value_enum)]
        severity: SeverityArg,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// List the destinations and message types the config enables.
    Destinations,
}

pub use commands::{cmd_destinations, cmd_log};
