//! One message from a shell script or cron job, routed like any in-process call.

use crate::config::Config;
use crate::internal;
use crate::logger::{Logger, cell};
use crate::severity::Severity;
use std::process::ExitCode;

/// Initializes the process-wide logger from `config` and logs `words` joined by spaces.
#[must_use]
pub fn cmd_log(config: &Config, severity: Severity, words: &[String]) -> ExitCode {
    let logger = match Logger::from_config_with(config).and_then(cell::initialize_with) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match logger.log(&words.join(" "), severity) {
        Ok(report) => {
            for failure in report.failures() {
                internal::warn(
                    "CLI",
                    &format!("{} did not record the message", failure.destination),
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("CLI", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
