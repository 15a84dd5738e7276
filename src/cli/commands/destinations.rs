//! Shows what a `log` call would fan out to, without logging anything.

use crate::config::Config;
use crate::destination::create_destinations;
use crate::internal;
use std::process::ExitCode;

#[must_use]
pub fn cmd_destinations(config: &Config) -> ExitCode {
    let destinations = match create_destinations(config) {
        Ok(destinations) => destinations,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    println!("Destinations:");
    if destinations.is_empty() {
        println!("  (none)");
    }
    for destination in &destinations {
        println!("  {}", destination.name());
    }

    println!("Message types:");
    let severities = config.enabled_severities();
    if severities.is_empty() {
        println!("  (none)");
    }
    for severity in severities {
        println!("  {severity}");
    }

    ExitCode::SUCCESS
}
