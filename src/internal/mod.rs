//! joblog's own diagnostics: directory creation, skipped config entries,
//! and delivery failures that would otherwise disappear.
//!
//! Lines go to stderr so they never mix with the console destination's stdout.
//! The threshold lives in a `OnceLock`; the first `init` wins and later calls
//! are no-ops. Until then only errors are printed.

use crate::config::Config;
use crate::severity::Severity;
use std::io::{self, Write};
use std::sync::OnceLock;

static THRESHOLD: OnceLock<Severity> = OnceLock::new();

const DEFAULT_THRESHOLD: Severity = Severity::Error;

/// Sets the diagnostics threshold for the rest of the process.
pub fn init(threshold: Severity) {
    if THRESHOLD.set(threshold).is_ok() {
        debug("INTERNAL", &format!("Diagnostics threshold: {threshold}"));
    }
}

/// Reuses the already-loaded config to pick the threshold.
pub fn init_with_config(config: &Config) {
    init(config.diagnostics_level());
}

#[must_use]
pub fn threshold() -> Severity {
    THRESHOLD.get().copied().unwrap_or(DEFAULT_THRESHOLD)
}

fn log(severity: Severity, scope: &str, msg: &str) {
    if severity < threshold() {
        return;
    }
    let tag = match severity {
        Severity::Message => "DEBUG",
        Severity::Warning => "WARN",
        Severity::Error => "ERROR",
    };
    let _ = writeln!(io::stderr(), "[{tag:<5}] {scope:<10}  {msg}");
}

/// Startup and housekeeping detail.
pub fn debug(scope: &str, msg: &str) {
    log(Severity::Message, scope, msg);
}

/// Skipped config entries and isolated delivery failures.
pub fn warn(scope: &str, msg: &str) {
    log(Severity::Warning, scope, msg);
}

/// Failures with no other place to be reported.
pub fn error(scope: &str, msg: &str) {
    log(Severity::Error, scope, msg);
}
