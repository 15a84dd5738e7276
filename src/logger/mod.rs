//! The coordinator: gates each message by severity, then fans it out to every
//! destination in order, isolating failures so one broken sink never starves
//! the others.

mod builder;
pub mod cell;
mod from_config;
mod report;

pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder};
pub use cell::LoggerCell;
pub use report::{Delivery, DeliveryReport};

use crate::destination::{Destination, DestinationKind};
use crate::internal;
use crate::severity::Severity;
use std::collections::HashSet;

/// Immutable after construction, so it can be shared across threads without locks.
pub struct Logger {
    destinations: Vec<Box<dyn Destination>>,
    enabled: HashSet<Severity>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.destinations.iter().map(|d| d.name()).collect();
        f.debug_struct("Logger")
            .field("destinations", &names)
            .field("enabled", &self.enabled_severities())
            .finish()
    }
}

impl Logger {
    /// # Errors
    /// `NoDestinations` or `NoSeverities` when either input is empty.
    pub fn new(
        destinations: Vec<Box<dyn Destination>>,
        severities: impl IntoIterator<Item = Severity>,
    ) -> Result<Self, crate::Error> {
        if destinations.is_empty() {
            return Err(crate::Error::NoDestinations);
        }

        let enabled: HashSet<Severity> = severities.into_iter().collect();
        if enabled.is_empty() {
            return Err(crate::Error::NoSeverities);
        }

        Ok(Self {
            destinations,
            enabled,
        })
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Trims `message` and sends it to every destination.
    ///
    /// Blank messages are skipped without touching any destination. A
    /// destination that fails is reported through the first console
    /// destination, if any, and the remaining destinations still run.
    ///
    /// # Errors
    /// `SeverityNotEnabled` when `severity` is outside the configured set. Delivery
    /// failures are never returned here; they are in the report.
    pub fn log(&self, message: &str, severity: Severity) -> Result<DeliveryReport, crate::Error> {
        let text = message.trim();
        if text.is_empty() {
            return Ok(DeliveryReport::skipped());
        }

        if !self.enabled.contains(&severity) {
            return Err(crate::Error::SeverityNotEnabled(severity));
        }

        let mut report = DeliveryReport::with_capacity(self.destinations.len());
        for destination in &self.destinations {
            let result = destination.emit(text, severity);
            if let Err(e) = &result {
                self.report_failure(destination.name(), e);
            }
            report.push(Delivery {
                destination: destination.name().to_string(),
                kind: destination.kind(),
                result,
            });
        }

        Ok(report)
    }

    /// `None` is treated like a blank message.
    ///
    /// # Errors
    /// Same as [`Logger::log`].
    pub fn log_opt(
        &self,
        message: Option<&str>,
        severity: Severity,
    ) -> Result<DeliveryReport, crate::Error> {
        message.map_or_else(|| Ok(DeliveryReport::skipped()), |m| self.log(m, severity))
    }

    /// # Errors
    /// Same as [`Logger::log`].
    pub fn message(&self, message: &str) -> Result<DeliveryReport, crate::Error> {
        self.log(message, Severity::Message)
    }

    /// # Errors
    /// Same as [`Logger::log`].
    pub fn warning(&self, message: &str) -> Result<DeliveryReport, crate::Error> {
        self.log(message, Severity::Warning)
    }

    /// # Errors
    /// Same as [`Logger::log`].
    pub fn error(&self, message: &str) -> Result<DeliveryReport, crate::Error> {
        self.log(message, Severity::Error)
    }

    /// Best effort: if the console itself fails, there is nowhere left to report to.
    fn report_failure(&self, name: &str, err: &crate::Error) {
        internal::warn("LOGGER", &format!("Delivery to {name} failed: {err}"));

        if let Some(console) = self
            .destinations
            .iter()
            .find(|d| d.kind() == DestinationKind::Console)
        {
            let _ = console.emit(
                &format!("Failed to log to destination: {err}"),
                Severity::Error,
            );
        }
    }

    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.enabled.contains(&severity)
    }

    /// Enabled severities in ascending order.
    #[must_use]
    pub fn enabled_severities(&self) -> Vec<Severity> {
        let mut severities: Vec<Severity> = self.enabled.iter().copied().collect();
        severities.sort();
        severities
    }

    #[must_use]
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// Destination names in delivery order.
    #[must_use]
    pub fn destination_names(&self) -> Vec<&str> {
        self.destinations.iter().map(|d| d.name()).collect()
    }
}
