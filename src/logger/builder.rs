//! Stepwise construction for code that configures destinations without a config file.

use super::Logger;
use crate::destination::{ConsoleDestination, Destination, FileDestination};
use crate::severity::Severity;
use std::path::Path;

/// Collects destinations and enabled severities; `build` validates both.
#[derive(Default)]
pub struct LoggerBuilder {
    destinations: Vec<Box<dyn Destination>>,
    severities: Vec<Severity>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severities.push(severity);
        self
    }

    #[must_use]
    pub fn severities(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.severities.extend(severities);
        self
    }

    /// Enables every severity.
    #[must_use]
    pub fn all_severities(self) -> Self {
        self.severities(Severity::all())
    }

    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            destination: ConsoleDestination::new(),
        }
    }

    /// Starts from the current working directory; override with `directory`.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            destination: FileDestination::new(),
        }
    }

    /// Any destination, built-in or custom. Delivery order follows call order.
    #[must_use]
    pub fn destination(mut self, destination: impl Destination + 'static) -> Self {
        self.destinations.push(Box::new(destination));
        self
    }

    /// # Errors
    /// `NoDestinations` or `NoSeverities` when nothing was added.
    pub fn build(self) -> Result<Logger, crate::Error> {
        Logger::new(self.destinations, self.severities)
    }
}

pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    destination: ConsoleDestination,
}

impl ConsoleBuilder {
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.destination = self.destination.colors(enabled);
        self
    }

    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.destination = self.destination.date_format(format);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more destinations.
    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent.destination(self.destination)
    }
}

pub struct FileBuilder {
    parent: LoggerBuilder,
    destination: FileDestination,
}

impl FileBuilder {
    #[must_use]
    pub fn directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.destination = self.destination.directory(dir);
        self
    }

    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.destination = self.destination.date_format(format);
        self
    }

    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent.destination(self.destination)
    }
}
