//! Destinations durably record one log line each. The three built-in ones
//! (console, file, database) cover the configured cases; the `Destination`
//! trait lets callers plug in their own without touching the logger.

mod console;
mod database;
pub mod factory;
mod file;

pub use console::{CaptureBuffer, ConsoleDestination};
pub use database::DatabaseDestination;
pub use factory::create_destinations;
pub use file::FileDestination;

use crate::severity::Severity;
use std::fmt;

/// Lets the logger find a console destination to report failures through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    Console,
    File,
    Database,
    /// Anything supplied by the caller.
    Custom,
}

impl DestinationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::File => "file",
            Self::Database => "database",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Send + Sync` so one logger can be shared across threads without a lock around it.
pub trait Destination: Send + Sync {
    /// Records `text` at `severity`. The logger only passes trimmed, non-empty
    /// text, but implementations still treat blank input as a no-op.
    ///
    /// # Errors
    /// Whatever the underlying sink reports (I/O, connection, statement).
    fn emit(&self, text: &str, severity: Severity) -> Result<(), crate::Error>;

    fn kind(&self) -> DestinationKind {
        DestinationKind::Custom
    }

    /// Shown in delivery reports and diagnostics.
    fn name(&self) -> &str {
        self.kind().as_str()
    }
}

/// Trims `text`, returning `None` when nothing is left to record.
pub(crate) fn prepare(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
