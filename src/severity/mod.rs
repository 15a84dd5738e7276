//! The closed set of message kinds a caller can log with.

use std::fmt;
use std::str::FromStr;

/// Discriminants are the integer codes written to the database `type` column.
/// `Ord` lets the internal diagnostics compare against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Routine progress worth keeping a record of.
    #[default]
    Message = 0,
    /// Something unexpected that did not stop the job.
    Warning = 1,
    /// The job, or part of it, failed.
    Error = 2,
}

impl Severity {
    /// Lowercase because config files and CLI args use lowercase names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Fixed-width label used in log file lines, so the message column lines up.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Message => "Message",
            Self::Warning => "Warning",
            Self::Error => "Error  ",
        }
    }

    /// Integer code stored by the database destination.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Message, Self::Warning, Self::Error]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown message type: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "message" | "msg" | "info" => Ok(Self::Message),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
