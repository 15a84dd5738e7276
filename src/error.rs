//! Unified error type for all joblog operations.

use crate::severity::Severity;

/// Error type for joblog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// A destination was enabled without a setting it cannot work without.
    Config(String),
    /// A destination was constructed with an unusable argument.
    InvalidArgument(String),
    /// The logger was queried before `initialize`.
    NotInitialized,
    /// `initialize` was called a second time.
    AlreadyInitialized,
    /// Tried to build a logger with no destinations.
    NoDestinations,
    /// Tried to build a logger with no enabled message types.
    NoSeverities,
    /// Logged with a message type the configuration does not enable.
    SeverityNotEnabled(Severity),
    /// Database connection or statement failure.
    Database(sqlx::Error),
    /// The async runtime backing the database destination could not run.
    Runtime(String),
}

impl Error {
    /// Delivery failures are isolated per destination; everything else is raised to the caller.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Database(_) | Self::Runtime(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Config(s) => write!(f, "configuration error: {s}"),
            Self::InvalidArgument(s) => write!(f, "invalid argument: {s}"),
            Self::NotInitialized => write!(
                f,
                "logger is not initialized; call initialize before logging"
            ),
            Self::AlreadyInitialized => write!(f, "logger has already been initialized"),
            Self::NoDestinations => {
                write!(f, "at least one logging destination must be configured")
            }
            Self::NoSeverities => write!(f, "at least one message type must be enabled"),
            Self::SeverityNotEnabled(s) => {
                write!(f, "message type '{s}' is not enabled in the configuration")
            }
            Self::Database(e) => write!(f, "database error: {e}"),
            Self::Runtime(s) => write!(f, "runtime error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(e)
    }
}
