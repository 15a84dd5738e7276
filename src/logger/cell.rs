//! Initialize-once holder for a [`Logger`].
//!
//! A cell starts uninitialized and can be initialized exactly once; a second
//! attempt fails instead of replacing or ignoring. The crate owns one
//! process-wide cell behind [`global`], and applications or tests that want
//! their own scope create a fresh `LoggerCell`.

use super::{DeliveryReport, Logger};
use crate::destination::Destination;
use crate::severity::Severity;
use std::sync::{Mutex, OnceLock, PoisonError};

static GLOBAL: LoggerCell = LoggerCell::new();

#[derive(Debug, Default)]
pub struct LoggerCell {
    logger: OnceLock<Logger>,
    /// Serializes the check-and-publish step; reads never take it.
    init_lock: Mutex<()>,
}

impl LoggerCell {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logger: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Validates the inputs and publishes a logger built from them.
    ///
    /// # Errors
    /// `AlreadyInitialized` if this cell already holds a logger; `NoDestinations`
    /// or `NoSeverities` if an input is empty, in which case nothing is published.
    pub fn initialize(
        &self,
        destinations: Vec<Box<dyn Destination>>,
        severities: impl IntoIterator<Item = Severity>,
    ) -> Result<&Logger, crate::Error> {
        self.publish_with(|| Logger::new(destinations, severities))
    }

    /// Publishes an already-built logger.
    ///
    /// # Errors
    /// `AlreadyInitialized` if this cell already holds a logger.
    pub fn initialize_with(&self, logger: Logger) -> Result<&Logger, crate::Error> {
        self.publish_with(|| Ok(logger))
    }

    fn publish_with<F>(&self, build: F) -> Result<&Logger, crate::Error>
    where
        F: FnOnce() -> Result<Logger, crate::Error>,
    {
        if self.logger.get().is_some() {
            return Err(crate::Error::AlreadyInitialized);
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.logger.get().is_some() {
            return Err(crate::Error::AlreadyInitialized);
        }

        let logger = build()?;
        Ok(self.logger.get_or_init(|| logger))
    }

    /// # Errors
    /// `NotInitialized` before the first successful `initialize`.
    pub fn instance(&self) -> Result<&Logger, crate::Error> {
        self.logger.get().ok_or(crate::Error::NotInitialized)
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.logger.get().is_some()
    }

    /// # Errors
    /// `NotInitialized`, or anything [`Logger::log`] returns.
    pub fn log(&self, message: &str, severity: Severity) -> Result<DeliveryReport, crate::Error> {
        self.instance()?.log(message, severity)
    }
}

/// The process-wide cell.
#[must_use]
pub fn global() -> &'static LoggerCell {
    &GLOBAL
}

/// Initializes the process-wide logger.
///
/// # Errors
/// See [`LoggerCell::initialize`].
pub fn initialize(
    destinations: Vec<Box<dyn Destination>>,
    severities: impl IntoIterator<Item = Severity>,
) -> Result<&'static Logger, crate::Error> {
    GLOBAL.initialize(destinations, severities)
}

/// Publishes an already-built logger as the process-wide one.
///
/// # Errors
/// See [`LoggerCell::initialize_with`].
pub fn initialize_with(logger: Logger) -> Result<&'static Logger, crate::Error> {
    GLOBAL.initialize_with(logger)
}

/// # Errors
/// `NotInitialized` until [`initialize`] has succeeded.
pub fn instance() -> Result<&'static Logger, crate::Error> {
    GLOBAL.instance()
}

/// Logs through the process-wide logger.
///
/// # Errors
/// See [`LoggerCell::log`].
pub fn log(message: &str, severity: Severity) -> Result<DeliveryReport, crate::Error> {
    GLOBAL.log(message, severity)
}
