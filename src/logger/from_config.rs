//! Logger construction from a joblog config file.

use super::Logger;
use crate::config::Config;
use crate::destination::create_destinations;
use crate::internal;

impl Logger {
    /// Loads the default config file and builds a logger from it.
    ///
    /// # Errors
    /// Config loading errors, plus everything [`Logger::from_config_with`] returns.
    pub fn from_config() -> Result<Self, crate::Error> {
        let config = Config::load()?;
        Self::from_config_with(&config)
    }

    /// Destinations come from the factory in config order; severities from `[[message_types]]`.
    ///
    /// # Errors
    /// Factory configuration errors, `NoDestinations` or `NoSeverities`.
    pub fn from_config_with(config: &Config) -> Result<Self, crate::Error> {
        internal::debug("LOGGER", "Building logger from config");

        let destinations = create_destinations(config)?;
        let severities = config.enabled_severities();

        if destinations.is_empty() {
            internal::warn("LOGGER", "No destinations enabled");
        }

        let logger = Self::new(destinations, severities)?;
        internal::debug(
            "LOGGER",
            &format!(
                "Destinations: [{}], message types: [{}]",
                logger.destination_names().join(", "),
                logger
                    .enabled_severities()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );
        Ok(logger)
    }
}
