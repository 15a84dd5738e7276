//! Builds destinations from the `[[destinations]]` section of the config.

use super::{ConsoleDestination, DatabaseDestination, Destination, FileDestination};
use crate::config::{Config, DestinationConfig, LOG_FILE_DIRECTORY};
use crate::internal;

/// One destination per enabled entry, in config order.
///
/// Names match case-insensitively against `file`, `console` and `database`;
/// anything else is skipped with a diagnostic warning.
///
/// # Errors
/// `Config` when a database entry has no connection string; any error from
/// constructing the destination itself.
pub fn create_destinations(config: &Config) -> Result<Vec<Box<dyn Destination>>, crate::Error> {
    let mut destinations: Vec<Box<dyn Destination>> = Vec::new();

    for entry in config.destinations.iter().filter(|d| d.enabled) {
        if let Some(destination) = create_destination(config, entry)? {
            internal::debug("FACTORY", &format!("Created {} destination", destination.name()));
            destinations.push(destination);
        }
    }

    Ok(destinations)
}

fn create_destination(
    config: &Config,
    entry: &DestinationConfig,
) -> Result<Option<Box<dyn Destination>>, crate::Error> {
    let destination: Box<dyn Destination> = match entry.name.to_lowercase().as_str() {
        "file" => {
            let mut file = config
                .file_setting(LOG_FILE_DIRECTORY)
                .map_or_else(FileDestination::new, FileDestination::in_directory);
            if let Some(format) = &entry.date_format {
                file = file.date_format(format);
            }
            Box::new(file)
        }
        "console" => {
            let mut console = ConsoleDestination::new().colors(entry.colors.unwrap_or(true));
            if let Some(format) = &entry.date_format {
                console = console.date_format(format);
            }
            Box::new(console)
        }
        "database" => {
            let connection_string = entry
                .connection_string
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .ok_or_else(|| {
                    crate::Error::Config(
                        "database destination requires a connection_string setting".to_string(),
                    )
                })?;
            Box::new(DatabaseDestination::new(connection_string)?)
        }
        other => {
            internal::warn("FACTORY", &format!("Ignoring unknown destination: {other}"));
            return Ok(None);
        }
    };

    Ok(Some(destination))
}
