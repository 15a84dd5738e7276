//! TOML configuration: which destinations are on, which message types are
//! accepted, and free-form file settings.
//!
//! Loading logic lives here; the serde schema lives in `structs`.

mod structs;

pub use structs::{DestinationConfig, GeneralConfig, MessageTypeConfig};

use crate::internal;
use crate::severity::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File setting naming the directory the file destination writes into.
pub const LOG_FILE_DIRECTORY: &str = "LogFileDirectory";

/// `#[serde(default)]` on every field means an empty file parses; it just
/// enables nothing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    /// Order matters: destinations are invoked in the order listed.
    pub destinations: Vec<DestinationConfig>,
    pub message_types: Vec<MessageTypeConfig>,
    /// Arbitrary key/value settings, e.g. `LogFileDirectory`.
    pub file_settings: HashMap<String, String>,
}

impl Config {
    /// Loads `joblog/joblog.toml` from the platform config directory.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::debug(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text directly.
    ///
    /// # Errors
    /// Returns `ConfigParse` on malformed TOML or wrongly typed fields.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("joblog").join("joblog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Names of enabled destinations, in file order.
    #[must_use]
    pub fn enabled_destinations(&self) -> Vec<&str> {
        self.destinations
            .iter()
            .filter(|d| d.enabled)
            .map(|d| d.name.as_str())
            .collect()
    }

    /// Case-insensitive lookup of a destination entry.
    #[must_use]
    pub fn destination(&self, name: &str) -> Option<&DestinationConfig> {
        self.destinations
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn destination_connection_string(&self, name: &str) -> Option<&str> {
        self.destination(name)?.connection_string.as_deref()
    }

    /// Enabled message types in file order, duplicates and unknown names dropped.
    #[must_use]
    pub fn enabled_severities(&self) -> Vec<Severity> {
        let mut severities = Vec::new();
        for entry in self.message_types.iter().filter(|m| m.enabled) {
            match entry.kind.parse::<Severity>() {
                Ok(severity) if !severities.contains(&severity) => severities.push(severity),
                Ok(_) => {}
                Err(e) => internal::warn("CONFIG", &format!("Ignoring {e}")),
            }
        }
        severities
    }

    /// Absence is `None`, not an error.
    #[must_use]
    pub fn file_setting(&self, key: &str) -> Option<&str> {
        self.file_settings.get(key).map(String::as_str)
    }

    /// Unparseable values fall back to errors-only.
    #[must_use]
    pub fn diagnostics_level(&self) -> Severity {
        self.general.diagnostics.parse().unwrap_or(Severity::Error)
    }
}
