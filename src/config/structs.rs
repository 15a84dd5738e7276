//! Configuration struct definitions.

use serde::Deserialize;

const fn enabled_by_default() -> bool {
    true
}

/// Settings that apply to the crate itself rather than to a destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold for joblog's own stderr diagnostics (message, warning, error).
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            diagnostics: "error".to_string(),
        }
    }
}

/// One `[[destinations]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationConfig {
    /// Dispatch key: `file`, `console` or `database` (case-insensitive).
    pub name: String,
    /// Disabled entries stay in the file but produce no destination.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Required by the database destination.
    #[serde(default, alias = "connectionString")]
    pub connection_string: Option<String>,
    /// Console only; colors are on unless set to `false`.
    #[serde(default)]
    pub colors: Option<bool>,
    /// strftime pattern overriding the short date used in line prefixes and file names.
    #[serde(default)]
    pub date_format: Option<String>,
}

impl DestinationConfig {
    /// Bare enabled entry, handy when building configs in code.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            connection_string: None,
            colors: None,
            date_format: None,
        }
    }

    #[must_use]
    pub fn connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// One `[[message_types]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageTypeConfig {
    /// Severity name; anything outside the closed set is ignored.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl MessageTypeConfig {
    #[must_use]
    pub fn named(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            enabled: true,
        }
    }
}
