//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]`, so a partial
//! JSON file only needs the keys it changes.

use serde::{Deserialize, Serialize};

pub use tasks_logging::LogLevel;

use crate::errors::{Result, SettingsError};

/// Upper bound for [`ConsoleSettings::separator_width`].
pub const MAX_SEPARATOR_WIDTH: usize = 200;

/// Root settings type.
///
/// ```json
/// {
///   "logging": { "level": "debug" },
///   "console": { "showWelcome": false }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TasksSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// Menu appearance.
    pub console: ConsoleSettings,
}

impl Default for TasksSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "tasks".to_string(),
            logging: LoggingSettings::default(),
            console: ConsoleSettings::default(),
        }
    }
}

impl TasksSettings {
    /// Reject values the console cannot render.
    pub fn validate(&self) -> Result<()> {
        let width = self.console.separator_width;
        if width == 0 || width > MAX_SEPARATOR_WIDTH {
            return Err(SettingsError::InvalidValue(format!(
                "separatorWidth must be between 1 and {MAX_SEPARATOR_WIDTH}, got {width}"
            )));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level written to stderr.
    pub level: LogLevel,
}

/// Menu appearance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsoleSettings {
    /// Print the welcome banner before the first menu.
    pub show_welcome: bool,
    /// Number of `=` characters in the menu separator lines.
    pub separator_width: usize,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            show_welcome: true,
            separator_width: 25,
        }
    }
}
