//! # tasks-settings
//!
//! Configuration for the tasks console, loaded from three layers (in
//! priority order):
//! 1. **Compiled defaults** — [`TasksSettings::default()`]
//! 2. **User file** — `~/.tasks/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `TASKS_*` overrides (highest priority)

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = TasksSettings::default();
        let _path = settings_path();
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = TasksSettings::default();
        assert_eq!(settings.version, "0.1.0");
        assert_eq!(settings.name, "tasks");
        assert_eq!(settings.logging.level, LogLevel::Warn);
        assert!(settings.console.show_welcome);
        assert_eq!(settings.console.separator_width, 25);
        assert!(settings.validate().is_ok());
    }
}
