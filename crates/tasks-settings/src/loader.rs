//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`TasksSettings::default()`]
//! 2. If `~/.tasks/settings.json` exists, deep-merge user values over defaults
//! 3. Apply `TASKS_*` environment variable overrides
//! 4. Validate the result
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::{LogLevel, MAX_SEPARATOR_WIDTH, TasksSettings};

/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "TASKS_LOG_LEVEL";
/// Overrides `console.showWelcome`.
pub const ENV_SHOW_WELCOME: &str = "TASKS_SHOW_WELCOME";
/// Overrides `console.separatorWidth`.
pub const ENV_SEPARATOR_WIDTH: &str = "TASKS_SEPARATOR_WIDTH";

/// Resolve the path to the settings file (`~/.tasks/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".tasks").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<TasksSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. Invalid JSON or an out-of-range value is
/// an error.
pub fn load_settings_from_path(path: &Path) -> Result<TasksSettings> {
    load_with_overrides(path, |name| std::env::var(name).ok())
}

/// Load settings from `path`, resolving overrides through `lookup` instead of
/// the process environment.
pub fn load_with_overrides<F>(path: &Path, lookup: F) -> Result<TasksSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = serde_json::to_value(TasksSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: TasksSettings = serde_json::from_value(merged)?;
    apply_overrides(&mut settings, lookup);
    settings.validate()?;
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply overrides resolved through `lookup`.
///
/// Empty values are treated as unset. Invalid values are logged and ignored.
pub fn apply_overrides<F>(settings: &mut TasksSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(val) = read(ENV_LOG_LEVEL) {
        match LogLevel::parse(&val) {
            Some(level) => settings.logging.level = level,
            None => warn!(key = ENV_LOG_LEVEL, value = %val, "invalid log level env var, ignoring"),
        }
    }
    if let Some(val) = read(ENV_SHOW_WELCOME) {
        match parse_bool(&val) {
            Some(show) => settings.console.show_welcome = show,
            None => warn!(key = ENV_SHOW_WELCOME, value = %val, "invalid boolean env var, ignoring"),
        }
    }
    if let Some(val) = read(ENV_SEPARATOR_WIDTH) {
        match parse_usize_range(&val, 1, MAX_SEPARATOR_WIDTH) {
            Some(width) => settings.console.separator_width = width,
            None => warn!(key = ENV_SEPARATOR_WIDTH, value = %val, "invalid usize env var, ignoring"),
        }
    }
}

// ── Pure parsing functions ──────────────────────────────────────────────────

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a string as a `usize` within an inclusive range.
pub fn parse_usize_range(val: &str, min: usize, max: usize) -> Option<usize> {
    let n: usize = val.trim().parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
