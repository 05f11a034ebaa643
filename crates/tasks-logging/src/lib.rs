//! # tasks-logging
//!
//! Structured logging with `tracing`.
//!
//! All output goes to stderr so the interactive transcript on stdout stays
//! clean. `RUST_LOG` takes precedence over the configured level.
//!
//! [`capture_logs`] installs a thread-local capturing subscriber for tests.

#![deny(unsafe_code)]

pub mod test_utils;
pub mod types;

pub use test_utils::{CapturedEvent, CapturedLogs, capture_logs};
pub use types::LogLevel;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
}

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at startup. Subsequent calls are no-ops.
///
/// # Arguments
///
/// * `level` - Minimum level to display, used when `RUST_LOG` is unset.
pub fn init_subscriber(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails harmlessly if a global subscriber is already set
    let _ = subscriber.try_init();
}

/// Run `f` with a temporary stderr subscriber on the current thread.
///
/// For the startup phase before the configured level is known, such as
/// loading the settings that carry it. Events emitted inside `f` are
/// written instead of dropped.
pub fn with_bootstrap_subscriber<T>(level: LogLevel, f: impl FnOnce() -> T) -> T {
    with_scoped_subscriber(level, std::io::stderr, f)
}

/// Run `f` with a temporary subscriber writing to `make_writer`.
pub fn with_scoped_subscriber<W, T>(level: LogLevel, make_writer: W, f: impl FnOnce() -> T) -> T
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_ansi(false)
        .with_writer(make_writer)
        .compact()
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
