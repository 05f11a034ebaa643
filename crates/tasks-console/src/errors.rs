//! Console error types.

use thiserror::Error;

/// Errors raised while driving the menu loop.
///
/// Bad user input is never an error here; it is reported on the transcript.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
