//! Options store error types.

use thiserror::Error;

/// Errors from the persistent key-value options store.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Reading or writing the backing file failed.
    #[error("Options store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object.
    #[error("Options store parse error: {0}")]
    Parse(String),

    /// The store lock was poisoned by a panicking writer.
    #[error("Options store lock poisoned")]
    Poisoned,

    /// The background task reading the store did not complete.
    #[error("Options store task failed: {0}")]
    Task(String),
}

impl From<serde_json::Error> for OptionsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
