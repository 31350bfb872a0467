//! Catalog error types.

use thiserror::Error;

/// Errors from reading product categories out of the catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog could not be reached.
    #[error("Catalog request error: {0}")]
    RequestError(String),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {status}: {body}")]
    StatusError { status: u16, body: String },

    /// The catalog payload could not be decoded.
    #[error("Catalog parse error: {0}")]
    ParseError(String),

    /// The catalog source is misconfigured (bad URL, unreadable fixture).
    #[error("Catalog configuration error: {0}")]
    ConfigError(String),
}

impl CatalogError {
    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestError(msg.into())
    }

    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::StatusError {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
