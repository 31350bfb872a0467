//! Search index error types.
//!
//! This module defines the unified error type for all search index operations.

use thiserror::Error;

/// Unified errors from search index operations.
///
/// Used by the `SearchIndexProvider` trait and `SearchIndexService`. The
/// connection variant is always raised before any write is attempted, so it
/// never leaves the remote index in an ambiguous state. `EmptyResponse` and
/// `WriteError` are raised by the write itself.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Validation error (e.g., blank index name).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The search service is unreachable or rejected the credentials.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The bulk write returned no acknowledgment.
    #[error("Empty response from the search service")]
    EmptyResponse,

    /// The bulk write was rejected by the search service.
    #[error("Write error: {0}")]
    WriteError(String),

    /// Failed to parse a response from the search service.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize records for the search service.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SearchIndexError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::WriteError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Whether the error was raised before any write reached the index.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}
