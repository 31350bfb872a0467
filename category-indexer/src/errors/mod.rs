//! Error types for a category sync.

use thiserror::Error;

use category_indexer_repository::{CatalogError, OptionsError, SearchIndexError};

use crate::requirements::MissingConfiguration;

/// Errors that end a sync invocation.
///
/// Every variant is terminal for the invocation and none is retried. Only
/// `EmptyResponse` and `Write` can occur after records were sent; all other
/// variants abort before the search index is touched.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Required settings are missing; nothing was sent.
    #[error(transparent)]
    MissingConfiguration(#[from] MissingConfiguration),

    /// The search service is unreachable or rejected the credentials.
    #[error("Connection error: {0}")]
    Connection(SearchIndexError),

    /// The catalog could not be read.
    #[error("Catalog error: {0}")]
    CatalogUnavailable(#[from] CatalogError),

    /// The bulk write returned no acknowledgment.
    #[error("No response from the search service")]
    EmptyResponse,

    /// The bulk write was rejected.
    #[error("Write error: {0}")]
    Write(SearchIndexError),

    /// The options store could not be read.
    #[error("Settings error: {0}")]
    Settings(#[from] OptionsError),
}

impl SyncError {
    /// Whether the error leaves the remote index in an unknown state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::EmptyResponse | Self::Write(_))
    }
}

impl From<SearchIndexError> for SyncError {
    fn from(err: SearchIndexError) -> Self {
        match err {
            SearchIndexError::EmptyResponse => Self::EmptyResponse,
            SearchIndexError::ConnectionError(_) => Self::Connection(err),
            other => Self::Write(other),
        }
    }
}
