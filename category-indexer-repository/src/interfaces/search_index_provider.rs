//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (Algolia, test doubles).

use async_trait::async_trait;

use category_indexer_shared::CategoryRecord;

use crate::errors::SearchIndexError;
use crate::types::SaveObjectsResponse;

/// Abstracts the underlying hosted search service.
///
/// A provider is bound to one index and one set of credentials. It is built
/// for a single sync invocation and dropped afterwards; there is no shared
/// client living across invocations.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error handling across
/// different backend implementations.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// The name of the index records are written to.
    fn index_name(&self) -> &str;

    /// Perform one lightweight authenticated call to verify the service is
    /// reachable and the credentials are accepted.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the service answered successfully
    /// * `Err(SearchIndexError::ConnectionError)` - If the service is unreachable or
    ///   rejected the credentials
    async fn check_connection(&self) -> Result<(), SearchIndexError>;

    /// Insert or replace every record in a single bulk call, keyed by `objectID`.
    ///
    /// The slice is handed to the service as-is, no client-side batching is
    /// applied.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to save
    ///
    /// # Returns
    ///
    /// * `Ok(Some(SaveObjectsResponse))` - The service acknowledged the write
    /// * `Ok(None)` - The service answered without a body
    /// * `Err(SearchIndexError)` - If the write was rejected or could not be sent
    async fn save_objects(
        &self,
        records: &[CategoryRecord],
    ) -> Result<Option<SaveObjectsResponse>, SearchIndexError>;
}
