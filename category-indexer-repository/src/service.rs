//! Search index service implementation.
//!
//! This module provides the service application code uses to push category
//! records into the search index. It sits on top of a `SearchIndexProvider`
//! and turns a missing acknowledgment into an error.

use tracing::{info, instrument, warn};

use category_indexer_shared::CategoryRecord;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::SaveObjectsResponse;

/// The main service for interacting with the search index.
///
/// # Example
///
/// ```no_run
/// use category_indexer_repository::algolia::{AlgoliaCredentials, AlgoliaProvider};
/// use category_indexer_repository::{ClientConfig, SearchIndexService};
/// use category_indexer_shared::CategoryRecord;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = AlgoliaCredentials::new("APPID", "admin-key");
/// let provider = AlgoliaProvider::new(&credentials, "categories", &ClientConfig::default())?;
/// let service = SearchIndexService::new(Box::new(provider));
///
/// service.check_connection().await?;
/// service
///     .save_records(&[CategoryRecord::new(12, "hats", "Hats", None)])
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SearchIndexService {
    provider: Box<dyn SearchIndexProvider>,
}

impl SearchIndexService {
    /// Create a new SearchIndexService.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `SearchIndexProvider` (e.g., `AlgoliaProvider`)
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self { provider }
    }

    /// The name of the index this service writes to.
    pub fn index_name(&self) -> &str {
        self.provider.index_name()
    }

    /// Verify the search service is reachable with the configured credentials.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the service answered
    /// * `Err(SearchIndexError::ConnectionError)` - If it is unreachable or rejected the credentials
    pub async fn check_connection(&self) -> Result<(), SearchIndexError> {
        self.provider.check_connection().await
    }

    /// Upsert all records in one bulk call.
    ///
    /// # Arguments
    ///
    /// * `records` - Records to save, keyed by `objectID`
    ///
    /// # Returns
    ///
    /// * `Ok(SaveObjectsResponse)` - The service acknowledged the write
    /// * `Err(SearchIndexError::EmptyResponse)` - The service answered without an acknowledgment;
    ///   the write may or may not have been applied
    /// * `Err(SearchIndexError)` - If the write failed
    #[instrument(skip(self, records), fields(index_name = %self.index_name(), record_count = records.len()))]
    pub async fn save_records(
        &self,
        records: &[CategoryRecord],
    ) -> Result<SaveObjectsResponse, SearchIndexError> {
        match self.provider.save_objects(records).await? {
            Some(response) => {
                info!(task_id = ?response.task_id, "Records saved");
                Ok(response)
            }
            None => {
                warn!("Search service returned no acknowledgment");
                Err(SearchIndexError::EmptyResponse)
            }
        }
    }
}
