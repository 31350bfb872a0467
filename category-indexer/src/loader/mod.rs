//! Loader module for the category indexer.
//!
//! Connects to the search index for one sync invocation and writes the
//! category records in a single bulk call.

use tracing::{debug, info, instrument};

use category_indexer_repository::{
    AlgoliaCredentials, AlgoliaProvider, ClientConfig, SaveObjectsResponse, SearchIndexError,
    SearchIndexProvider, SearchIndexService,
};
use category_indexer_shared::CategoryRecord;

use crate::errors::SyncError;
use crate::requirements::ValidatedSettings;

/// Builds a search provider from validated settings.
///
/// A fresh provider is built for each sync, so credentials changed between
/// two runs are always picked up.
pub trait ProviderFactory: Send + Sync {
    fn create(
        &self,
        credentials: &AlgoliaCredentials,
        index_name: &str,
    ) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError>;
}

/// Factory for `AlgoliaProvider`.
#[derive(Debug, Clone, Default)]
pub struct AlgoliaProviderFactory {
    config: ClientConfig,
    host: Option<String>,
}

impl AlgoliaProviderFactory {
    pub fn new(config: ClientConfig) -> Self {
        Self { config, host: None }
    }

    /// Send every request to `host` instead of the application's default host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }
}

impl ProviderFactory for AlgoliaProviderFactory {
    fn create(
        &self,
        credentials: &AlgoliaCredentials,
        index_name: &str,
    ) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError> {
        let provider = match &self.host {
            Some(host) => AlgoliaProvider::with_host(credentials, index_name, host, &self.config)?,
            None => AlgoliaProvider::new(credentials, index_name, &self.config)?,
        };
        Ok(Box::new(provider))
    }
}

/// Loader that writes category records into the search index.
///
/// Only obtainable through [`SearchLoader::connect`], so holding a loader means
/// the connectivity check already passed.
pub struct SearchLoader {
    service: SearchIndexService,
}

impl SearchLoader {
    /// Build a provider and verify the search service is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(SearchLoader)` - Ready to write
    /// * `Err(SyncError::Connection)` - The provider could not be built, the
    ///   service is unreachable or it rejected the credentials
    #[instrument(skip_all, fields(index_name = %settings.index_name))]
    pub async fn connect(
        factory: &dyn ProviderFactory,
        settings: &ValidatedSettings,
    ) -> Result<Self, SyncError> {
        let provider = factory
            .create(&settings.credentials, &settings.index_name)
            .map_err(SyncError::Connection)?;
        let service = SearchIndexService::new(provider);

        service
            .check_connection()
            .await
            .map_err(SyncError::Connection)?;

        info!("Connected to search service");
        Ok(Self { service })
    }

    /// Write every record in one bulk upsert.
    ///
    /// # Returns
    ///
    /// * `Ok(SaveObjectsResponse)` - The service acknowledged the write
    /// * `Err(SyncError::EmptyResponse)` - No acknowledgment came back
    /// * `Err(SyncError::Write)` - The write was rejected
    pub async fn load(&self, records: &[CategoryRecord]) -> Result<SaveObjectsResponse, SyncError> {
        debug!(record_count = records.len(), "Sending records");
        Ok(self.service.save_records(records).await?)
    }

    pub fn index_name(&self) -> &str {
        self.service.index_name()
    }
}
