//! Orchestrator module for the category indexer.
//!
//! Runs one sync from settings to search index:
//!
//! ```text
//! Idle -> ValidatingConfig -> Connecting -> ReadingCatalog -> Writing -> Succeeded
//!              |                  |              |               |
//!           Aborted            Aborted        Aborted          Failed
//! ```
//!
//! The flow is strictly linear with no retries. A failure is terminal for the
//! invocation and has to be re-triggered.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use category_indexer_repository::{CategorySource, OptionsError, OptionsStore};
use category_indexer_shared::CategoryId;

use crate::config::IndexerSettings;
use crate::errors::SyncError;
use crate::loader::{ProviderFactory, SearchLoader};
use crate::notices::{Notice, NoticeSink};
use crate::processor::CategoryMapper;

/// Stage of a sync invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    ValidatingConfig,
    Connecting,
    ReadingCatalog,
    Writing,
    Succeeded,
    /// Stopped before anything was written.
    Aborted,
    /// The write was sent but not acknowledged.
    Failed,
}

/// Result of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// The single category requested, if any.
    pub target: Option<CategoryId>,
    /// Number of records written; zero when the catalog had nothing to send.
    pub records_sent: usize,
    /// Indexing task created by the write.
    pub task_id: Option<u64>,
}

/// What a category-change trigger did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Auto-send is on; the changed category was synced.
    Synced(SyncReport),
    /// Auto-send is off; nothing happened.
    Skipped,
}

/// Coordinates the settings, the catalog and the search index for a sync.
///
/// Holds no search client between invocations: each call to [`CategorySync::sync`]
/// validates the current settings and builds its own provider.
pub struct CategorySync {
    options: Arc<dyn OptionsStore>,
    catalog: Arc<dyn CategorySource>,
    providers: Arc<dyn ProviderFactory>,
    notices: Arc<dyn NoticeSink>,
    mapper: CategoryMapper,
}

impl CategorySync {
    pub fn new(
        options: Arc<dyn OptionsStore>,
        catalog: Arc<dyn CategorySource>,
        providers: Arc<dyn ProviderFactory>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        Self {
            options,
            catalog,
            providers,
            notices,
            mapper: CategoryMapper::new(),
        }
    }

    /// Sync every category, or only `target`, into the search index.
    ///
    /// Emits exactly one notice describing the outcome.
    #[instrument(skip(self))]
    pub async fn sync(&self, target: Option<CategoryId>) -> Result<SyncReport, SyncError> {
        let mut state = SyncState::Idle;
        let result = self.run(target, &mut state).await;

        match &result {
            Ok(report) if report.records_sent == 0 => {
                self.notices.emit(&Notice::nothing_to_send());
            }
            Ok(report) => {
                self.notices
                    .emit(&Notice::categories_sent(report.records_sent));
            }
            Err(e) => {
                let terminal = if state == SyncState::Writing {
                    SyncState::Failed
                } else {
                    SyncState::Aborted
                };
                error!(error = %e, stage = ?state, state = ?terminal, "Category sync did not complete");
                self.notices.emit(&Notice::from_error(e));
            }
        }

        result
    }

    /// Handle a category create/update notification.
    ///
    /// Syncs only the changed category, and only when the auto-send setting is on.
    #[instrument(skip(self))]
    pub async fn on_category_saved(
        &self,
        term_id: CategoryId,
    ) -> Result<TriggerOutcome, SyncError> {
        let settings = match self.load_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                let e = SyncError::from(e);
                self.notices.emit(&Notice::from_error(&e));
                return Err(e);
            }
        };

        if !settings.auto_send_categories {
            debug!("Automatic sync disabled, ignoring category change");
            self.notices.emit(&Notice::auto_send_disabled());
            return Ok(TriggerOutcome::Skipped);
        }

        self.sync(Some(term_id)).await.map(TriggerOutcome::Synced)
    }

    async fn run(
        &self,
        target: Option<CategoryId>,
        state: &mut SyncState,
    ) -> Result<SyncReport, SyncError> {
        Self::advance(state, SyncState::ValidatingConfig);
        let settings = self.load_settings().await?;
        let validated = settings.validate().inspect_err(|missing| {
            warn!(fields = ?missing.fields, "Required settings are missing");
        })?;

        Self::advance(state, SyncState::Connecting);
        let loader = SearchLoader::connect(self.providers.as_ref(), &validated).await?;

        Self::advance(state, SyncState::ReadingCatalog);
        let categories = self.catalog.fetch_categories(target).await?;
        let records = self.mapper.map_batch(&categories);

        if records.is_empty() {
            info!("No categories to send");
            Self::advance(state, SyncState::Succeeded);
            return Ok(SyncReport {
                target,
                records_sent: 0,
                task_id: None,
            });
        }

        Self::advance(state, SyncState::Writing);
        let response = loader.load(&records).await?;

        Self::advance(state, SyncState::Succeeded);
        info!(
            index_name = %loader.index_name(),
            records_sent = records.len(),
            task_id = ?response.task_id,
            "Categories sent"
        );

        Ok(SyncReport {
            target,
            records_sent: records.len(),
            task_id: response.task_id,
        })
    }

    /// Read the settings on the blocking pool; the store may hit the disk.
    async fn load_settings(&self) -> Result<IndexerSettings, OptionsError> {
        let options = self.options.clone();
        tokio::task::spawn_blocking(move || IndexerSettings::load(options.as_ref()))
            .await
            .map_err(|e| OptionsError::Task(e.to_string()))?
    }

    fn advance(state: &mut SyncState, next: SyncState) {
        debug!(from = ?*state, to = ?next, "Sync state transition");
        *state = next;
    }
}
