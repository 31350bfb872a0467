//! Integration tests for a category sync.
//!
//! These tests use the real `CategorySync` with mock dependencies (catalog,
//! search provider factory, options store and notice sink) so every outcome
//! can be observed without a store or a search service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use category_indexer::config::settings::{
    option_key, API_KEY, APPLICATION_ID, AUTO_SEND_CATEGORIES, INDEX_NAME, LEGACY_INDEX_IN_STOCK,
};
use category_indexer::config::IndexerSettings;
use category_indexer::loader::ProviderFactory;
use category_indexer::notices::{NoticeLevel, RecordedNotices};
use category_indexer::requirements::{RequiredSetting, UNSET_SENTINEL};
use category_indexer::{CategorySync, SyncError, SyncReport, TriggerOutcome};
use category_indexer_repository::catalog::MockCategorySource;
use category_indexer_repository::{
    AlgoliaCredentials, CatalogError, MemoryOptionsStore, OptionsStore, SaveObjectsResponse,
    SearchIndexError, SearchIndexProvider,
};
use category_indexer_shared::{CategoryRecord, RawCategory};

#[derive(Clone, Copy)]
enum WriteBehavior {
    Acknowledge,
    NoResponse,
    Reject,
}

/// Everything the mock search service saw.
#[derive(Default)]
struct CallLog {
    created: Mutex<Vec<(String, String)>>,
    connections: Mutex<usize>,
    writes: Mutex<Vec<Vec<CategoryRecord>>>,
}

impl CallLog {
    fn created(&self) -> Vec<(String, String)> {
        self.created.lock().unwrap().clone()
    }

    fn connections(&self) -> usize {
        *self.connections.lock().unwrap()
    }

    fn writes(&self) -> Vec<Vec<CategoryRecord>> {
        self.writes.lock().unwrap().clone()
    }
}

struct MockProviderFactory {
    log: Arc<CallLog>,
    reachable: bool,
    write: WriteBehavior,
}

impl MockProviderFactory {
    fn new(write: WriteBehavior) -> Self {
        Self {
            log: Arc::new(CallLog::default()),
            reachable: true,
            write,
        }
    }

    fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new(WriteBehavior::Acknowledge)
        }
    }
}

impl ProviderFactory for MockProviderFactory {
    fn create(
        &self,
        credentials: &AlgoliaCredentials,
        index_name: &str,
    ) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError> {
        self.log
            .created
            .lock()
            .unwrap()
            .push((credentials.application_id.clone(), index_name.to_string()));

        Ok(Box::new(MockProvider {
            log: self.log.clone(),
            index_name: index_name.to_string(),
            reachable: self.reachable,
            write: self.write,
        }))
    }
}

struct MockProvider {
    log: Arc<CallLog>,
    index_name: String,
    reachable: bool,
    write: WriteBehavior,
}

#[async_trait]
impl SearchIndexProvider for MockProvider {
    fn index_name(&self) -> &str {
        &self.index_name
    }

    async fn check_connection(&self) -> Result<(), SearchIndexError> {
        *self.log.connections.lock().unwrap() += 1;
        if self.reachable {
            Ok(())
        } else {
            Err(SearchIndexError::connection("Invalid Application-ID or API key"))
        }
    }

    async fn save_objects(
        &self,
        records: &[CategoryRecord],
    ) -> Result<Option<SaveObjectsResponse>, SearchIndexError> {
        self.log.writes.lock().unwrap().push(records.to_vec());

        match self.write {
            WriteBehavior::Acknowledge => Ok(Some(SaveObjectsResponse {
                task_id: Some(42),
                object_ids: records.iter().map(|r| r.object_id.to_string()).collect(),
            })),
            WriteBehavior::NoResponse => Ok(None),
            WriteBehavior::Reject => Err(SearchIndexError::write("status 400: bad request")),
        }
    }
}

fn configured_store() -> Arc<MemoryOptionsStore> {
    Arc::new(MemoryOptionsStore::with_options([
        (option_key(APPLICATION_ID), Value::from("APPID")),
        (option_key(API_KEY), Value::from("secret-admin-key")),
        (option_key(INDEX_NAME), Value::from("categories")),
    ]))
}

fn catalog() -> Vec<RawCategory> {
    vec![
        RawCategory::new(12, "hats", "Hats"),
        RawCategory::new(7, "shoes", "Shoes").with_thumbnail("https://cdn.example/shoes.png"),
    ]
}

struct Harness {
    sync: CategorySync,
    store: Arc<MemoryOptionsStore>,
    catalog: Arc<MockCategorySource>,
    log: Arc<CallLog>,
    notices: Arc<RecordedNotices>,
}

fn harness(
    store: Arc<MemoryOptionsStore>,
    catalog: MockCategorySource,
    factory: MockProviderFactory,
) -> Harness {
    let catalog = Arc::new(catalog);
    let log = factory.log.clone();
    let notices = Arc::new(RecordedNotices::new());

    let sync = CategorySync::new(
        store.clone(),
        catalog.clone(),
        Arc::new(factory),
        notices.clone(),
    );

    Harness {
        sync,
        store,
        catalog,
        log,
        notices,
    }
}

fn assert_untouched(h: &Harness) {
    assert!(h.log.created().is_empty());
    assert_eq!(h.log.connections(), 0);
    assert!(h.log.writes().is_empty());
    assert!(h.catalog.requests().is_empty());
}

#[tokio::test]
async fn test_missing_settings_abort_without_network() {
    let h = harness(
        Arc::new(MemoryOptionsStore::new()),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let result = h.sync.sync(None).await;

    match result {
        Err(SyncError::MissingConfiguration(missing)) => assert_eq!(
            missing.fields,
            vec![
                RequiredSetting::ApplicationId,
                RequiredSetting::ApiKey,
                RequiredSetting::IndexName
            ]
        ),
        other => panic!("expected missing configuration, got {:?}", other),
    }
    assert_untouched(&h);

    let notices = h.notices.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
}

#[tokio::test]
async fn test_sentinel_settings_count_as_missing() {
    let store = Arc::new(MemoryOptionsStore::with_options([
        (option_key(APPLICATION_ID), Value::from(UNSET_SENTINEL)),
        (option_key(API_KEY), Value::from(UNSET_SENTINEL)),
        (option_key(INDEX_NAME), Value::from(UNSET_SENTINEL)),
    ]));
    let h = harness(
        store,
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let result = h.sync.sync(None).await;

    assert!(matches!(result, Err(SyncError::MissingConfiguration(_))));
    assert_untouched(&h);
}

#[tokio::test]
async fn test_single_category_is_sent() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(vec![RawCategory::new(12, "hats", "Hats")]),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let report = h.sync.sync(None).await.unwrap();

    assert_eq!(
        report,
        SyncReport {
            target: None,
            records_sent: 1,
            task_id: Some(42),
        }
    );
    assert_eq!(
        h.log.created(),
        vec![("APPID".to_string(), "categories".to_string())]
    );
    assert_eq!(h.log.connections(), 1);
    assert_eq!(
        h.log.writes(),
        vec![vec![CategoryRecord::new(12, "hats", "Hats", None)]]
    );

    let notices = h.notices.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert!(notices[0].message.contains('1'));
}

#[tokio::test]
async fn test_full_catalog_goes_out_in_one_write() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let report = h.sync.sync(None).await.unwrap();

    assert_eq!(report.records_sent, 2);
    let writes = h.log.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(
        writes[0][1].image_url.as_deref(),
        Some("https://cdn.example/shoes.png")
    );
}

#[tokio::test]
async fn test_missing_acknowledgment_fails() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::NoResponse),
    );

    let result = h.sync.sync(None).await;

    assert!(matches!(result, Err(SyncError::EmptyResponse)));
    assert_eq!(h.log.writes().len(), 1);

    let notices = h.notices.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.contains("No response"));
}

#[tokio::test]
async fn test_rejected_write_fails() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Reject),
    );

    let result = h.sync.sync(None).await;

    match result {
        Err(e @ SyncError::Write(_)) => assert!(e.is_fatal()),
        other => panic!("expected write error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_target_sends_only_that_category() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let report = h.sync.sync(Some(7)).await.unwrap();

    assert_eq!(report.target, Some(7));
    assert_eq!(report.records_sent, 1);
    assert_eq!(h.catalog.requests(), vec![Some(7)]);

    let writes = h.log.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].len(), 1);
    assert_eq!(writes[0][0].object_id, 7);
}

#[tokio::test]
async fn test_connection_failure_skips_catalog_and_write() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::unreachable(),
    );

    let result = h.sync.sync(None).await;

    assert!(matches!(result, Err(SyncError::Connection(_))));
    assert_eq!(h.log.connections(), 1);
    assert!(h.catalog.requests().is_empty());
    assert!(h.log.writes().is_empty());

    let notices = h.notices.notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].message.contains("application ID and API key"));
}

#[tokio::test]
async fn test_empty_catalog_writes_nothing() {
    let h = harness(
        configured_store(),
        MockCategorySource::new(),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let report = h.sync.sync(None).await.unwrap();

    assert_eq!(report.records_sent, 0);
    assert_eq!(report.task_id, None);
    assert!(h.log.writes().is_empty());

    let notices = h.notices.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);
}

#[tokio::test]
async fn test_unknown_target_writes_nothing() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let report = h.sync.sync(Some(999)).await.unwrap();

    assert_eq!(report.records_sent, 0);
    assert!(h.log.writes().is_empty());
}

#[tokio::test]
async fn test_catalog_failure_skips_write() {
    let h = harness(
        configured_store(),
        MockCategorySource::failing(CatalogError::status(500, "internal error")),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let result = h.sync.sync(None).await;

    assert!(matches!(result, Err(SyncError::CatalogUnavailable(_))));
    assert_eq!(h.log.connections(), 1);
    assert!(h.log.writes().is_empty());
}

#[tokio::test]
async fn test_category_saved_skipped_when_auto_send_off() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let outcome = h.sync.on_category_saved(12).await.unwrap();

    assert_eq!(outcome, TriggerOutcome::Skipped);
    assert_untouched(&h);
    assert_eq!(h.notices.notices().len(), 1);
}

#[tokio::test]
async fn test_category_saved_syncs_changed_category() {
    let store = configured_store();
    store
        .set(&option_key(AUTO_SEND_CATEGORIES), Value::Bool(true))
        .unwrap();
    let h = harness(
        store,
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    let outcome = h.sync.on_category_saved(12).await.unwrap();

    match outcome {
        TriggerOutcome::Synced(report) => {
            assert_eq!(report.target, Some(12));
            assert_eq!(report.records_sent, 1);
        }
        other => panic!("expected a sync, got {:?}", other),
    }
    assert_eq!(h.catalog.requests(), vec![Some(12)]);
}

#[tokio::test]
async fn test_changed_credentials_are_picked_up() {
    let h = harness(
        configured_store(),
        MockCategorySource::with_categories(catalog()),
        MockProviderFactory::new(WriteBehavior::Acknowledge),
    );

    h.sync.sync(None).await.unwrap();
    h.store
        .set(&option_key(APPLICATION_ID), Value::from("OTHERAPP"))
        .unwrap();
    h.store
        .set(&option_key(INDEX_NAME), Value::from("categories_v2"))
        .unwrap();
    h.sync.sync(None).await.unwrap();

    assert_eq!(
        h.log.created(),
        vec![
            ("APPID".to_string(), "categories".to_string()),
            ("OTHERAPP".to_string(), "categories_v2".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_resync_overwrites_changed_category() {
    let factory = MockProviderFactory::new(WriteBehavior::Acknowledge);
    let log = factory.log.clone();
    let store = configured_store();
    let notices = Arc::new(RecordedNotices::new());

    let before = CategorySync::new(
        store.clone(),
        Arc::new(MockCategorySource::with_categories(vec![RawCategory::new(
            12, "hats", "Hats",
        )])),
        Arc::new(MockProviderFactory {
            log: log.clone(),
            reachable: true,
            write: WriteBehavior::Acknowledge,
        }),
        notices.clone(),
    );
    let after = CategorySync::new(
        store,
        Arc::new(MockCategorySource::with_categories(vec![RawCategory::new(
            12,
            "winter-hats",
            "Winter Hats",
        )
        .with_thumbnail("https://cdn.example/hats.png")])),
        Arc::new(factory),
        notices,
    );

    before.sync(None).await.unwrap();
    after.sync(None).await.unwrap();

    let writes = log.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0][0].object_id, writes[1][0].object_id);

    // Replay the writes the way the index applies them: later upserts replace
    // earlier ones with the same objectID.
    let mut index = HashMap::new();
    for record in writes.into_iter().flatten() {
        index.insert(record.object_id, record);
    }
    assert_eq!(index.len(), 1);
    assert_eq!(
        index[&12],
        CategoryRecord::new(
            12,
            "winter-hats",
            "Winter Hats",
            Some("https://cdn.example/hats.png".to_string())
        )
    );
}

#[tokio::test]
async fn test_uninstall_removes_every_option() {
    let store = configured_store();
    store
        .set(&option_key(AUTO_SEND_CATEGORIES), Value::Bool(true))
        .unwrap();
    store
        .set(&option_key(LEGACY_INDEX_IN_STOCK), Value::from("1"))
        .unwrap();

    let removed = IndexerSettings::uninstall(store.as_ref()).unwrap();

    assert_eq!(removed, 5);
    assert!(store.is_empty());
    assert_eq!(
        IndexerSettings::load(store.as_ref()).unwrap(),
        IndexerSettings::default()
    );
}
