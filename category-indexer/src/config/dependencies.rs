//! Dependency initialization and wiring for the category indexer.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use category_indexer_repository::{CatalogSource, ClientConfig, JsonFileOptionsStore, OptionsStore};

use crate::loader::AlgoliaProviderFactory;
use crate::notices::NoticeSink;
use crate::orchestrator::CategorySync;
use crate::IndexingError;

/// Default options store file.
const DEFAULT_OPTIONS_PATH: &str = "category-indexer-options.json";

/// Default request timeout in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Where categories are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// A live WooCommerce store.
    WooCommerce,
    /// A JSON file in the WooCommerce REST shape.
    Fixture,
}

impl CatalogKind {
    /// Parse the catalog kind.
    ///
    /// Valid values: "woocommerce" or "fixture" (case-insensitive).
    /// Defaults to "woocommerce" if not set or invalid.
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("woocommerce") | Some("woo") => Self::WooCommerce,
            Some("fixture") | Some("file") => Self::Fixture,
            Some(other) => {
                warn!(value = %other, "Invalid CATALOG_SOURCE, defaulting to 'woocommerce'");
                Self::WooCommerce
            }
        }
    }
}

/// Process configuration read from the environment.
///
/// # Environment Variables
///
/// - `CATEGORY_INDEXER_OPTIONS_PATH`: Options store file (default: category-indexer-options.json)
/// - `CATALOG_SOURCE`: "woocommerce" or "fixture" (default: woocommerce)
/// - `WOOCOMMERCE_URL`: Store URL (required for woocommerce)
/// - `WOOCOMMERCE_CONSUMER_KEY`: REST API consumer key (required for woocommerce)
/// - `WOOCOMMERCE_CONSUMER_SECRET`: REST API consumer secret (required for woocommerce)
/// - `CATALOG_FIXTURE_PATH`: Fixture file (required for fixture)
/// - `ALGOLIA_HOST`: Override the search host (default: https://{app_id}.algolia.net)
/// - `HTTP_TIMEOUT_SECS`: Request timeout in seconds (default: 30)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub options_path: PathBuf,
    pub catalog_kind: CatalogKind,
    pub woocommerce_url: Option<String>,
    pub woocommerce_consumer_key: Option<String>,
    pub woocommerce_consumer_secret: Option<String>,
    pub fixture_path: Option<PathBuf>,
    pub algolia_host: Option<String>,
    pub http_timeout: Duration,
}

impl RuntimeConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let http_timeout = get("HTTP_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            options_path: get("CATEGORY_INDEXER_OPTIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OPTIONS_PATH)),
            catalog_kind: CatalogKind::parse(get("CATALOG_SOURCE").as_deref()),
            woocommerce_url: get("WOOCOMMERCE_URL"),
            woocommerce_consumer_key: get("WOOCOMMERCE_CONSUMER_KEY"),
            woocommerce_consumer_secret: get("WOOCOMMERCE_CONSUMER_SECRET"),
            fixture_path: get("CATALOG_FIXTURE_PATH").map(PathBuf::from),
            algolia_host: get("ALGOLIA_HOST"),
            http_timeout: Duration::from_secs(http_timeout),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::with_timeout(self.http_timeout)
    }

    /// Resolve the catalog source, checking its required variables.
    pub fn catalog_source(&self) -> Result<CatalogSource, IndexingError> {
        match self.catalog_kind {
            CatalogKind::Fixture => {
                let path = self.fixture_path.clone().ok_or_else(|| {
                    IndexingError::config("CATALOG_FIXTURE_PATH is required for the fixture catalog")
                })?;
                Ok(CatalogSource::fixture(path))
            }
            CatalogKind::WooCommerce => {
                let require = |value: &Option<String>, name: &str| {
                    value.clone().ok_or_else(|| {
                        IndexingError::config(format!("{} is required for the WooCommerce catalog", name))
                    })
                };
                Ok(CatalogSource::woocommerce(
                    require(&self.woocommerce_url, "WOOCOMMERCE_URL")?,
                    require(&self.woocommerce_consumer_key, "WOOCOMMERCE_CONSUMER_KEY")?,
                    require(&self.woocommerce_consumer_secret, "WOOCOMMERCE_CONSUMER_SECRET")?,
                ))
            }
        }
    }
}

/// Container for the initialized dependencies.
pub struct Dependencies {
    pub config: RuntimeConfig,
    /// The persistent settings store.
    pub options: Arc<dyn OptionsStore>,
}

impl Dependencies {
    /// Initialize dependencies from the environment.
    ///
    /// Only the options store is opened here; the catalog and the search
    /// client are built when a sync is requested.
    pub fn from_env() -> Self {
        Self::new(RuntimeConfig::from_env())
    }

    pub fn new(config: RuntimeConfig) -> Self {
        info!(
            options_path = %config.options_path.display(),
            catalog = ?config.catalog_kind,
            http_timeout_secs = config.http_timeout.as_secs(),
            "Initializing dependencies"
        );

        let options: Arc<dyn OptionsStore> =
            Arc::new(JsonFileOptionsStore::new(config.options_path.clone()));

        Self { config, options }
    }

    /// Wire a `CategorySync` against the configured catalog and Algolia.
    pub fn category_sync(&self, notices: Arc<dyn NoticeSink>) -> Result<CategorySync, IndexingError> {
        let client_config = self.config.client_config();

        let catalog = self
            .config
            .catalog_source()?
            .into_source(&client_config)
            .map_err(|e| IndexingError::config(format!("Failed to create catalog source: {}", e)))?;

        let mut providers = AlgoliaProviderFactory::new(client_config);
        if let Some(host) = &self.config.algolia_host {
            providers = providers.with_host(host.clone());
        }

        Ok(CategorySync::new(
            self.options.clone(),
            catalog,
            Arc::new(providers),
            notices,
        ))
    }
}
