//! Catalog readers for product categories.
//!
//! This module provides:
//! - [`CatalogSource`] config enum for choosing where categories are read from
//! - [`WooCommerceCategorySource`] reading a live store over its REST API
//! - [`FixtureCategorySource`] replaying a saved JSON payload
//! - [`MockCategorySource`] serving pre-configured categories in tests

mod fixture;
mod mock;
mod payload;
mod woocommerce;

pub use fixture::FixtureCategorySource;
pub use mock::MockCategorySource;
pub use payload::{WooCategory, WooImage};
pub use woocommerce::WooCommerceCategorySource;

use std::path::PathBuf;
use std::sync::Arc;

use category_indexer_shared::RawCategory;

use crate::config::ClientConfig;
use crate::errors::CatalogError;
use crate::interfaces::CategorySource;

/// Configuration for the catalog data source.
///
/// # Example
///
/// ```ignore
/// use category_indexer_repository::catalog::CatalogSource;
///
/// // Production: read a live store
/// let source = CatalogSource::woocommerce("https://shop.example", "ck_...", "cs_...")
///     .into_source(&ClientConfig::default())?;
///
/// // Local runs: replay a saved payload
/// let source = CatalogSource::fixture("categories.json").into_source(&ClientConfig::default())?;
/// ```
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Serve the given categories from memory.
    Mock(Vec<RawCategory>),

    /// Read a JSON file in the WooCommerce REST shape.
    Fixture {
        path: PathBuf,
    },

    /// Connect to a live WooCommerce store.
    WooCommerce {
        base_url: String,
        consumer_key: String,
        consumer_secret: String,
    },
}

impl CatalogSource {
    pub fn mock(categories: Vec<RawCategory>) -> Self {
        Self::Mock(categories)
    }

    pub fn fixture(path: impl Into<PathBuf>) -> Self {
        Self::Fixture { path: path.into() }
    }

    pub fn woocommerce(
        base_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self::WooCommerce {
            base_url: base_url.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        }
    }

    /// Create the matching `CategorySource` implementation.
    pub fn into_source(self, config: &ClientConfig) -> Result<Arc<dyn CategorySource>, CatalogError> {
        Ok(match self {
            Self::Mock(categories) => Arc::new(MockCategorySource::with_categories(categories)),
            Self::Fixture { path } => Arc::new(FixtureCategorySource::new(path)),
            Self::WooCommerce {
                base_url,
                consumer_key,
                consumer_secret,
            } => Arc::new(WooCommerceCategorySource::new(
                &base_url,
                consumer_key,
                consumer_secret,
                config,
            )?),
        })
    }
}
