//! Category source backed by a JSON fixture file.
//!
//! The file holds an array of categories in the WooCommerce REST shape, e.g.
//! a saved response of the categories endpoint. Useful for local runs against
//! a real search index without a store.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use category_indexer_shared::{CategoryId, RawCategory};

use crate::catalog::payload::WooCategory;
use crate::errors::CatalogError;
use crate::interfaces::CategorySource;

/// Reads categories from a JSON file on every fetch.
pub struct FixtureCategorySource {
    path: PathBuf,
}

impl FixtureCategorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CategorySource for FixtureCategorySource {
    async fn fetch_categories(
        &self,
        target: Option<CategoryId>,
    ) -> Result<Vec<RawCategory>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::config(format!("Cannot read {}: {}", self.path.display(), e))
        })?;

        let categories: Vec<WooCategory> =
            serde_json::from_str(&contents).map_err(|e| CatalogError::parse(e.to_string()))?;

        let categories: Vec<RawCategory> = categories
            .into_iter()
            .filter(|category| target.map_or(true, |id| category.id == id))
            .map(RawCategory::from)
            .collect();

        debug!(path = %self.path.display(), count = categories.len(), "Loaded fixture categories");
        Ok(categories)
    }
}
