//! Mock category source for testing and local development.
//!
//! The `MockCategorySource` is pre-populated with categories and records every
//! fetch it receives, allowing tests to assert on catalog access without a
//! store.

use std::sync::Mutex;

use async_trait::async_trait;

use category_indexer_shared::{CategoryId, RawCategory};

use crate::errors::CatalogError;
use crate::interfaces::CategorySource;

/// Mock category source that serves pre-configured categories.
pub struct MockCategorySource {
    categories: Vec<RawCategory>,
    failure: Option<CatalogError>,
    requests: Mutex<Vec<Option<CategoryId>>>,
}

impl MockCategorySource {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::with_categories(Vec::new())
    }

    /// Create a catalog serving the given categories in order.
    pub fn with_categories(categories: Vec<RawCategory>) -> Self {
        Self {
            categories,
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a catalog whose every fetch fails with `error`.
    pub fn failing(error: CatalogError) -> Self {
        Self {
            categories: Vec::new(),
            failure: Some(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every fetch received so far, in order.
    pub fn requests(&self) -> Vec<Option<CategoryId>> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Default for MockCategorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategorySource for MockCategorySource {
    async fn fetch_categories(
        &self,
        target: Option<CategoryId>,
    ) -> Result<Vec<RawCategory>, CatalogError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(target);
        }

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        Ok(self
            .categories
            .iter()
            .filter(|category| target.map_or(true, |id| category.term_id == id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_filters_and_records_requests() {
        let source = MockCategorySource::with_categories(vec![
            RawCategory::new(7, "shoes", "Shoes"),
            RawCategory::new(12, "hats", "Hats"),
        ]);

        assert_eq!(source.fetch_categories(None).await.unwrap().len(), 2);
        assert_eq!(
            source.fetch_categories(Some(7)).await.unwrap(),
            vec![RawCategory::new(7, "shoes", "Shoes")]
        );
        assert_eq!(source.requests(), vec![None, Some(7)]);
    }
}
