//! Category source trait definition.

use async_trait::async_trait;

use category_indexer_shared::{CategoryId, RawCategory};

use crate::errors::CatalogError;

/// Reads product category taxonomy terms from the catalog.
///
/// Implementations resolve each term's thumbnail to a public URL before
/// returning it.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Fetch published categories.
    ///
    /// # Arguments
    ///
    /// * `target` - `None` for every category in store order, or a single
    ///   term id
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<RawCategory>)` - The matching categories; empty (not an error)
    ///   when nothing matches
    /// * `Err(CatalogError)` - If the catalog could not be read
    async fn fetch_categories(
        &self,
        target: Option<CategoryId>,
    ) -> Result<Vec<RawCategory>, CatalogError>;
}
