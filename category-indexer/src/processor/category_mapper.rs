//! Category mapper implementation.
//!
//! Transforms raw catalog categories into `CategoryRecord` structures for indexing.

use tracing::{debug, instrument};

use category_indexer_shared::{CategoryRecord, RawCategory};

/// Mapper that turns catalog categories into search records.
///
/// Mapping is pure and total: every category produces exactly one record and
/// the same category always produces the same record.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryMapper;

impl CategoryMapper {
    /// Create a new category mapper.
    pub fn new() -> Self {
        Self
    }

    /// Map a single category.
    ///
    /// A blank thumbnail URL is treated as no thumbnail, so `image_url` is
    /// `None` exactly when the category has no usable image.
    pub fn to_record(&self, category: &RawCategory) -> CategoryRecord {
        let image_url = category
            .thumbnail_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        CategoryRecord::new(
            category.term_id,
            category.slug.clone(),
            category.name.clone(),
            image_url,
        )
    }

    /// Map a batch of categories, preserving catalog order.
    #[instrument(skip(self, categories), fields(category_count = categories.len()))]
    pub fn map_batch(&self, categories: &[RawCategory]) -> Vec<CategoryRecord> {
        let records: Vec<CategoryRecord> = categories
            .iter()
            .map(|category| self.to_record(category))
            .collect();

        debug!(record_count = records.len(), "Mapped category batch");
        records
    }
}
