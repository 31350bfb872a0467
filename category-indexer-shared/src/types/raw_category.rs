//! Category types as read from the catalog.

use serde::{Deserialize, Serialize};

/// Identifier of a product category taxonomy term.
pub type CategoryId = u64;

/// A product category taxonomy term as returned by the catalog.
///
/// The thumbnail has already been resolved to a public URL by the reader.
/// `thumbnail_url` is `None` when the term has no thumbnail attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawCategory {
    pub term_id: CategoryId,
    pub slug: String,
    pub name: String,
    pub thumbnail_url: Option<String>,
}

impl RawCategory {
    /// Create a category without a thumbnail.
    pub fn new(term_id: CategoryId, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            term_id,
            slug: slug.into(),
            name: name.into(),
            thumbnail_url: None,
        }
    }

    /// Set the resolved thumbnail URL.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}
