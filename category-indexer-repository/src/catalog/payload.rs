//! Wire shape of a product category as served by the WooCommerce REST API.
//!
//! Fixture files use the same shape so a captured API response can be
//! replayed locally.

use serde::Deserialize;

use category_indexer_shared::{CategoryId, RawCategory};

/// A product category from `GET /wp-json/wc/v3/products/categories`.
///
/// Only the fields the indexer needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WooCategory {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<WooImage>,
}

/// The thumbnail attachment of a category.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WooImage {
    #[serde(default)]
    pub src: Option<String>,
}

impl From<WooCategory> for RawCategory {
    fn from(category: WooCategory) -> Self {
        // An attachment without a source URL counts as no thumbnail.
        let thumbnail_url = category
            .image
            .and_then(|image| image.src)
            .filter(|src| !src.trim().is_empty());

        RawCategory {
            term_id: category.id,
            slug: category.slug,
            name: category.name,
            thumbnail_url,
        }
    }
}
