//! Category record types for the search index.
//!
//! This module defines the flat record structure that is uploaded to the
//! search index for every category.

use serde::{Deserialize, Serialize};

use crate::types::raw_category::CategoryId;

/// Record representation of a category in the search index.
///
/// Records are built fresh from the catalog on every sync and are never
/// persisted locally. The search index upserts on `objectID`, so sending a
/// record for an existing category replaces the previous one.
///
/// # Fields
///
/// - `object_id`: The taxonomy term id, serialized as `objectID`
/// - `slug`: URL-safe category slug
/// - `name`: Human-readable category name
/// - `image_url`: Public thumbnail URL, serialized as `null` when absent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRecord {
    #[serde(rename = "objectID")]
    pub object_id: CategoryId,
    pub slug: String,
    pub name: String,
    pub image_url: Option<String>,
}

impl CategoryRecord {
    /// Create a new record.
    ///
    /// # Arguments
    ///
    /// * `object_id` - The taxonomy term id used as the upsert key
    /// * `slug` - The category slug
    /// * `name` - The category display name
    /// * `image_url` - Optional public thumbnail URL
    pub fn new(
        object_id: CategoryId,
        slug: impl Into<String>,
        name: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            object_id,
            slug: slug.into(),
            name: name.into(),
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_object_id_and_null_image() {
        let record = CategoryRecord::new(12, "hats", "Hats", None);

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "objectID": 12,
                "slug": "hats",
                "name": "Hats",
                "image_url": null
            })
        );
    }

    #[test]
    fn test_serializes_image_url() {
        let record = CategoryRecord::new(
            3,
            "shoes",
            "Shoes",
            Some("https://shop.example/uploads/shoes.png".to_string()),
        );

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["image_url"], "https://shop.example/uploads/shoes.png");
        assert!(value.get("object_id").is_none());
    }
}
