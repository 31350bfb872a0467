//! # Category Indexer Shared
//!
//! This crate defines the data structures shared across the category indexer:
//! the category as read from the catalog and the flat record sent to the
//! search index.

pub mod types;

pub use types::category_record::CategoryRecord;
pub use types::raw_category::{CategoryId, RawCategory};
