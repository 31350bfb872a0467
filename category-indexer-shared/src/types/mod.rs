//! This module defines the core data structures used across the category indexer.
//! It re-exports `RawCategory` and `CategoryRecord`.

pub mod category_record;
pub mod raw_category;

pub use category_record::CategoryRecord;
pub use raw_category::{CategoryId, RawCategory};
