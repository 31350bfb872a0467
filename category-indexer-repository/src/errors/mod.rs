//! Error types for the category indexer repository.
//!
//! One error type per backend: the search index, the catalog and the
//! options store.

mod catalog_error;
mod options_error;
mod search_index_error;

pub use catalog_error::CatalogError;
pub use options_error::OptionsError;
pub use search_index_error::SearchIndexError;
