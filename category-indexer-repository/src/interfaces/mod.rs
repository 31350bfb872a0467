//! Interface definitions for the indexer backends.
//!
//! This module defines the abstract traits for the search index, the catalog
//! and the options store, allowing for dependency injection and swappable
//! implementations.

mod category_source;
mod options_store;
mod search_index_provider;

pub use category_source::CategorySource;
pub use options_store::OptionsStore;
pub use search_index_provider::SearchIndexProvider;
