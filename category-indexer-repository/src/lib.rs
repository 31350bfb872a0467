//! # Category Indexer Repository
//!
//! This crate provides traits and implementations for the systems the
//! category indexer talks to: the hosted search index (Algolia), the product
//! catalog (WooCommerce) and the persistent options store holding the
//! indexer settings.

pub mod algolia;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod options;
pub mod service;
pub mod types;

pub use algolia::{AlgoliaCredentials, AlgoliaProvider};
pub use catalog::CatalogSource;
pub use config::ClientConfig;
pub use errors::{CatalogError, OptionsError, SearchIndexError};
pub use interfaces::{CategorySource, OptionsStore, SearchIndexProvider};
pub use options::{JsonFileOptionsStore, MemoryOptionsStore};
pub use service::SearchIndexService;
pub use types::SaveObjectsResponse;
