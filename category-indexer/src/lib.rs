//! # Category Indexer
//!
//! Sends WooCommerce product categories to an Algolia index so storefront
//! search can match shoppers against the category taxonomy.
//!
//! ## Architecture
//!
//! A sync follows the Source-Processor-Loader pattern:
//!
//! 1. **Source**: Reads categories from the catalog
//! 2. **Processor**: Maps categories into search records
//! 3. **Loader**: Writes records into the index in one bulk call
//! 4. **Orchestrator**: Validates settings and coordinates the flow
//!
//! ## Modules
//!
//! - [`cli`]: Command line interface
//! - [`config`]: Stored settings and dependency initialization
//! - [`requirements`]: Required-settings check
//! - [`processor`]: Maps categories into records
//! - [`loader`]: Connects to and writes into the search index
//! - [`orchestrator`]: Coordinates a sync
//! - [`notices`]: Outcome messages for the administrator
//! - [`errors`]: Error types for a sync

pub mod cli;
pub mod config;
pub mod errors;
pub mod loader;
pub mod notices;
pub mod orchestrator;
pub mod processor;
pub mod requirements;

pub use config::Dependencies;
pub use errors::SyncError;
pub use orchestrator::{CategorySync, SyncReport, TriggerOutcome};

use category_indexer_repository::OptionsError;
use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Sync error.
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// The options store could not be read or written.
    #[error("Settings error: {0}")]
    Settings(#[from] OptionsError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
