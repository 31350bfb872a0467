//! Configuration for the category indexer.
//!
//! - [`settings`]: the indexer settings held in the options store
//! - [`dependencies`]: process configuration from the environment and wiring

pub mod dependencies;
pub mod settings;

pub use dependencies::{CatalogKind, Dependencies, RuntimeConfig};
pub use settings::{IndexerSettings, SettingsUpdate};
