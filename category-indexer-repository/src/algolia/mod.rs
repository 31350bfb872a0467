//! Algolia implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! that talks to the Algolia REST API.

mod credentials;
mod provider;

pub use credentials::AlgoliaCredentials;
pub use provider::AlgoliaProvider;
