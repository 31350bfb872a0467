//! Options store trait definition.

use serde_json::Value;

use crate::errors::OptionsError;

/// A persistent key-value store for the indexer settings.
///
/// Values are untyped JSON so callers can tell a missing option apart from
/// one stored with the wrong type.
pub trait OptionsStore: Send + Sync {
    /// Read an option. Returns `Ok(None)` when the key was never set.
    fn get(&self, key: &str) -> Result<Option<Value>, OptionsError>;

    /// Create or overwrite an option.
    fn set(&self, key: &str, value: Value) -> Result<(), OptionsError>;

    /// Delete an option. Returns whether the key existed.
    fn delete(&self, key: &str) -> Result<bool, OptionsError>;
}
