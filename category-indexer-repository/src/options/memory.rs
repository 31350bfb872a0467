//! In-memory options store.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::errors::OptionsError;
use crate::interfaces::OptionsStore;

/// Options store kept in memory, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryOptionsStore {
    options: RwLock<HashMap<String, Value>>,
}

impl MemoryOptionsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given options.
    pub fn with_options<K: Into<String>>(options: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self {
            options: RwLock::new(
                options
                    .into_iter()
                    .map(|(key, value)| (key.into(), value))
                    .collect(),
            ),
        }
    }

    /// Number of options currently stored.
    pub fn len(&self) -> usize {
        self.options.read().map(|options| options.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OptionsStore for MemoryOptionsStore {
    fn get(&self, key: &str) -> Result<Option<Value>, OptionsError> {
        let options = self.options.read().map_err(|_| OptionsError::Poisoned)?;
        Ok(options.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), OptionsError> {
        let mut options = self.options.write().map_err(|_| OptionsError::Poisoned)?;
        options.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, OptionsError> {
        let mut options = self.options.write().map_err(|_| OptionsError::Poisoned)?;
        Ok(options.remove(key).is_some())
    }
}
