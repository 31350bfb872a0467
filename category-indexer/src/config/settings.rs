//! Indexer settings persisted in the options store.
//!
//! Four options drive a sync: the search application id, its admin API key,
//! the index name and the auto-send flag. Values that are missing or stored
//! with the wrong type read back as absent; the requirements check decides
//! whether they are usable.

use serde_json::Value;
use tracing::{debug, info};

use category_indexer_repository::{OptionsError, OptionsStore};

use crate::requirements::{check_requirements, MissingConfiguration, ValidatedSettings};

/// Prefix shared by every option key.
pub const OPTION_PREFIX: &str = "_algolia_woo_category_indexer";

pub const APPLICATION_ID: &str = "_application_id";
pub const API_KEY: &str = "_admin_api_key";
pub const INDEX_NAME: &str = "_index_name";
pub const AUTO_SEND_CATEGORIES: &str = "_automatically_send_new_categories";

/// Written by older releases; never read, only removed on uninstall.
pub const LEGACY_INDEX_IN_STOCK: &str = "_index_in_stock";

/// Every option suffix owned by the indexer.
pub const ALL_OPTIONS: [&str; 5] = [
    APPLICATION_ID,
    API_KEY,
    INDEX_NAME,
    LEGACY_INDEX_IN_STOCK,
    AUTO_SEND_CATEGORIES,
];

/// Full option key for a suffix.
pub fn option_key(suffix: &str) -> String {
    format!("{}{}", OPTION_PREFIX, suffix)
}

/// The indexer settings as read from the options store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexerSettings {
    pub application_id: Option<String>,
    pub api_key: Option<String>,
    pub index_name: Option<String>,
    pub auto_send_categories: bool,
}

impl IndexerSettings {
    /// Read all settings from the store.
    pub fn load(store: &dyn OptionsStore) -> Result<Self, OptionsError> {
        let settings = Self {
            application_id: string_option(store.get(&option_key(APPLICATION_ID))?),
            api_key: string_option(store.get(&option_key(API_KEY))?),
            index_name: string_option(store.get(&option_key(INDEX_NAME))?),
            auto_send_categories: flag_option(store.get(&option_key(AUTO_SEND_CATEGORIES))?),
        };

        debug!(
            application_id = ?settings.application_id,
            index_name = ?settings.index_name,
            api_key_set = settings.api_key.is_some(),
            auto_send_categories = settings.auto_send_categories,
            "Loaded indexer settings"
        );
        Ok(settings)
    }

    /// Run the requirements check on the three credential settings.
    pub fn validate(&self) -> Result<ValidatedSettings, MissingConfiguration> {
        check_requirements(
            self.application_id.as_deref(),
            self.api_key.as_deref(),
            self.index_name.as_deref(),
        )
    }

    /// The API key with everything but its last four characters hidden.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let count = key.chars().count();
            // Short keys are hidden entirely.
            let tail: String = if count > 8 {
                key.chars().skip(count - 4).collect()
            } else {
                String::new()
            };
            format!("********{}", tail)
        })
    }

    /// Delete every option the indexer owns.
    ///
    /// # Returns
    ///
    /// The number of options that existed and were removed.
    pub fn uninstall(store: &dyn OptionsStore) -> Result<usize, OptionsError> {
        let mut removed = 0;
        for suffix in ALL_OPTIONS {
            if store.delete(&option_key(suffix))? {
                removed += 1;
            }
        }

        info!(removed, "Removed indexer settings");
        Ok(removed)
    }
}

/// A partial change to the settings; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub application_id: Option<String>,
    pub api_key: Option<String>,
    pub index_name: Option<String>,
    pub auto_send_categories: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Write the provided fields to the store.
    pub fn apply(&self, store: &dyn OptionsStore) -> Result<(), OptionsError> {
        let strings = [
            (APPLICATION_ID, &self.application_id),
            (API_KEY, &self.api_key),
            (INDEX_NAME, &self.index_name),
        ];
        for (suffix, value) in strings {
            if let Some(value) = value {
                store.set(&option_key(suffix), Value::String(value.trim().to_string()))?;
            }
        }

        if let Some(flag) = self.auto_send_categories {
            store.set(&option_key(AUTO_SEND_CATEGORIES), Value::Bool(flag))?;
        }

        info!(
            application_id = self.application_id.is_some(),
            api_key = self.api_key.is_some(),
            index_name = self.index_name.is_some(),
            auto_send_categories = ?self.auto_send_categories,
            "Updated indexer settings"
        );
        Ok(())
    }
}

/// A string option; any other JSON type reads as absent.
fn string_option(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// A boolean-like option as written by settings forms (`"1"`, `"on"`, ...).
fn flag_option(value: Option<Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use category_indexer_repository::MemoryOptionsStore;
    use serde_json::json;

    #[test]
    fn test_option_keys() {
        assert_eq!(
            option_key(APPLICATION_ID),
            "_algolia_woo_category_indexer_application_id"
        );
        assert_eq!(
            option_key(AUTO_SEND_CATEGORIES),
            "_algolia_woo_category_indexer_automatically_send_new_categories"
        );
    }

    #[test]
    fn test_load_unset_store() {
        let store = MemoryOptionsStore::new();
        let settings = IndexerSettings::load(&store).unwrap();
        assert_eq!(settings, IndexerSettings::default());
    }

    #[test]
    fn test_load_wrong_types_read_as_absent() {
        let store = MemoryOptionsStore::with_options([
            (option_key(APPLICATION_ID), json!(42)),
            (option_key(API_KEY), json!(["key"])),
            (option_key(INDEX_NAME), json!("categories")),
        ]);

        let settings = IndexerSettings::load(&store).unwrap();

        assert_eq!(settings.application_id, None);
        assert_eq!(settings.api_key, None);
        assert_eq!(settings.index_name.as_deref(), Some("categories"));
    }

    #[test]
    fn test_flag_values() {
        for (value, expected) in [
            (json!(true), true),
            (json!(false), false),
            (json!(1), true),
            (json!(0), false),
            (json!("1"), true),
            (json!("on"), true),
            (json!("Yes"), true),
            (json!("0"), false),
            (json!(""), false),
            (json!(null), false),
        ] {
            assert_eq!(flag_option(Some(value.clone())), expected, "value {}", value);
        }
        assert!(!flag_option(None));
    }

    #[test]
    fn test_update_only_touches_provided_fields() {
        let store = MemoryOptionsStore::with_options([(option_key(API_KEY), json!("old-key"))]);

        SettingsUpdate {
            application_id: Some(" APPID ".to_string()),
            auto_send_categories: Some(true),
            ..Default::default()
        }
        .apply(&store)
        .unwrap();

        let settings = IndexerSettings::load(&store).unwrap();
        assert_eq!(settings.application_id.as_deref(), Some("APPID"));
        assert_eq!(settings.api_key.as_deref(), Some("old-key"));
        assert_eq!(settings.index_name, None);
        assert!(settings.auto_send_categories);
    }

    #[test]
    fn test_uninstall_removes_every_option() {
        let store = MemoryOptionsStore::with_options([
            (option_key(APPLICATION_ID), json!("APPID")),
            (option_key(API_KEY), json!("key")),
            (option_key(INDEX_NAME), json!("categories")),
            (option_key(LEGACY_INDEX_IN_STOCK), json!("1")),
            (option_key(AUTO_SEND_CATEGORIES), json!(true)),
            ("unrelated".to_string(), json!("kept")),
        ]);

        let removed = IndexerSettings::uninstall(&store).unwrap();

        assert_eq!(removed, 5);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("unrelated").unwrap(), Some(json!("kept")));
    }

    #[test]
    fn test_masked_api_key() {
        let settings = IndexerSettings {
            api_key: Some("0123456789abcdef".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.masked_api_key().as_deref(), Some("********cdef"));

        let settings = IndexerSettings {
            api_key: Some("short".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.masked_api_key().as_deref(), Some("********"));

        assert_eq!(IndexerSettings::default().masked_api_key(), None);
    }
}
