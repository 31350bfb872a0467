//! Requirements check run before every sync.
//!
//! A sync only starts once the application id, the API key and the index name
//! are all usable. Nothing is sent over the network before this check passes.

use std::fmt;

use thiserror::Error;

use category_indexer_repository::AlgoliaCredentials;

/// Placeholder older settings forms stored for fields that were never filled in.
pub const UNSET_SENTINEL: &str = "change me";

/// One of the settings a sync cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredSetting {
    ApplicationId,
    ApiKey,
    IndexName,
}

impl RequiredSetting {
    /// Human-readable name shown to the administrator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ApplicationId => "Application ID",
            Self::ApiKey => "Admin API key",
            Self::IndexName => "Index name",
        }
    }
}

impl fmt::Display for RequiredSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when one or more required settings are missing, blank or still the
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing configuration: {}", join_labels(.fields))]
pub struct MissingConfiguration {
    /// The invalid settings, in application id, API key, index name order.
    pub fields: Vec<RequiredSetting>,
}

fn join_labels(fields: &[RequiredSetting]) -> String {
    fields
        .iter()
        .map(RequiredSetting::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Settings that passed the requirements check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSettings {
    pub credentials: AlgoliaCredentials,
    pub index_name: String,
}

/// Check the three credential settings.
///
/// Each value must be present, non-blank and differ from [`UNSET_SENTINEL`].
/// Accepted values are trimmed.
///
/// # Returns
///
/// * `Ok(ValidatedSettings)` - All three settings are usable
/// * `Err(MissingConfiguration)` - Names every unusable setting
pub fn check_requirements(
    application_id: Option<&str>,
    api_key: Option<&str>,
    index_name: Option<&str>,
) -> Result<ValidatedSettings, MissingConfiguration> {
    let checked = [
        (RequiredSetting::ApplicationId, usable(application_id)),
        (RequiredSetting::ApiKey, usable(api_key)),
        (RequiredSetting::IndexName, usable(index_name)),
    ];

    let fields: Vec<RequiredSetting> = checked
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(setting, _)| *setting)
        .collect();

    match checked {
        [(_, Some(application_id)), (_, Some(api_key)), (_, Some(index_name))] => {
            Ok(ValidatedSettings {
                credentials: AlgoliaCredentials::new(application_id, api_key),
                index_name: index_name.to_string(),
            })
        }
        _ => Err(MissingConfiguration { fields }),
    }
}

fn usable(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != UNSET_SENTINEL)
}
