//! Algolia application credentials.

use std::fmt;

/// Credentials for one Algolia application.
///
/// Only built from settings that passed the requirements check. The API key is
/// masked in `Debug` output so credentials can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct AlgoliaCredentials {
    pub application_id: String,
    pub api_key: String,
}

impl AlgoliaCredentials {
    /// Create a new set of credentials.
    pub fn new(application_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            api_key: api_key.into(),
        }
    }

    /// The default write host for this application.
    pub fn default_host(&self) -> String {
        format!(
            "https://{}.algolia.net",
            self.application_id.to_ascii_lowercase()
        )
    }
}

impl fmt::Debug for AlgoliaCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgoliaCredentials")
            .field("application_id", &self.application_id)
            .field("api_key", &"***")
            .finish()
    }
}
