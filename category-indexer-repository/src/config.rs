//! Configuration types shared by the HTTP-backed providers.

use std::time::Duration;

/// Default request timeout for catalog and search requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP clients built by the providers.
///
/// Applies to both the catalog reader and the search provider. There is no
/// retry setting: a failed request is terminal for the invocation.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a config with a custom request timeout.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Timeout applied to every request
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}
