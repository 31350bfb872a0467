//! Algolia provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! on top of the Algolia REST API, using `reqwest`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};
use url::Url;

use category_indexer_shared::CategoryRecord;

use crate::algolia::credentials::AlgoliaCredentials;
use crate::config::ClientConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{BatchRequest, SaveObjectsResponse};

const APPLICATION_ID_HEADER: &str = "x-algolia-application-id";
const API_KEY_HEADER: &str = "x-algolia-api-key";

/// Algolia provider implementation.
///
/// Bound to one application and one index. Build it per sync invocation from
/// validated credentials.
///
/// # Example
///
/// ```ignore
/// use category_indexer_repository::algolia::{AlgoliaCredentials, AlgoliaProvider};
/// use category_indexer_repository::ClientConfig;
///
/// let credentials = AlgoliaCredentials::new("APPID", "admin-key");
/// let provider = AlgoliaProvider::new(&credentials, "product_categories", &ClientConfig::default())?;
///
/// provider.check_connection().await?;
/// provider.save_objects(&records).await?;
/// ```
pub struct AlgoliaProvider {
    client: Client,
    host: Url,
    index_name: String,
}

impl AlgoliaProvider {
    /// Create a provider against the application's default host.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Application id and admin API key
    /// * `index_name` - The index records are written to
    /// * `config` - HTTP client configuration
    ///
    /// # Returns
    ///
    /// * `Ok(AlgoliaProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the client could not be built
    pub fn new(
        credentials: &AlgoliaCredentials,
        index_name: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, SearchIndexError> {
        let host = credentials.default_host();
        Self::with_host(credentials, index_name, &host, config)
    }

    /// Create a provider against an explicit host (e.g. a DSN host or a proxy).
    pub fn with_host(
        credentials: &AlgoliaCredentials,
        index_name: impl Into<String>,
        host: &str,
        config: &ClientConfig,
    ) -> Result<Self, SearchIndexError> {
        let index_name = index_name.into();
        if index_name.trim().is_empty() {
            return Err(SearchIndexError::validation("Index name is required"));
        }

        let host = Url::parse(host).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(APPLICATION_ID_HEADER),
            Self::header_value(&credentials.application_id)?,
        );
        let mut api_key = Self::header_value(&credentials.api_key)?;
        api_key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        info!(
            host = %host,
            index_name = %index_name,
            application_id = %credentials.application_id,
            "Created Algolia provider"
        );

        Ok(Self {
            client,
            host,
            index_name,
        })
    }

    fn header_value(value: &str) -> Result<HeaderValue, SearchIndexError> {
        HeaderValue::from_str(value)
            .map_err(|e| SearchIndexError::validation(format!("Invalid credential value: {}", e)))
    }

    /// Build an API URL from path segments. Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SearchIndexError> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|_| SearchIndexError::connection(format!("Invalid host: {}", self.host)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// URL of the API key listing used as the connectivity check.
    fn keys_url(&self) -> Result<Url, SearchIndexError> {
        self.endpoint(&["1", "keys"])
    }

    /// URL of the index batch endpoint.
    fn batch_url(&self) -> Result<Url, SearchIndexError> {
        self.endpoint(&["1", "indexes", &self.index_name, "batch"])
    }

    /// Interpret the body of a bulk write response.
    ///
    /// An empty body or a literal `null` means the service did not acknowledge
    /// the write.
    fn parse_save_response(body: &str) -> Result<Option<SaveObjectsResponse>, SearchIndexError> {
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        serde_json::from_str(trimmed)
            .map(Some)
            .map_err(|e| SearchIndexError::parse(e.to_string()))
    }
}

#[async_trait]
impl SearchIndexProvider for AlgoliaProvider {
    fn index_name(&self) -> &str {
        &self.index_name
    }

    /// List the application's API keys.
    ///
    /// Only the status code is inspected: any answer other than success means
    /// the service is unreachable or the credentials are wrong.
    async fn check_connection(&self) -> Result<(), SearchIndexError> {
        let url = self.keys_url()?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            error!(status = %status, "Search service rejected the credentials");
            return Err(SearchIndexError::connection(format!(
                "Credentials rejected with status {}",
                status
            )));
        }
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Connectivity check failed");
            return Err(SearchIndexError::connection(format!(
                "Connectivity check failed with status {}: {}",
                status, error_body
            )));
        }

        debug!("Connectivity check succeeded");
        Ok(())
    }

    /// Send every record in one `batch` call with `updateObject` actions.
    async fn save_objects(
        &self,
        records: &[CategoryRecord],
    ) -> Result<Option<SaveObjectsResponse>, SearchIndexError> {
        let url = self.batch_url()?;
        let body = serde_json::to_vec(&BatchRequest::upsert(records))
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::write(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SearchIndexError::write(e.to_string()))?;

        if !status.is_success() {
            error!(status = %status, body = %text, "Batch request failed");
            return Err(SearchIndexError::write(format!(
                "Batch failed with status {}: {}",
                status, text
            )));
        }

        let acknowledgment = Self::parse_save_response(&text)?;
        debug!(
            index_name = %self.index_name,
            record_count = records.len(),
            acknowledged = acknowledgment.is_some(),
            "Batch request sent"
        );
        Ok(acknowledgment)
    }
}
