//! WooCommerce REST API category reader.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, error, info, instrument};
use url::Url;

use category_indexer_shared::{CategoryId, RawCategory};

use crate::catalog::payload::WooCategory;
use crate::config::ClientConfig;
use crate::errors::CatalogError;
use crate::interfaces::CategorySource;

/// Page size requested from the categories endpoint (the API maximum).
const PAGE_SIZE: u32 = 100;

/// Response header carrying the number of pages for a listing.
const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// Reads product categories from a WooCommerce store.
///
/// Authenticates with a REST API consumer key and secret over HTTP basic auth.
/// Product category terms have no draft state; a category counts as published
/// once it holds at least one product, so empty categories are never read.
pub struct WooCommerceCategorySource {
    client: Client,
    base_url: Url,
    consumer_key: String,
    consumer_secret: String,
}

impl WooCommerceCategorySource {
    /// Create a reader for the store at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The store's site URL (e.g. "https://shop.example")
    /// * `consumer_key` - REST API consumer key
    /// * `consumer_secret` - REST API consumer secret
    /// * `config` - HTTP client configuration
    pub fn new(
        base_url: &str,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url).map_err(|e| CatalogError::config(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::config(format!(
                "Store URL cannot be a base: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::config(e.to_string()))?;

        info!(base_url = %base_url, "Created WooCommerce category source");

        Ok(Self {
            client,
            base_url,
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
        })
    }

    /// The category listing endpoint, restricted to non-empty categories.
    fn categories_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["wp-json", "wc", "v3", "products", "categories"]);
        }
        url.query_pairs_mut().append_pair("hide_empty", "true");
        url
    }

    fn page_url(&self, page: u32) -> Url {
        let mut url = self.categories_url();
        url.query_pairs_mut()
            .append_pair("per_page", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());
        url
    }

    /// Listing filtered to one term, so an empty category yields no rows.
    fn term_url(&self, term_id: CategoryId) -> Url {
        let mut url = self.categories_url();
        url.query_pairs_mut()
            .append_pair("include", &term_id.to_string());
        url
    }

    async fn get(&self, url: Url) -> Result<Response, CatalogError> {
        self.client
            .get(url)
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .send()
            .await
            .map_err(|e| CatalogError::request(e.to_string()))
    }

    async fn error_for_status(response: Response) -> CatalogError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "Catalog request failed");
        CatalogError::status(status.as_u16(), body)
    }

    fn total_pages(response: &Response) -> Option<u32> {
        response
            .headers()
            .get(TOTAL_PAGES_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok())
    }

    async fn fetch_all(&self) -> Result<Vec<RawCategory>, CatalogError> {
        let mut categories = Vec::new();
        let mut page = 1;

        loop {
            let response = self.get(self.page_url(page)).await?;
            if !response.status().is_success() {
                return Err(Self::error_for_status(response).await);
            }

            let total_pages = Self::total_pages(&response);
            let batch: Vec<WooCategory> = response
                .json()
                .await
                .map_err(|e| CatalogError::parse(e.to_string()))?;

            debug!(page, fetched = batch.len(), ?total_pages, "Fetched category page");

            let short_page = batch.len() < PAGE_SIZE as usize;
            categories.extend(batch.into_iter().map(RawCategory::from));

            let last_page = match total_pages {
                Some(total) => page >= total,
                None => short_page,
            };
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(categories)
    }

    async fn fetch_one(&self, term_id: CategoryId) -> Result<Vec<RawCategory>, CatalogError> {
        let response = self.get(self.term_url(term_id)).await?;
        if !response.status().is_success() {
            return Err(Self::error_for_status(response).await);
        }

        let batch: Vec<WooCategory> = response
            .json()
            .await
            .map_err(|e| CatalogError::parse(e.to_string()))?;

        let categories: Vec<RawCategory> = batch
            .into_iter()
            .filter(|category| category.id == term_id)
            .map(RawCategory::from)
            .collect();
        if categories.is_empty() {
            debug!(term_id, "Category not found or has no products");
        }
        Ok(categories)
    }
}

#[async_trait]
impl CategorySource for WooCommerceCategorySource {
    #[instrument(skip(self))]
    async fn fetch_categories(
        &self,
        target: Option<CategoryId>,
    ) -> Result<Vec<RawCategory>, CatalogError> {
        let categories = match target {
            Some(term_id) => self.fetch_one(term_id).await?,
            None => self.fetch_all().await?,
        };

        info!(count = categories.len(), "Fetched categories from WooCommerce");
        Ok(categories)
    }
}
