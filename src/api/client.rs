//! PokeAPI Client
//!
//! Cache-first HTTP client for the paginated PokeAPI endpoints. Raw response
//! bodies are cached under their request URL; the cache never interprets them.

use reqwest::Client;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{AppError, Result};
use crate::models::LocationAreaPage;

// == PokeAPI Client ==
/// HTTP client for PokeAPI, backed by the shared TTL cache.
pub struct PokeApiClient {
    /// Underlying HTTP client (connection pooling, TLS)
    http: Client,
    /// Shared response cache, keyed by request URL
    cache: Cache,
    /// API base URL without a trailing slash
    base_url: String,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a new client that stores fetched bodies in `cache`.
    pub fn new(cache: Cache, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            cache,
            base_url: base_url.into(),
        }
    }

    // == First Page URL ==
    /// Returns the URL of the first location-area page.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    // == Fetch Location Areas ==
    /// Fetches one page of location areas, consulting the cache first.
    ///
    /// On a miss the page is fetched over HTTP and the raw body is added to
    /// the cache, but only after the response came back successful and parsed
    /// cleanly; a failed fetch never populates the cache.
    pub async fn fetch_location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        if let Some(body) = self.cache.get(url).await {
            debug!("cache hit for {}", url);
            let page = serde_json::from_slice(&body)?;
            return Ok(page);
        }

        debug!("cache miss for {}, fetching", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        let page = serde_json::from_slice(&body)?;

        self.cache.add(url, body.to_vec()).await;

        Ok(page)
    }
}
