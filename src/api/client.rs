//! HTTP client for the Art Institute of Chicago public API.
//!
//! Two requests are made against the same `artworks` endpoint:
//! - `GET /artworks?page=<n>&limit=<size>&fields=...` for the visible page
//! - `GET /artworks` for the collection total shown by the pager
//!
//! No auth, no retries, no timeouts. A failure is returned to the caller as
//! an `ApiError` and nothing else happens.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{ApiError, ArtworkSource, PageQuery};
use super::types::{ARTWORK_FIELDS, Listing, ListingResponse, TotalResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// `ArtworkSource` backed by the public REST API.
pub struct ArticClient {
    base_url: String,
    client: reqwest::Client,
}

impl ArticClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn artworks_url(&self) -> String {
        format!("{}/artworks", self.base_url)
    }

    /// Sends a GET and decodes the body, mapping every failure to `ApiError`.
    /// `label` names the request in the log.
    async fn get_json<T: DeserializeOwned>(
        &self,
        label: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("{} response status: {}", label, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("{} API error: {} - {}", label, status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("{} response body: {} bytes", label, body.len());

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ArtworkSource for ArticClient {
    fn name(&self) -> &str {
        "artic"
    }

    async fn fetch_page(&self, query: PageQuery) -> Result<Listing, ApiError> {
        info!(
            "GET {} page={} limit={}",
            self.artworks_url(),
            query.page,
            query.limit
        );

        let request = self.client.get(self.artworks_url()).query(&[
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
            ("fields", ARTWORK_FIELDS.to_string()),
        ]);

        let label = format!("Page {}", query.page);
        let response: ListingResponse = self.get_json(&label, request).await?;
        let listing = Listing::from(response);
        info!(
            "Page {} loaded: {} records of {}",
            query.page,
            listing.records.len(),
            listing.total_count
        );
        Ok(listing)
    }

    async fn fetch_total_count(&self) -> Result<u64, ApiError> {
        info!("GET {} (total count)", self.artworks_url());

        let request = self.client.get(self.artworks_url());
        let response: TotalResponse = self.get_json("Total count", request).await?;
        info!("Total count: {}", response.pagination.total);
        Ok(response.pagination.total)
    }
}
