use std::fmt;

use async_trait::async_trait;

use super::types::Listing;

/// Errors that can occur while talking to the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not the listing shape we expect.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Query parameters for one listing page. `page` is 1-based, as the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

/// Anything that can serve artwork listings.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches one page of records.
    async fn fetch_page(&self, query: PageQuery) -> Result<Listing, ApiError>;

    /// Fetches the collection total without a page parameter.
    async fn fetch_total_count(&self) -> Result<u64, ApiError>;
}
