//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{ApiError, Artwork, ArtworkSource, Listing, PageQuery};
use crate::core::page::DEFAULT_PAGE_SIZE;

/// A source that never has anything, for tests that don't hit the network.
pub struct NoopSource;

#[async_trait]
impl ArtworkSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_page(&self, _query: PageQuery) -> Result<Listing, ApiError> {
        Ok(Listing::default())
    }

    async fn fetch_total_count(&self) -> Result<u64, ApiError> {
        Ok(0)
    }
}

/// Builds one artwork with just an id and title filled in meaningfully.
pub fn artwork(id: u64, title: &str) -> Artwork {
    Artwork {
        id,
        title: title.to_string(),
        place_of_origin: "France".to_string(),
        artist_display: format!("Artist {}", id),
        inscriptions: String::new(),
        date_start: Some(1800),
        date_end: Some(1850),
    }
}

/// `count` artworks with ids 1000, 1001, ... in that order.
pub fn sample_records(count: usize) -> Vec<Artwork> {
    (0..count as u64)
        .map(|i| artwork(1000 + i, &format!("Artwork {}", i)))
        .collect()
}

/// Creates a test App with a NoopSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopSource), DEFAULT_PAGE_SIZE)
}
