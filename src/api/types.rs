//! Wire types for the Art Institute of Chicago `artworks` listing.
//!
//! The API returns `null` for plenty of fields on older records, so string
//! fields collapse `null` to `""` and dates stay optional.

use serde::{Deserialize, Deserializer, Serialize};

/// Fields requested from the listing endpoint. Keeps payloads small.
pub const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// One artwork row as shown in the table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_origin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_display: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub inscriptions: String,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `pagination` object attached to every listing response. Only the
/// total is read; `limit`, `offset` and the page counters are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
}

/// Raw listing body: `{ data: [...], pagination: {...} }`.
#[derive(Deserialize, Debug)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

/// Body of the total-count request. Only the pagination block is read.
#[derive(Deserialize, Debug)]
pub struct TotalResponse {
    pub pagination: Pagination,
}

/// One fetched page: its records in fetch order plus the collection total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub records: Vec<Artwork>,
    pub total_count: u64,
}

impl From<ListingResponse> for Listing {
    fn from(response: ListingResponse) -> Self {
        Self {
            records: response.data,
            total_count: response.pagination.total,
        }
    }
}
