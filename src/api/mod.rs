pub mod client;
pub mod source;
pub mod types;

pub use client::{ArticClient, DEFAULT_BASE_URL};
pub use source::{ApiError, ArtworkSource, PageQuery};
pub use types::{Artwork, Listing};
