//! # Application State
//!
//! Everything the page controller owns, in one struct. No TUI types here;
//! presentation state (cursor row, popup) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn ArtworkSource>  // where pages come from
//! ├── page: PageState                 // cursor that drives fetches
//! ├── records: Vec<Artwork>           // last applied page, fetch order
//! ├── total_count: Option<u64>        // pager total (None until fetched)
//! ├── selection: Selection            // ids from `records`
//! ├── sort: Option<SortState>         // display order only
//! ├── load_state: LoadState           // Loading | Idle
//! ├── status_message: String          // status bar text
//! └── last_error: Option<String>      // last fetch failure, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{Artwork, ArtworkSource};
use crate::core::config::ResolvedConfig;
use crate::core::page::PageState;
use crate::core::selection::Selection;
use crate::core::sort::{SortState, display_order};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Idle,
}

pub struct App {
    pub source: Arc<dyn ArtworkSource>,
    pub page: PageState,
    pub records: Vec<Artwork>,
    pub total_count: Option<u64>,
    pub selection: Selection,
    pub sort: Option<SortState>,
    pub load_state: LoadState,
    pub status_message: String,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(source: Arc<dyn ArtworkSource>, page_size: u32) -> Self {
        Self {
            source,
            page: PageState::new(page_size),
            records: Vec::new(),
            total_count: None,
            selection: Selection::new(),
            sort: None,
            load_state: LoadState::Loading,
            status_message: String::from("Loading artworks..."),
            last_error: None,
        }
    }

    pub fn from_config(source: Arc<dyn ArtworkSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.page_size)
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Pages in the pager; 0 while the total is unknown.
    pub fn page_count(&self) -> u64 {
        self.total_count
            .map(|total| self.page.page_count(total))
            .unwrap_or(0)
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    /// Indices into `records` in the order the table draws them.
    pub fn display_order(&self) -> Vec<usize> {
        display_order(&self.records, self.sort)
    }

    /// Selected records in fetch order.
    pub fn selected_records(&self) -> Vec<&Artwork> {
        self.records
            .iter()
            .filter(|r| self.selection.contains(r.id))
            .collect()
    }
}
