//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User presses →? That's `Action::NextPage`.
//! A page arrives? That's `Action::PageLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! event loop must carry out. No I/O here; fetching happens in the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetches are not sequenced. If two pages are in flight, whichever settles
//! last wins, and the first settlement already clears the loading flag.

use log::{debug, info, warn};

use crate::api::Listing;
use crate::core::page::PageState;
use crate::core::sort::{SortColumn, SortState};
use crate::core::state::{App, LoadState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// First frame: load page zero and the collection total.
    Mount,
    /// The pager moved to a new index and/or size.
    PageChanged(PageState),
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    CyclePageSize,
    PageLoaded { page: PageState, listing: Listing },
    PageFailed { page: PageState, error: String },
    TotalCountLoaded(u64),
    TotalCountFailed(String),
    ToggleSelection(u64),
    /// Select the first `n` loaded records in fetch order.
    BulkSelect(u32),
    SelectAll,
    ClearSelection,
    SortBy(SortColumn),
    ClearSort,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Request one listing page; `with_total` also requests the total count.
    FetchPage { page: PageState, with_total: bool },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Mount => {
            app.load_state = LoadState::Loading;
            app.status_message = format!("Loading page {}...", app.page.page_index + 1);
            Effect::FetchPage {
                page: app.page,
                with_total: true,
            }
        }
        Action::PageChanged(page) => {
            let page = PageState {
                page_index: page.page_index,
                ..PageState::new(page.page_size)
            };
            change_page(app, page)
        }
        Action::NextPage => match app.page.next(app.total_count) {
            Some(page) => change_page(app, page),
            None => Effect::None,
        },
        Action::PrevPage => match app.page.prev() {
            Some(page) => change_page(app, page),
            None => Effect::None,
        },
        Action::FirstPage => match app.page.first_page() {
            Some(page) => change_page(app, page),
            None => Effect::None,
        },
        Action::LastPage => match app.page.last_page(app.total_count) {
            Some(page) => change_page(app, page),
            None => Effect::None,
        },
        Action::CyclePageSize => {
            let page = app.page.cycle_page_size();
            change_page(app, page)
        }
        Action::PageLoaded { page, listing } => {
            info!(
                "Applying page {} ({} records)",
                page.page_index + 1,
                listing.records.len()
            );
            app.records = listing.records;
            app.selection.retain_loaded(&app.records);
            app.load_state = LoadState::Idle;
            app.last_error = None;
            app.status_message = format!("Page {} loaded", page.page_index + 1);
            Effect::None
        }
        Action::PageFailed { page, error } => {
            warn!("Page {} failed: {}", page.page_index + 1, error);
            app.load_state = LoadState::Idle;
            app.status_message = format!("Could not load page {}", page.page_index + 1);
            app.last_error = Some(error);
            Effect::None
        }
        Action::TotalCountLoaded(total) => {
            app.total_count = Some(total);
            Effect::None
        }
        Action::TotalCountFailed(error) => {
            warn!("Total count failed: {}", error);
            Effect::None
        }
        Action::ToggleSelection(id) => {
            if app.records.iter().any(|r| r.id == id) {
                app.selection.toggle(id);
                app.status_message = format!("{} selected", app.selection.len());
            } else {
                debug!("Ignoring toggle for record {} not on this page", id);
            }
            Effect::None
        }
        Action::BulkSelect(n) => {
            let count = app.selection.select_first(&app.records, n);
            app.status_message = format!("{} selected", count);
            Effect::None
        }
        Action::SelectAll => {
            let n = u32::try_from(app.records.len()).unwrap_or(u32::MAX);
            update(app, Action::BulkSelect(n))
        }
        Action::ClearSelection => {
            app.selection.clear();
            app.status_message = String::from("Selection cleared");
            Effect::None
        }
        Action::SortBy(column) => {
            let sort = SortState::apply(app.sort, column);
            app.status_message = format!("Sorted by {} {}", column.label(), sort.direction.arrow());
            app.sort = Some(sort);
            Effect::None
        }
        Action::ClearSort => {
            app.sort = None;
            app.status_message = String::from("Fetch order");
            Effect::None
        }
        Action::Quit => {
            let ids: Vec<u64> = app.selected_records().iter().map(|r| r.id).collect();
            info!("Quitting with {} selected: {:?}", ids.len(), ids);
            Effect::Quit
        }
    }
}

fn change_page(app: &mut App, page: PageState) -> Effect {
    app.page = page;
    app.load_state = LoadState::Loading;
    app.status_message = format!("Loading page {}...", page.page_index + 1);
    Effect::FetchPage {
        page,
        with_total: app.total_count.is_none(),
    }
}
