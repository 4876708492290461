//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top line with page position, selection count and status
//! - `PagerBar`: bottom line with page position and rows-per-page choices
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep state across frames:
//! - `ArtworkTable`: the record table; cursor lives in `ArtworkTableState`
//! - `BulkSelectPopup`: numeric "select first N" overlay; input lives in
//!   `BulkSelectInput`, which emits `BulkSelectEvent`s
//!
//! ### Props-Based Data Flow
//!
//! Components receive data as props, never by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! PagerBar { page: app.page, loaded: app.records.len(), total_count: app.total_count }
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status line)
//! ├── artwork_table.rs  (record table + cursor state)
//! ├── pager_bar.rs      (page position + rows per page)
//! └── bulk_select.rs    (select-first-N popup)
//! ```

pub mod artwork_table;
pub mod bulk_select;
pub mod pager_bar;
mod title_bar;

pub use artwork_table::{ArtworkTable, ArtworkTableState};
pub use bulk_select::{BulkSelectEvent, BulkSelectInput, BulkSelectPopup};
pub use pager_bar::PagerBar;
pub use title_bar::TitleBar;
