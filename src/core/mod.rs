//! # Page Controller
//!
//! Paging, selection and sorting logic for the artwork browser.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Effect::FetchPage
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │   spawns     │    API     │
//!           │  Adapter   │ ───────────▶ │  (reqwest) │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all controller state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`page`]: `PageState` and pager moves
//! - [`selection`]: selected record ids
//! - [`sort`]: display-only column sorting
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod page;
pub mod selection;
pub mod sort;
pub mod state;
