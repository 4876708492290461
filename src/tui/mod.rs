//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into `core::Action` values, and carries out
//! the `Effect`s that `update()` returns by spawning fetch tasks.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetching
//!
//! Each `Effect::FetchPage` spawns an independent tokio task per request.
//! Results come back over a `std::sync::mpsc` channel as `Action`s and are
//! applied on the next loop iteration. Nothing is cancelled or sequenced.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or settled fetches.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{ArticClient, ArtworkSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::page::PageState;
use crate::core::sort::SortColumn;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ArtworkTableState, BulkSelectEvent, BulkSelectInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the page controller)
pub struct TuiState {
    pub table: ArtworkTableState,
    /// Bulk-select popup (None = hidden)
    pub bulk_select: Option<BulkSelectInput>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            table: ArtworkTableState::new(),
            bulk_select: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the listing source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn ArtworkSource> {
    Arc::new(ArticClient::new(Some(config.base_url.clone())))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    info!("Using source '{}' at {}", source.name(), config.base_url);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let mut should_quit = dispatch(&mut app, &mut tui, Action::Mount, &tx);

    while !should_quit {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.table.clamp(app.records.len());
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let frame_area = terminal.get_frame().area();
            if handle_event(&mut app, &mut tui, event, frame_area, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Settled fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
                break;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Route one terminal event. Returns true when the app should quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: ratatui::layout::Rect,
    tx: &mpsc::Sender<Action>,
) -> bool {
    // Ctrl+C always quits regardless of mode
    if matches!(event, TuiEvent::ForceQuit) {
        return dispatch(app, tui, Action::Quit, tx);
    }

    // While the popup is open, it gets every event
    if let Some(ref mut input) = tui.bulk_select {
        match input.handle_event(&event) {
            Some(BulkSelectEvent::Submit(n)) => {
                tui.bulk_select = None;
                return dispatch(app, tui, Action::BulkSelect(n), tx);
            }
            Some(BulkSelectEvent::Dismiss) => {
                tui.bulk_select = None;
            }
            None => {}
        }
        return false;
    }

    let row_count = app.records.len();
    let action = match event {
        TuiEvent::Escape | TuiEvent::InputChar('q') => Some(Action::Quit),
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
            tui.table.move_up();
            None
        }
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
            tui.table.move_down(row_count);
            None
        }
        TuiEvent::InputChar(' ') => record_at_cursor(app, tui).map(Action::ToggleSelection),
        TuiEvent::MouseClick(_col, row) => {
            let offset = tui.table.table_state.offset();
            ui::hit_test_row(row, frame_area, offset, row_count).and_then(|position| {
                tui.table.select(position);
                record_at_cursor(app, tui).map(Action::ToggleSelection)
            })
        }
        TuiEvent::PageNext | TuiEvent::InputChar('l') => Some(Action::NextPage),
        TuiEvent::PagePrev | TuiEvent::InputChar('h') => Some(Action::PrevPage),
        TuiEvent::PageFirst => Some(Action::FirstPage),
        TuiEvent::PageLast => Some(Action::LastPage),
        TuiEvent::InputChar('r') => Some(Action::CyclePageSize),
        TuiEvent::InputChar('s') => Some(next_sort_action(app)),
        TuiEvent::InputChar('d') => app.sort.map(|sort| Action::SortBy(sort.column)),
        TuiEvent::InputChar('c') => Some(Action::ClearSort),
        TuiEvent::InputChar('a') => Some(Action::SelectAll),
        TuiEvent::InputChar('x') => Some(Action::ClearSelection),
        TuiEvent::InputChar('b') => {
            tui.bulk_select = Some(BulkSelectInput::new(row_count));
            None
        }
        _ => None,
    };

    match action {
        Some(action) => dispatch(app, tui, action, tx),
        None => false,
    }
}

/// `s` walks the columns in order, then back to fetch order.
fn next_sort_action(app: &App) -> Action {
    match app.sort {
        None => Action::SortBy(SortColumn::Title),
        Some(sort) => match sort.column.next() {
            Some(column) => Action::SortBy(column),
            None => Action::ClearSort,
        },
    }
}

fn record_at_cursor(app: &App, tui: &TuiState) -> Option<u64> {
    let position = tui.table.cursor()?;
    let index = *app.display_order().get(position)?;
    app.records.get(index).map(|r| r.id)
}

/// Apply an action and carry out its effect. Returns true on quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::FetchPage { page, with_total } => {
            tui.table.reset();
            spawn_fetch_page(app.source.clone(), page, tx.clone());
            if with_total {
                spawn_fetch_total(app.source.clone(), tx.clone());
            }
            false
        }
        Effect::None => false,
    }
}

fn spawn_fetch_page(source: Arc<dyn ArtworkSource>, page: PageState, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning fetch for page {} (size {})",
        page.page_index + 1,
        page.page_size
    );
    tokio::spawn(async move {
        let action = match source.fetch_page(page.query()).await {
            Ok(listing) => Action::PageLoaded { page, listing },
            Err(e) => {
                warn!("Fetch for page {} failed: {}", page.page_index + 1, e);
                Action::PageFailed {
                    page,
                    error: e.to_string(),
                }
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver page {}: receiver dropped", page.page_index + 1);
        }
    });
}

fn spawn_fetch_total(source: Arc<dyn ArtworkSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning total count fetch");
    tokio::spawn(async move {
        let action = match source.fetch_total_count().await {
            Ok(total) => Action::TotalCountLoaded(total),
            Err(e) => {
                warn!("Total count fetch failed: {}", e);
                Action::TotalCountFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver total count: receiver dropped");
        }
    });
}
