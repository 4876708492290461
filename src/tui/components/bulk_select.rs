//! # Bulk Select Popup
//!
//! Small overlay for "select the first N rows". Opened with `b`, dismissed
//! with Esc. The input only accepts digits and refuses any keystroke that
//! would overflow `u32`, so a submitted value is always a valid count.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BulkSelectInput` lives in `TuiState` while the popup is open
//! - `BulkSelectPopup` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkSelectEvent {
    Submit(u32),
    Dismiss,
}

/// Persistent state for the popup.
pub struct BulkSelectInput {
    buffer: String,
    /// Rows on the current page (shown as a hint)
    pub loaded: usize,
}

impl BulkSelectInput {
    pub fn new(loaded: usize) -> Self {
        Self {
            buffer: String::new(),
            loaded,
        }
    }

    /// The typed count, if anything has been typed.
    pub fn value(&self) -> Option<u32> {
        self.buffer.parse().ok()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    fn push_digit(&mut self, digit: char) {
        let candidate = format!("{}{}", self.buffer, digit);
        if candidate.parse::<u32>().is_ok() {
            self.buffer = candidate;
        }
    }
}

impl EventHandler for BulkSelectInput {
    type Event = BulkSelectEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BulkSelectEvent> {
        match event {
            TuiEvent::Escape => Some(BulkSelectEvent::Dismiss),
            TuiEvent::Submit => self.value().map(BulkSelectEvent::Submit),
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                self.push_digit(*c);
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the popup.
pub struct BulkSelectPopup<'a> {
    state: &'a BulkSelectInput,
}

impl<'a> BulkSelectPopup<'a> {
    pub fn new(state: &'a BulkSelectInput) -> Self {
        Self { state }
    }
}

impl Component for BulkSelectPopup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 7, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Select Rows ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Submit  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));

        let input_line = if self.state.text().is_empty() {
            Line::from(vec![
                Span::raw("> "),
                Span::styled("Select Rows...", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::raw("> "),
                Span::styled(
                    format!("{}_", self.state.text()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        };

        let hint = Line::from(Span::styled(
            format!("First N of {} loaded rows", self.state.loaded),
            Style::default().fg(Color::DarkGray),
        ));

        let body = Paragraph::new(vec![Line::raw(""), input_line, Line::raw(""), hint]).block(block);
        frame.render_widget(body, popup);
    }
}

/// A rect `width` columns wide and `height` rows tall, centered in `outer` (clamped).
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
