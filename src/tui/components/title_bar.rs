//! # TitleBar Component
//!
//! Top status line. Left side: where you are in the collection. Right side:
//! selection count and the transient status message.
//!
//! ```text
//! artview │ Page 2 of 10 │ 100 artworks          3 selected │ Page 2 loaded
//! ```
//!
//! Stateless: every field is a prop copied from `App` each frame. When the
//! terminal is too narrow for both sides, the right side wins.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct TitleBar {
    /// 1-based page number
    pub page_number: u32,
    /// `None` until the total count has arrived
    pub page_count: Option<u64>,
    pub total_count: Option<u64>,
    pub selected: usize,
    /// e.g. "Title ▲"
    pub sort_label: Option<String>,
    pub status_message: String,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    fn left_text(&self) -> String {
        let pages = match self.page_count {
            Some(count) => format!("Page {} of {}", self.page_number, count),
            None => format!("Page {}", self.page_number),
        };
        let mut text = format!("artview │ {}", pages);
        if let Some(total) = self.total_count {
            text.push_str(&format!(" │ {} artworks", total));
        }
        if let Some(sort) = &self.sort_label {
            text.push_str(&format!(" │ sort: {}", sort));
        }
        text
    }

    fn right_text(&self) -> String {
        let spinner = if self.loading {
            format!("{} ", SPINNER[self.spinner_frame % SPINNER.len()])
        } else {
            String::new()
        };
        if self.status_message.is_empty() {
            format!("{}{} selected", spinner, self.selected)
        } else {
            format!("{}{} selected │ {}", spinner, self.selected, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = self.left_text();
        let right = self.right_text();

        let width = area.width as usize;
        let gap = width.saturating_sub(left.width() + right.width());

        let line = if left.width() + right.width() + 1 > width {
            Line::from(Span::raw(right))
        } else {
            Line::from(vec![
                Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(gap)),
                Span::styled(right, Style::default().fg(Color::Cyan)),
            ])
        };

        frame.render_widget(line, area);
    }
}
