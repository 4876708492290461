//! # PagerBar Component
//!
//! Bottom line: page position, rows-per-page choices (current one
//! highlighted) and the visible range.
//!
//! ```text
//!  « ‹ Page 2 / 10 › »   Rows: 5 [10] 25 50   11–20 of 100
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::page::{PAGE_SIZE_OPTIONS, PageState};
use crate::tui::component::Component;

pub struct PagerBar {
    pub page: PageState,
    /// Records on the page currently shown
    pub loaded: usize,
    pub total_count: Option<u64>,
}

impl PagerBar {
    fn position(&self) -> String {
        match self.total_count {
            Some(total) => format!(
                "Page {} / {}",
                self.page.page_index + 1,
                self.page.page_count(total).max(1)
            ),
            None => format!("Page {}", self.page.page_index + 1),
        }
    }

    fn range(&self) -> String {
        let total = self
            .total_count
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        if self.loaded == 0 {
            return format!("0 of {}", total);
        }
        let first = self.page.first() + 1;
        let last = self.page.first() + self.loaded as u64;
        format!("{}–{} of {}", first, last, total)
    }
}

impl Component for PagerBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = vec![
            Span::styled(" « ‹ ", dim),
            Span::styled(self.position(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" › »   ", dim),
            Span::raw("Rows:"),
        ];
        for size in PAGE_SIZE_OPTIONS {
            if size == self.page.page_size {
                spans.push(Span::styled(
                    format!(" [{}]", size),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(format!(" {}", size), dim));
            }
        }
        spans.push(Span::raw("   "));
        spans.push(Span::raw(self.range()));

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(bar: &mut PagerBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_ten_pages_of_ten() {
        let mut bar = PagerBar {
            page: PageState {
                page_index: 1,
                page_size: 10,
            },
            loaded: 10,
            total_count: Some(100),
        };
        assert_eq!(bar.position(), "Page 2 / 10");
        assert_eq!(bar.range(), "11–20 of 100");
        let text = render_text(&mut bar);
        assert!(text.contains("[10]"));
        assert!(!text.contains("[5]"));
    }

    #[test]
    fn test_unknown_total() {
        let bar = PagerBar {
            page: PageState::new(5),
            loaded: 0,
            total_count: None,
        };
        assert_eq!(bar.position(), "Page 1");
        assert_eq!(bar.range(), "0 of ?");
    }
}
