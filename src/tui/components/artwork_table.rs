//! # ArtworkTable Component
//!
//! The main table: a checkbox column followed by the six record columns.
//!
//! ## State
//!
//! `ArtworkTableState` persists across frames in `TuiState` and tracks the
//! cursor as a *display position* (row on screen, after sorting), not a
//! record index. `ArtworkTable` is built each frame with borrowed props and
//! maps display positions back to records through `order`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::api::Artwork;
use crate::core::selection::Selection;
use crate::core::sort::{SortColumn, SortState};
use crate::tui::component::Component;

/// Rows taken by the table chrome above the first record (top border + header).
pub const TABLE_TOP_OFFSET: u16 = 2;

/// Persistent cursor and scroll state for the table.
#[derive(Default)]
pub struct ArtworkTableState {
    pub table_state: TableState,
}

impl ArtworkTableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display position, if there are rows.
    pub fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn move_up(&mut self) {
        if let Some(current) = self.table_state.selected() {
            self.table_state.select(Some(current.saturating_sub(1)));
        }
    }

    pub fn move_down(&mut self, row_count: usize) {
        if let Some(current) = self.table_state.selected()
            && current + 1 < row_count
        {
            self.table_state.select(Some(current + 1));
        }
    }

    pub fn select(&mut self, position: usize) {
        self.table_state.select(Some(position));
    }

    /// Back to the top, e.g. after a page change.
    pub fn reset(&mut self) {
        self.table_state = TableState::default();
    }

    /// Keep the cursor on a real row after the row count changes.
    pub fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.table_state.select(None);
            return;
        }
        let position = self.table_state.selected().unwrap_or(0).min(row_count - 1);
        self.table_state.select(Some(position));
    }
}

/// Transient render wrapper for the table.
pub struct ArtworkTable<'a> {
    pub records: &'a [Artwork],
    /// Record indices in display order
    pub order: &'a [usize],
    pub selection: &'a Selection,
    pub sort: Option<SortState>,
    pub loading: bool,
    pub state: &'a mut ArtworkTableState,
}

impl ArtworkTable<'_> {
    fn header(&self) -> Row<'static> {
        let mut cells = vec![Cell::from("")];
        for column in SortColumn::ALL {
            let label = match self.sort {
                Some(sort) if sort.column == column => {
                    format!("{} {}", column.label(), sort.direction.arrow())
                }
                _ => column.label().to_string(),
            };
            cells.push(Cell::from(label));
        }
        Row::new(cells).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn row(&self, record: &Artwork) -> Row<'static> {
        let checkbox = if self.selection.contains(record.id) {
            Span::styled("[x]", Style::default().fg(Color::Green))
        } else {
            Span::styled("[ ]", Style::default().fg(Color::DarkGray))
        };
        Row::new(vec![
            Cell::from(checkbox),
            Cell::from(first_line(&record.title)),
            Cell::from(first_line(&record.place_of_origin)),
            Cell::from(first_line(&record.artist_display)),
            Cell::from(first_line(&record.inscriptions)),
            Cell::from(format_date(record.date_start)),
            Cell::from(format_date(record.date_end)),
        ])
    }
}

impl Component for ArtworkTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.loading {
            " Artworks (loading...) "
        } else {
            " Artworks "
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.records.is_empty() {
            let message = if self.loading {
                "Loading..."
            } else {
                "No artworks on this page."
            };
            let empty = Paragraph::new(Line::from(message))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let rows: Vec<Row> = self
            .order
            .iter()
            .filter_map(|&index| self.records.get(index))
            .map(|record| self.row(record))
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Length(8),
        ];

        let mut table = Table::new(rows, widths)
            .header(self.header())
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        if self.loading {
            table = table.style(Style::default().add_modifier(Modifier::DIM));
        }

        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

/// Multi-line API fields (artist_display, inscriptions) collapse to their first line.
fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").trim().to_string()
}

fn format_date(date: Option<i32>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::SortDirection;
    use crate::test_support::sample_records;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(table: &mut ArtworkTable, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                table.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_first_line_and_dates() {
        assert_eq!(first_line("Georges Seurat\nFrench, 1859-1891"), "Georges Seurat");
        assert_eq!(first_line(""), "");
        assert_eq!(format_date(Some(-500)), "-500");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut state = ArtworkTableState::new();
        state.clamp(3);
        assert_eq!(state.cursor(), Some(0));
        state.move_up();
        assert_eq!(state.cursor(), Some(0));
        state.move_down(3);
        state.move_down(3);
        state.move_down(3);
        assert_eq!(state.cursor(), Some(2));
        state.clamp(1);
        assert_eq!(state.cursor(), Some(0));
        state.clamp(0);
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_renders_checkboxes_and_headers() {
        let records = sample_records(3);
        let order = vec![0, 1, 2];
        let mut selection = Selection::new();
        selection.toggle(records[1].id);
        let mut state = ArtworkTableState::new();

        let mut table = ArtworkTable {
            records: &records,
            order: &order,
            selection: &selection,
            sort: Some(SortState {
                column: SortColumn::Title,
                direction: SortDirection::Descending,
            }),
            loading: false,
            state: &mut state,
        };
        let text = render_to_text(&mut table, 160, 10);

        assert!(text.contains("Title ▼"));
        assert!(text.contains("Place of Origin"));
        assert!(text.contains("Date End"));
        assert!(text.contains("Artwork 0"));
        assert!(text.contains("[x]"));
        assert!(text.contains("[ ]"));
    }

    #[test]
    fn test_empty_loading_placeholder() {
        let selection = Selection::new();
        let mut state = ArtworkTableState::new();
        let mut table = ArtworkTable {
            records: &[],
            order: &[],
            selection: &selection,
            sort: None,
            loading: true,
            state: &mut state,
        };
        let text = render_to_text(&mut table, 60, 5);
        assert!(text.contains("Loading..."));
    }
}
