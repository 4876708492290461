use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::artwork_table::TABLE_TOP_OFFSET;
use crate::tui::components::{ArtworkTable, BulkSelectPopup, PagerBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HELP_TEXT: &str = " ↑↓ move  Space toggle  ←→ page  Home/End first/last  r rows  s sort  d reverse  c unsort  b bulk  a all  x none  q quit";

fn layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, table_area, pager_area, help_area] = layout(frame.area());

    let mut title_bar = TitleBar {
        page_number: app.page.page_index + 1,
        page_count: app.total_count.map(|_| app.page_count()),
        total_count: app.total_count,
        selected: app.selection.len(),
        sort_label: app
            .sort
            .map(|sort| format!("{} {}", sort.column.label(), sort.direction.arrow())),
        status_message: app.status_message.clone(),
        loading: app.is_loading(),
        spinner_frame,
    };
    title_bar.render(frame, title_area);

    let order = app.display_order();
    let mut table = ArtworkTable {
        records: &app.records,
        order: &order,
        selection: &app.selection,
        sort: app.sort,
        loading: app.is_loading(),
        state: &mut tui.table,
    };
    table.render(frame, table_area);

    let mut pager = PagerBar {
        page: app.page,
        loaded: app.records.len(),
        total_count: app.total_count,
    };
    pager.render(frame, pager_area);

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(ref input) = tui.bulk_select {
        BulkSelectPopup::new(input).render(frame, frame.area());
    }
}

/// Hit test: given a screen Y coordinate, find which table row (display
/// position) is under it.
pub fn hit_test_row(
    screen_y: u16,
    frame_area: Rect,
    scroll_offset: usize,
    row_count: usize,
) -> Option<usize> {
    let [_title, table_area, _pager, _help] = layout(frame_area);

    let first_row_y = table_area.y + TABLE_TOP_OFFSET;
    let last_row_y = table_area.y + table_area.height.saturating_sub(1); // bottom border
    if screen_y < first_row_y || screen_y >= last_row_y {
        return None;
    }

    let position = (screen_y - first_row_y) as usize + scroll_offset;
    (position < row_count).then_some(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Listing;
    use crate::core::action::{Action, update};
    use crate::test_support::{sample_records, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_while_loading() {
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &app, &mut tui, 0)).unwrap();
        assert!(screen_text(&terminal).contains("Loading..."));
    }

    #[test]
    fn test_draw_ui_with_page_and_popup() {
        let backend = TestBackend::new(160, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Mount);
        update(&mut app, Action::TotalCountLoaded(100));
        let page = app.page;
        update(
            &mut app,
            Action::PageLoaded {
                page,
                listing: Listing {
                    records: sample_records(10),
                    total_count: 100,
                },
            },
        );
        update(&mut app, Action::BulkSelect(3));

        let mut tui = TuiState::new();
        tui.bulk_select = Some(crate::tui::components::BulkSelectInput::new(10));
        terminal.draw(|f| draw_ui(f, &app, &mut tui, 0)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Page 1 of 10"));
        assert!(text.contains("3 selected"));
        assert!(text.contains("1–10 of 100"));
        assert!(text.contains("Select Rows"));
    }

    #[test]
    fn test_hit_test_row() {
        let area = Rect::new(0, 0, 80, 24);
        // title 1 row, table starts at y=1: border y=1, header y=2, first row y=3
        assert_eq!(hit_test_row(0, area, 0, 10), None);
        assert_eq!(hit_test_row(2, area, 0, 10), None);
        assert_eq!(hit_test_row(3, area, 0, 10), Some(0));
        assert_eq!(hit_test_row(5, area, 4, 10), Some(6));
        assert_eq!(hit_test_row(20, area, 0, 10), None);
    }
}
