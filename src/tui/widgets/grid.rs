//! Data grid widget: header, totals row, page rows and pager.
//! Thin TUI wrapper over [`crate::view::grid::build_grid_view`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::model::{Column, ColumnKind};
use crate::tui::state::{AppState, GridLayout};
use crate::tui::style::Styles;
use crate::view::{PagerView, ViewCell, ViewRow};

const ACTION_HEADER: &str = "Action";
const ACTION_HINT: &str = "[d] delete";
const COLUMN_SPACING: u16 = 1;

/// Numbers are right-aligned, text left.
fn cells<Id>(row: &ViewRow<Id>) -> Vec<Cell<'static>> {
    row.cells
        .iter()
        .zip(Column::ALL)
        .map(|(c, column): (&ViewCell, Column)| {
            let span = match c.style {
                Some(class) => Span::styled(c.text.clone(), Styles::from_class(class)),
                None => Span::raw(c.text.clone()),
            };
            let alignment = match column.kind() {
                ColumnKind::Numeric => Alignment::Right,
                ColumnKind::Text => Alignment::Left,
            };
            Cell::from(Line::from(span).alignment(alignment))
        })
        .collect()
}

pub fn render_grid(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let vm = state.grid_view();

    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .style(Styles::default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Totals
        Constraint::Min(1),    // Page rows
        Constraint::Length(1), // Pager
    ])
    .split(inner);

    let mut constraints: Vec<Constraint> =
        vm.widths.iter().map(|&w| Constraint::Length(w)).collect();
    constraints.push(Constraint::Fill(1));

    // Header
    let mut header_cells: Vec<Cell> = vm
        .headers
        .iter()
        .map(|h| Cell::from(h.text()))
        .collect();
    header_cells.push(Cell::from(ACTION_HEADER));
    let header = Table::new(
        [Row::new(header_cells).style(Styles::table_header())],
        constraints.clone(),
    )
    .column_spacing(COLUMN_SPACING)
    .flex(Flex::Start);
    frame.render_widget(header, chunks[0]);

    // Totals
    let mut totals_cells = cells(&vm.totals);
    totals_cells.push(Cell::from(""));
    let totals = Table::new(
        [Row::new(totals_cells).style(Styles::from_class(vm.totals.style))],
        constraints.clone(),
    )
    .column_spacing(COLUMN_SPACING)
    .flex(Flex::Start);
    frame.render_widget(totals, chunks[1]);

    // Page rows
    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let mut row_cells = cells(vr);
            row_cells.push(Cell::from(Span::styled(ACTION_HINT, Styles::dim())));
            Row::new(row_cells).style(Styles::from_class(vr.style))
        })
        .collect();
    let body_area = chunks[2];
    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No records match the current filter", Styles::dim())),
            body_area,
        );
    } else {
        let table = Table::new(rows, constraints.clone())
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .row_highlight_style(Styles::selected());
        frame.render_stateful_widget(table, body_area, &mut state.ratatui_state);
    }

    frame.render_widget(Paragraph::new(pager_line(&vm.pager)), chunks[3]);

    state.layout = GridLayout {
        header: chunks[0],
        body: body_area,
        columns: column_spans(chunks[0], &constraints),
        offset: state.ratatui_state.offset(),
    };
}

/// `(x, width)` of each data column as the tables lay them out in `area`.
/// Narrow areas shrink the columns, so the spans come from the same solver.
fn column_spans(area: Rect, constraints: &[Constraint]) -> Vec<(u16, u16)> {
    Layout::horizontal(constraints.iter().copied())
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(area)
        .iter()
        .take(Column::ALL.len())
        .map(|r| (r.x, r.width))
        .collect()
}

fn pager_line(pager: &PagerView) -> Line<'static> {
    let enabled = |on: bool| if on { Styles::key_hint() } else { Styles::dim() };
    Line::from(vec![
        Span::styled(" ◀ Prev ", enabled(pager.prev_enabled)),
        Span::raw(format!(" {} ", pager.label())),
        Span::styled(" Next ▶ ", enabled(pager.next_enabled)),
        Span::styled(
            format!("   Rows per page: {}", pager.page_size),
            Styles::dim(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(widths: &[u16]) -> Vec<Constraint> {
        let mut c: Vec<Constraint> = widths.iter().map(|&w| Constraint::Length(w)).collect();
        c.push(Constraint::Fill(1));
        c
    }

    #[test]
    fn spans_follow_widths_and_spacing() {
        let widths = [14, 14, 19, 23, 19, 10, 25, 18];
        let spans = column_spans(Rect::new(1, 0, 200, 1), &constraints(&widths));
        assert_eq!(spans.len(), Column::ALL.len());
        assert_eq!(spans[0], (1, 14));
        assert_eq!(spans[1], (16, 14));
        assert_eq!(spans[2], (31, 19));
    }

    #[test]
    fn spans_shrink_in_narrow_area() {
        let widths = [14, 14, 19, 23, 19, 10, 25, 18];
        let area = Rect::new(1, 0, 98, 1);
        let spans = column_spans(area, &constraints(&widths));
        assert_eq!(spans.len(), Column::ALL.len());
        let right = area.x + area.width;
        for pair in spans.windows(2) {
            let (x, w) = pair[0];
            assert!(x + w < pair[1].0, "{spans:?}");
        }
        let (last_x, last_w) = spans[spans.len() - 1];
        assert!(last_x + last_w <= right, "{spans:?}");
        let drawn: u16 = spans.iter().map(|&(_, w)| w).sum();
        assert!(drawn < widths.iter().sum::<u16>());
    }
}
