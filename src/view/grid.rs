//! Grid view model.

use crate::fmt::{format_cell, format_value};
use crate::model::Column;
use crate::pipeline::{Page, RowKey, Totals, ViewState};
use crate::view::common::{GridViewModel, HeaderCell, PagerView, RowStyleClass, ViewCell, ViewRow};

const WIDTHS: &[u16] = &[14, 14, 19, 23, 19, 10, 25, 18];

/// Builds the grid for one page window.
///
/// `total_rows` is the length of the filtered sequence the page was cut from;
/// `totals` is computed over that same sequence.
pub fn build_grid_view(
    page: &Page<'_>,
    total_rows: usize,
    totals: &Totals,
    state: &ViewState,
) -> GridViewModel<RowKey> {
    let headers = Column::ALL
        .iter()
        .map(|&column| HeaderCell {
            label: column.label().to_string(),
            indicator: state
                .sort
                .filter(|s| s.column == column)
                .map(|s| s.direction.indicator()),
        })
        .collect();

    let totals_cells = Column::ALL
        .iter()
        .map(|&column| match (column, totals.get(column)) {
            (Column::Location, _) => ViewCell::plain("Total".to_string()),
            (_, Some(v)) => ViewCell::plain(format_value(v, column.format())),
            (_, None) => ViewCell::plain(String::new()),
        })
        .collect();

    let rows = page
        .rows
        .iter()
        .map(|row| {
            let style = match row.key {
                RowKey::Record(_) => RowStyleClass::Normal,
                RowKey::Location(_) => RowStyleClass::Aggregated,
            };
            let cells = Column::ALL
                .iter()
                .map(|&column| {
                    let text = format_cell(&row.record, column);
                    // "Total" in the Branch cell marks a per-location sum.
                    if style == RowStyleClass::Aggregated && column == Column::Branch {
                        ViewCell::styled(text, RowStyleClass::Totals)
                    } else {
                        ViewCell::plain(text)
                    }
                })
                .collect();
            ViewRow {
                id: row.key.clone(),
                cells,
                style,
            }
        })
        .collect();

    let title = if state.filter.is_active() {
        format!(" Branch Grid (filter: {}) [{} rows] ", state.filter, total_rows)
    } else {
        format!(" Branch Grid [{} rows] ", total_rows)
    };

    GridViewModel {
        title,
        headers,
        widths: WIDTHS.to_vec(),
        totals: ViewRow {
            id: (),
            cells: totals_cells,
            style: RowStyleClass::Totals,
        },
        rows,
        pager: PagerView {
            page: page.number,
            total_pages: page.total_pages,
            page_size: state.page_size.get(),
            prev_enabled: page.has_prev(),
            next_enabled: page.has_next(),
            total_rows,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::model::{Collection, test_record as record};
    use crate::pipeline::{Filter, Pipeline, Sort};

    fn view(collection: &Collection, state: &ViewState) -> GridViewModel<RowKey> {
        let mut pipeline = Pipeline::new();
        let total_rows = pipeline.rows(collection, state).len();
        let totals = pipeline.totals(collection, state);
        let page = pipeline.page(collection, state);
        build_grid_view(&page, total_rows, &totals, state)
    }

    #[test]
    fn renders_page_totals_and_pager() {
        let collection = Collection::from_records(vec![
            record("A", "a1", 100.0),
            record("A", "a2", 200.0),
            record("A", "a3", 300.0),
        ]);
        let mut state = ViewState::new(NonZeroUsize::new(2).unwrap());
        state.set_filter(Filter::Value("A".into()));
        state.sort = Some(Sort::descending(Column::PotentialRevenue));

        let vm = view(&collection, &state);
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].cells[2].text, "$300");
        assert_eq!(vm.totals.cells[0].text, "Total");
        assert_eq!(vm.totals.cells[2].text, "$600");
        assert_eq!(vm.totals.cells[1].text, "");
        assert_eq!(vm.headers[2].text(), "Potential Revenue▼");
        assert_eq!(vm.headers[0].text(), "Location");
        assert_eq!(vm.pager.label(), "Page 1 of 2");
        assert!(!vm.pager.prev_enabled);
        assert!(vm.pager.next_enabled);
        assert!(vm.title.contains("filter: A"));
    }

    #[test]
    fn aggregated_rows_are_styled() {
        let collection =
            Collection::from_records(vec![record("A", "a1", 1.0), record("B", "b1", 2.0)]);
        let mut state = ViewState::new(NonZeroUsize::new(5).unwrap());
        state.set_filter(Filter::AllLocations);

        let vm = view(&collection, &state);
        assert_eq!(vm.rows.len(), 2);
        assert!(vm.rows.iter().all(|r| r.style == RowStyleClass::Aggregated));
        assert_eq!(vm.rows[0].cells[1].text, "Total");
        assert_eq!(vm.rows[0].cells[1].style, Some(RowStyleClass::Totals));
        assert_eq!(vm.rows[0].cells[0].style, None);
        assert_eq!(vm.rows[1].id, RowKey::Location("B".into()));
    }

    #[test]
    fn empty_grid_has_no_pages() {
        let collection = Collection::new();
        let state = ViewState::new(NonZeroUsize::new(5).unwrap());
        let vm = view(&collection, &state);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.pager.total_pages, 0);
        assert!(!vm.pager.next_enabled);
        assert_eq!(vm.totals.cells[2].text, "$0");
    }
}
