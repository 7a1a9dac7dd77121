//! Application state for the grid TUI.

use std::num::NonZeroUsize;

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use tracing::{info, warn};

use crate::model::{Collection, Column};
use crate::pipeline::{
    Filter, GridRow, Pipeline, RowKey, ViewState, clamp_page, filter_options, parse_page_size,
    total_pages,
};
use crate::source::{LoadOutcome, LoadState};
use crate::view::{GridViewModel, build_grid_view};

/// Keyboard input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Filter selector is open.
    FilterPicker,
    /// Page-size text input is open.
    PageSize,
}

/// Modal popup shown over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    Help {
        scroll: usize,
    },
    QuitConfirm,
}

/// Geometry of the last drawn grid, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    pub header: Rect,
    pub body: Rect,
    /// `(x, width)` of each data column, in [`Column::ALL`] order.
    pub columns: Vec<(u16, u16)>,
    /// Page-window index of the first visible body row.
    pub offset: usize,
}

impl GridLayout {
    pub fn column_at(&self, x: u16) -> Option<Column> {
        self.columns
            .iter()
            .position(|&(start, width)| x >= start && x < start.saturating_add(width))
            .and_then(Column::from_index)
    }

    pub fn in_header(&self, x: u16, y: u16) -> bool {
        contains(self.header, x, y)
    }

    /// Page-window index of the body row at `y`.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        contains(self.body, x, y).then(|| (y - self.body.y) as usize + self.offset)
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

/// Complete TUI state: the canonical collection, the view controls and the
/// transient interaction state around them.
#[derive(Debug)]
pub struct AppState {
    pub collection: Collection,
    pub view: ViewState,
    pipeline: Pipeline,
    pub load: LoadState,
    /// URL or path the records come from.
    pub source_label: String,
    pub loaded_at: Option<DateTime<Local>>,

    /// Selected row within the current page window.
    pub selected: usize,
    pub ratatui_state: TableState,

    pub input_mode: InputMode,
    pub picker_options: Vec<Filter>,
    pub picker_cursor: usize,
    pub page_size_input: String,
    pub popup: PopupState,
    pub status_message: Option<String>,
    pub layout: GridLayout,
}

impl AppState {
    pub fn new(source_label: impl Into<String>, page_size: NonZeroUsize) -> Self {
        Self {
            collection: Collection::new(),
            view: ViewState::new(page_size),
            pipeline: Pipeline::new(),
            load: LoadState::Loading,
            source_label: source_label.into(),
            loaded_at: None,
            selected: 0,
            ratatui_state: TableState::default(),
            input_mode: InputMode::Normal,
            picker_options: Vec::new(),
            picker_cursor: 0,
            page_size_input: String::new(),
            popup: PopupState::None,
            status_message: None,
            layout: GridLayout::default(),
        }
    }

    /// Stores the fetch result. Records replace the collection; a failure is
    /// kept for the error panel.
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        match outcome.result {
            Ok(records) => {
                info!(count = records.len(), elapsed = ?outcome.elapsed, "records loaded");
                self.collection.replace(records);
                self.load = LoadState::Loaded {
                    count: self.collection.len(),
                };
                self.loaded_at = Some(Local::now());
                self.selected = 0;
                self.clamp_view();
            }
            Err(e) => {
                self.load = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.load, LoadState::Loaded { .. })
    }

    /// Length of the filtered, sorted sequence.
    pub fn filtered_len(&mut self) -> usize {
        self.pipeline.rows(&self.collection, &self.view).len()
    }

    pub fn total_pages(&mut self) -> usize {
        let len = self.filtered_len();
        total_pages(len, self.view.page_size)
    }

    /// Builds the view model for the current page.
    pub fn grid_view(&mut self) -> GridViewModel<RowKey> {
        self.clamp_view();
        let total_rows = self.filtered_len();
        let totals = self.pipeline.totals(&self.collection, &self.view);
        let page = self.pipeline.page(&self.collection, &self.view);
        build_grid_view(&page, total_rows, &totals, &self.view)
    }

    fn page_rows(&mut self) -> &[GridRow] {
        self.pipeline.page(&self.collection, &self.view).rows
    }

    pub fn selected_row(&mut self) -> Option<GridRow> {
        let idx = self.selected;
        self.page_rows().get(idx).cloned()
    }

    /// Keeps the page inside `[1, max(1, total_pages)]` and the selection
    /// inside the page window.
    fn clamp_view(&mut self) {
        let pages = self.total_pages();
        self.view.page = clamp_page(self.view.page, pages);
        let len = self.page_rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
        self.ratatui_state
            .select(if len == 0 { None } else { Some(self.selected) });
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.clamp_view();
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.clamp_view();
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.clamp_view();
    }

    pub fn end(&mut self) {
        self.selected = usize::MAX;
        self.clamp_view();
    }

    pub fn select_row(&mut self, idx: usize) {
        self.selected = idx;
        self.clamp_view();
    }

    pub fn click_header(&mut self, column: Column) {
        self.view.click_header(column);
        self.clamp_view();
    }

    pub fn next_page(&mut self) {
        let pages = self.total_pages();
        if self.view.next_page(pages) {
            self.selected = 0;
            self.clamp_view();
        }
    }

    pub fn prev_page(&mut self) {
        if self.view.prev_page() {
            self.selected = 0;
            self.clamp_view();
        }
    }

    pub fn apply_filter(&mut self, filter: Filter) {
        self.view.set_filter(filter);
        self.selected = 0;
        self.clamp_view();
    }

    pub fn open_filter_picker(&mut self) {
        self.picker_options = filter_options(self.collection.rows());
        self.picker_cursor = self
            .picker_options
            .iter()
            .position(|f| *f == self.view.filter)
            .unwrap_or(0);
        self.input_mode = InputMode::FilterPicker;
    }

    pub fn picker_up(&mut self) {
        self.picker_cursor = self.picker_cursor.saturating_sub(1);
    }

    pub fn picker_down(&mut self) {
        if self.picker_cursor + 1 < self.picker_options.len() {
            self.picker_cursor += 1;
        }
    }

    /// Applies the highlighted filter option and closes the selector.
    pub fn confirm_picker(&mut self) {
        if let Some(filter) = self.picker_options.get(self.picker_cursor).cloned() {
            self.apply_filter(filter);
        }
        self.close_input();
    }

    pub fn open_page_size_input(&mut self) {
        self.page_size_input = self.view.page_size.to_string();
        self.input_mode = InputMode::PageSize;
    }

    /// Parses the page-size input. Invalid input keeps the current size.
    pub fn commit_page_size(&mut self) {
        match parse_page_size(&self.page_size_input) {
            Ok(size) => {
                self.view.set_page_size(size);
                self.selected = 0;
                self.clamp_view();
                self.status_message = Some(format!("Page size set to {size}"));
            }
            Err(e) => {
                warn!(input = %self.page_size_input, "rejected page size: {e}");
                self.status_message = Some(format!("{e}; keeping {}", self.view.page_size));
            }
        }
        self.close_input();
    }

    pub fn close_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.picker_options.clear();
        self.picker_cursor = 0;
        self.page_size_input.clear();
    }

    /// Deletes the selected row from the collection. An aggregated row
    /// deletes every record of its location.
    pub fn delete_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let message = match &row.key {
            RowKey::Record(id) => match self.collection.remove(*id) {
                Some(record) => format!("Deleted {} / {}", record.location, record.branch),
                None => format!("Record {id} no longer exists"),
            },
            RowKey::Location(location) => {
                let removed = self.collection.remove_location(location);
                format!("Deleted {removed} records of {location}")
            }
        };
        info!(key = ?row.key, remaining = self.collection.len(), "{message}");
        self.status_message = Some(message);
        self.clamp_view();
    }

    /// Filters the grid to the selected row's location.
    pub fn drill_down(&mut self) {
        if let Some(row) = self.selected_row() {
            let location = row.record.location;
            self.status_message = Some(format!("Filtered to {location}"));
            self.apply_filter(Filter::Value(location));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use super::*;
    use crate::model::{Record, test_record as record};
    use crate::source::SourceError;

    pub(crate) fn loaded(records: Vec<Record>, page_size: usize) -> AppState {
        let mut state = AppState::new("test", NonZeroUsize::new(page_size).unwrap());
        state.apply_outcome(LoadOutcome {
            result: Ok(records),
            elapsed: Duration::ZERO,
        });
        state
    }

    fn branches(state: &mut AppState) -> Vec<String> {
        state
            .page_rows()
            .iter()
            .map(|r| r.record.branch.clone())
            .collect()
    }

    #[test]
    fn failed_load_keeps_error() {
        let mut state = AppState::new("test", NonZeroUsize::new(5).unwrap());
        state.apply_outcome(LoadOutcome {
            result: Err(SourceError::Status {
                status: 503,
                url: "http://x".into(),
            }),
            elapsed: Duration::ZERO,
        });
        assert!(matches!(&state.load, LoadState::Failed(msg) if msg.contains("503")));
        assert!(state.collection.is_empty());
    }

    #[test]
    fn delete_removes_the_selected_record_under_filter_sort_and_paging() {
        let mut state = loaded(
            vec![
                record("A", "a1", 100.0),
                record("B", "b1", 50.0),
                record("A", "a2", 200.0),
                record("A", "a3", 300.0),
            ],
            2,
        );
        state.apply_filter(Filter::Value("A".into()));
        state.click_header(Column::PotentialRevenue);
        state.click_header(Column::PotentialRevenue);
        state.next_page();
        assert_eq!(branches(&mut state), vec!["a1"]);

        state.delete_selected();
        assert_eq!(state.collection.len(), 3);
        assert!(state.collection.rows().iter().all(|r| r.record.branch != "a1"));
        // Page 2 vanished, so the view falls back to page 1.
        assert_eq!(state.view.page, 1);
        assert_eq!(branches(&mut state), vec!["a3", "a2"]);
    }

    #[test]
    fn deleting_an_aggregate_removes_its_location() {
        let mut state = loaded(
            vec![
                record("A", "a1", 1.0),
                record("B", "b1", 2.0),
                record("A", "a2", 3.0),
            ],
            5,
        );
        state.apply_filter(Filter::AllLocations);
        state.delete_selected();
        assert_eq!(state.collection.len(), 1);
        assert_eq!(state.collection.rows()[0].record.location, "B");
        assert_eq!(
            state.status_message.as_deref(),
            Some("Deleted 2 records of A")
        );
    }

    #[test]
    fn drill_down_filters_to_selected_location() {
        let mut state = loaded(
            vec![
                record("A", "a1", 1.0),
                record("B", "b1", 2.0),
                record("B", "b2", 3.0),
            ],
            1,
        );
        state.apply_filter(Filter::AllLocations);
        state.next_page();
        state.drill_down();
        assert_eq!(state.view.filter, Filter::Value("B".into()));
        assert_eq!(state.view.page, 1);
        assert_eq!(state.filtered_len(), 2);
    }

    #[test]
    fn invalid_page_size_keeps_current() {
        let mut state = loaded(vec![record("A", "a1", 1.0)], 5);
        state.open_page_size_input();
        state.page_size_input = "abc".into();
        state.commit_page_size();
        assert_eq!(state.view.page_size.get(), 5);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.status_message.is_some());

        state.open_page_size_input();
        state.page_size_input = "12abc".into();
        state.commit_page_size();
        assert_eq!(state.view.page_size.get(), 12);
    }

    #[test]
    fn selection_stays_inside_page() {
        let mut state = loaded(
            vec![
                record("A", "a1", 1.0),
                record("A", "a2", 2.0),
                record("A", "a3", 3.0),
            ],
            2,
        );
        state.end();
        assert_eq!(state.selected, 1);
        state.next_page();
        assert_eq!(state.selected, 0);
        state.select_down();
        assert_eq!(state.selected, 0);
        assert_eq!(state.ratatui_state.selected(), Some(0));
    }

    #[test]
    fn picker_starts_on_active_filter() {
        let mut state = loaded(vec![record("A", "a1", 1.0), record("B", "b1", 2.0)], 5);
        state.apply_filter(Filter::Value("B".into()));
        state.open_filter_picker();
        assert_eq!(state.picker_options[state.picker_cursor], Filter::Value("B".into()));
        state.picker_up();
        state.confirm_picker();
        assert_eq!(state.view.filter, Filter::Value("A".into()));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn layout_hit_testing() {
        let layout = GridLayout {
            header: Rect::new(1, 1, 100, 1),
            body: Rect::new(1, 3, 100, 5),
            columns: vec![(1, 14), (16, 14)],
            offset: 0,
        };
        assert_eq!(layout.column_at(5), Some(Column::Location));
        assert_eq!(layout.column_at(16), Some(Column::Branch));
        assert_eq!(layout.column_at(15), None);
        assert!(layout.in_header(10, 1));
        assert_eq!(layout.row_at(10, 4), Some(1));
        assert_eq!(layout.row_at(10, 8), None);
    }
}
