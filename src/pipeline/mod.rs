//! Transformation pipeline: filter → aggregate → sort → paginate, plus totals.
//!
//! Each stage is a pure function over slices. [`Pipeline`] memoizes the
//! filtered and sorted stages keyed by their inputs so that paging or
//! redrawing does not redo work; the output always equals [`run`].

pub mod aggregate;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod totals;

use std::num::NonZeroUsize;

use tracing::debug;

use crate::model::{Collection, Column, Record, RecordId};

pub use aggregate::{TOTAL_BRANCH, aggregate_by_location};
pub use filter::{ALL_LOCATIONS, Filter, NO_FILTER_LABEL, apply_filter, filter_options};
pub use paginate::{Page, PageSizeError, clamp_page, paginate, parse_page_size, total_pages};
pub use sort::{Sort, SortDirection, SortKey, locale_cmp, sort_rows};
pub use totals::Totals;

/// Identity of a displayed row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// A loaded record.
    Record(RecordId),
    /// A synthetic per-location total.
    Location(String),
}

/// A row flowing through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub key: RowKey,
    pub record: Record,
}

/// UI-driven inputs of the pipeline. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter: Filter,
    pub sort: Option<Sort>,
    /// 1-based.
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl ViewState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            filter: Filter::None,
            sort: None,
            page: 1,
            page_size,
        }
    }

    /// Selects a filter and returns to the first page.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Applies a header click on `column`.
    pub fn click_header(&mut self, column: Column) {
        self.sort = Some(Sort::after_click(self.sort, column));
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, size: NonZeroUsize) {
        self.page_size = size;
        self.page = 1;
    }

    /// Moves forward one page unless already on the last.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one page unless already on the first.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

/// Runs filter, aggregation and sort from scratch.
pub fn run(collection: &Collection, state: &ViewState) -> Vec<GridRow> {
    let mut rows = apply_filter(collection.rows(), &state.filter);
    sort_rows(&mut rows, state.sort);
    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterKey {
    generation: u64,
    filter: Filter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SortedKey {
    filtered: FilterKey,
    sort: Option<Sort>,
}

#[derive(Debug)]
struct Stage<K> {
    key: K,
    rows: Vec<GridRow>,
}

/// Memoized pipeline stages.
#[derive(Debug, Default)]
pub struct Pipeline {
    filtered: Option<Stage<FilterKey>>,
    sorted: Option<Stage<SortedKey>>,
    totals: Option<(FilterKey, Totals)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filtered and sorted rows for `state`, recomputing only stale stages.
    pub fn rows(&mut self, collection: &Collection, state: &ViewState) -> &[GridRow] {
        let filter_key = self.ensure_filtered(collection, state);
        let sorted_key = SortedKey {
            filtered: filter_key,
            sort: state.sort,
        };

        let stale = self.sorted.as_ref().is_none_or(|s| s.key != sorted_key);
        if stale {
            let mut rows = self
                .filtered
                .as_ref()
                .map(|s| s.rows.clone())
                .unwrap_or_default();
            sort_rows(&mut rows, state.sort);
            debug!(rows = rows.len(), sort = ?state.sort, "sort stage recomputed");
            self.sorted = Some(Stage {
                key: sorted_key,
                rows,
            });
        }

        self.sorted.as_ref().map(|s| s.rows.as_slice()).unwrap_or(&[])
    }

    /// Totals over the filtered rows.
    pub fn totals(&mut self, collection: &Collection, state: &ViewState) -> Totals {
        let filter_key = self.ensure_filtered(collection, state);
        if let Some((key, totals)) = &self.totals
            && *key == filter_key
        {
            return *totals;
        }
        let totals = self
            .filtered
            .as_ref()
            .map(|s| Totals::over(&s.rows))
            .unwrap_or_default();
        self.totals = Some((filter_key, totals));
        totals
    }

    /// Current page window for `state`.
    pub fn page(&mut self, collection: &Collection, state: &ViewState) -> Page<'_> {
        let size = state.page_size;
        let page = state.page;
        paginate(self.rows(collection, state), page, size)
    }

    fn ensure_filtered(&mut self, collection: &Collection, state: &ViewState) -> FilterKey {
        let key = FilterKey {
            generation: collection.generation(),
            filter: state.filter.clone(),
        };
        let stale = self.filtered.as_ref().is_none_or(|s| s.key != key);
        if stale {
            let rows = apply_filter(collection.rows(), &state.filter);
            debug!(
                rows = rows.len(),
                filter = %state.filter,
                generation = key.generation,
                "filter stage recomputed"
            );
            self.filtered = Some(Stage {
                key: key.clone(),
                rows,
            });
            self.sorted = None;
            self.totals = None;
        }
        key
    }
}
