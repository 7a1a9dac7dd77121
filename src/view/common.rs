//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a
//! specific rendering framework. The TUI maps them to ratatui styles.

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Synthetic per-location total (TUI: cyan).
    Aggregated,
    /// Totals row (TUI: bold).
    Totals,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by row identity type.
#[derive(Debug, Clone)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Header label with its sort indicator, if the column is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub indicator: Option<&'static str>,
}

impl HeaderCell {
    pub fn text(&self) -> String {
        match self.indicator {
            Some(ind) => format!("{}{}", self.label, ind),
            None => self.label.clone(),
        }
    }
}

/// Pager line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Rows in the filtered sequence.
    pub total_rows: usize,
}

impl PagerView {
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Complete grid ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct GridViewModel<Id> {
    pub title: String,
    pub headers: Vec<HeaderCell>,
    pub widths: Vec<u16>,
    pub totals: ViewRow<()>,
    pub rows: Vec<ViewRow<Id>>,
    pub pager: PagerView,
}
