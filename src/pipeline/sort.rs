//! Column sorting with header-click toggle semantics.

use std::cmp::Ordering;

use crate::model::{CellValue, Column};

use super::GridRow;

/// Sort key types for grid columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Float(f64),
    String(&'a str),
}

impl PartialOrd for SortKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => Some(locale_cmp(a, b)),
            _ => None,
        }
    }
}

impl<'a> From<CellValue<'a>> for SortKey<'a> {
    fn from(value: CellValue<'a>) -> Self {
        match value {
            CellValue::Text(s) => SortKey::String(s),
            CellValue::Number(v) => SortKey::Float(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort: a column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort {
    pub column: Column,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Sort after clicking `clicked`'s header.
    ///
    /// The same column while ascending flips to descending. Any other state
    /// (another column, or already descending) sorts `clicked` ascending.
    pub fn after_click(current: Option<Sort>, clicked: Column) -> Sort {
        match current {
            Some(s) if s.column == clicked && s.direction == SortDirection::Ascending => {
                Sort::descending(clicked)
            }
            _ => Sort::ascending(clicked),
        }
    }

    fn compare(&self, a: &GridRow, b: &GridRow) -> Ordering {
        let key_a = SortKey::from(a.record.value(self.column));
        let key_b = SortKey::from(b.record.value(self.column));
        let cmp = key_a.partial_cmp(&key_b).unwrap_or(Ordering::Equal);
        match self.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    }
}

/// Stable sort of `rows`. `None` keeps the incoming order.
pub fn sort_rows(rows: &mut [GridRow], sort: Option<Sort>) {
    if let Some(sort) = sort {
        rows.sort_by(|a, b| sort.compare(a, b));
    }
}

/// Locale-style string comparison: case-insensitive first, then lowercase
/// before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or(Ordering::Equal)
    })
}
