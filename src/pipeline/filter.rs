//! Category filter: none, the "All Locations" sentinel, or a single value.

use std::collections::HashSet;
use std::fmt;

use crate::model::Row;

use super::aggregate::aggregate_by_location;
use super::{GridRow, RowKey};

/// Label of the sentinel filter that switches the grid to per-location totals.
pub const ALL_LOCATIONS: &str = "All Locations";

/// Label of the "no filter" choice in the selector.
pub const NO_FILTER_LABEL: &str = "Select a Filter";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Pass everything through.
    #[default]
    None,
    /// Aggregate by location.
    AllLocations,
    /// Match a location if any record has it, otherwise a branch.
    Value(String),
}

impl Filter {
    pub fn label(&self) -> &str {
        match self {
            Filter::None => NO_FILTER_LABEL,
            Filter::AllLocations => ALL_LOCATIONS,
            Filter::Value(v) => v,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Filter::None)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Applies `filter` to the canonical rows, keeping relative order.
pub fn apply_filter(rows: &[Row], filter: &Filter) -> Vec<GridRow> {
    match filter {
        Filter::None => rows.iter().map(GridRow::from_row).collect(),
        Filter::AllLocations => aggregate_by_location(rows),
        Filter::Value(value) => {
            let by_location = rows.iter().any(|r| r.record.location == *value);
            rows.iter()
                .filter(|r| {
                    if by_location {
                        r.record.location == *value
                    } else {
                        r.record.branch == *value
                    }
                })
                .map(GridRow::from_row)
                .collect()
        }
    }
}

/// Selector options: no filter, the sentinel, unique locations, unique branches.
///
/// Locations and branches are each deduplicated in first-occurrence order but
/// not against each other, so a name used for both shows up twice.
pub fn filter_options(rows: &[Row]) -> Vec<Filter> {
    let mut options = vec![Filter::None, Filter::AllLocations];
    options.extend(unique(rows.iter().map(|r| r.record.location.as_str())));
    options.extend(unique(rows.iter().map(|r| r.record.branch.as_str())));
    options
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Filter> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(|v| Filter::Value(v.to_string()))
        .collect()
}

impl GridRow {
    pub(crate) fn from_row(row: &Row) -> GridRow {
        GridRow {
            key: RowKey::Record(row.id),
            record: row.record.clone(),
        }
    }
}
