//! Per-location aggregation for the "All Locations" view.

use std::collections::HashMap;

use crate::model::{Column, Row};

use super::{GridRow, RowKey};

/// Branch label of aggregated rows.
pub const TOTAL_BRANCH: &str = "Total";

/// Groups rows by location, in first-occurrence order.
///
/// Each group becomes one row: text fields come from the group's first
/// record, `branch` is [`TOTAL_BRANCH`], and every summed column holds the
/// group total.
pub fn aggregate_by_location(rows: &[Row]) -> Vec<GridRow> {
    let mut groups: Vec<GridRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let pos = *index.entry(row.record.location.as_str()).or_insert_with(|| {
            let mut seed = row.record.clone();
            seed.branch = TOTAL_BRANCH.to_string();
            for column in Column::METRICS {
                if let Some(slot) = seed.metric_mut(column) {
                    *slot = 0.0;
                }
            }
            groups.push(GridRow {
                key: RowKey::Location(row.record.location.clone()),
                record: seed,
            });
            groups.len() - 1
        });

        let target = &mut groups[pos].record;
        for column in Column::METRICS {
            if let (Some(slot), Some(v)) = (target.metric_mut(column), row.record.metric(column)) {
                *slot += v;
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Collection, test_record as record};

    #[test]
    fn one_row_per_location_with_sums() {
        let c = Collection::from_records(vec![
            record("B", "b1", 10.0),
            record("A", "a1", 100.0),
            record("B", "b2", 20.0),
            record("A", "a2", 200.0),
            record("C", "c1", 5.0),
        ]);
        let rows = aggregate_by_location(c.rows());

        let locations: Vec<&str> = rows.iter().map(|r| r.record.location.as_str()).collect();
        assert_eq!(locations, vec!["B", "A", "C"]);
        assert!(rows.iter().all(|r| r.record.branch == TOTAL_BRANCH));

        let a = &rows[1].record;
        assert_eq!(a.potential_revenue, 300.0);
        assert_eq!(a.annualized_competitor, 150.0);
        assert_eq!(a.processing_volume, 20.0);
        assert_eq!(a.merchant, 2.0);
        assert_eq!(a.annualized_market_share, 0.5);
        assert_eq!(a.commercial_ddas, 4.0);
        assert_eq!(rows[1].key, RowKey::Location("A".into()));
    }

    #[test]
    fn group_count_matches_distinct_locations() {
        let records: Vec<_> = (0..40)
            .map(|i| record(&format!("L{}", i % 7), &format!("b{i}"), i as f64))
            .collect();
        let c = Collection::from_records(records);
        let rows = aggregate_by_location(c.rows());
        assert_eq!(rows.len(), 7);

        for row in &rows {
            let expected: f64 = c
                .rows()
                .iter()
                .filter(|r| r.record.location == row.record.location)
                .map(|r| r.record.potential_revenue)
                .sum();
            assert_eq!(row.record.potential_revenue, expected);
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(aggregate_by_location(&[]).is_empty());
    }
}
