//! Totals row over the filtered sequence.

use crate::model::Column;

use super::GridRow;

/// Sums of the six summed columns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    sums: [f64; Column::METRICS.len()],
}

impl Totals {
    /// Sums every summed column over `rows`.
    pub fn over(rows: &[GridRow]) -> Self {
        let mut sums = [0.0; Column::METRICS.len()];
        for row in rows {
            for (sum, column) in sums.iter_mut().zip(Column::METRICS) {
                *sum += row.record.metric(column).unwrap_or(0.0);
            }
        }
        Self { sums }
    }

    /// Total for `column`, `None` for text columns.
    pub fn get(&self, column: Column) -> Option<f64> {
        Column::METRICS
            .iter()
            .position(|&c| c == column)
            .map(|i| self.sums[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Collection, test_record as record};
    use crate::pipeline::filter::{Filter, apply_filter};

    #[test]
    fn sums_every_metric() {
        let c = Collection::from_records(vec![record("A", "a", 100.0), record("B", "b", 300.0)]);
        let totals = Totals::over(&apply_filter(c.rows(), &Filter::None));
        assert_eq!(totals.get(Column::PotentialRevenue), Some(400.0));
        assert_eq!(totals.get(Column::AnnualizedCompetitor), Some(200.0));
        assert_eq!(totals.get(Column::ProcessingVolume), Some(20.0));
        assert_eq!(totals.get(Column::Merchant), Some(2.0));
        assert_eq!(totals.get(Column::AnnualizedMarketShare), Some(0.5));
        assert_eq!(totals.get(Column::CommercialDdas), Some(4.0));
        assert_eq!(totals.get(Column::Location), None);
    }

    #[test]
    fn empty_rows_total_zero() {
        assert_eq!(Totals::over(&[]).get(Column::Merchant), Some(0.0));
    }
}
