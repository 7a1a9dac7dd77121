//! Grid columns in display order.

/// Whether a column holds text or a summed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
}

/// How a column's cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// Raw text.
    Text,
    /// `$X.XXM` / `$X.XXK` / `$raw`.
    Currency,
    /// Plain number, integers without a decimal point.
    Number,
    /// Two decimals.
    Fixed2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Location,
    Branch,
    PotentialRevenue,
    AnnualizedCompetitor,
    ProcessingVolume,
    Merchant,
    AnnualizedMarketShare,
    CommercialDdas,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Location,
        Column::Branch,
        Column::PotentialRevenue,
        Column::AnnualizedCompetitor,
        Column::ProcessingVolume,
        Column::Merchant,
        Column::AnnualizedMarketShare,
        Column::CommercialDdas,
    ];

    /// The six summed columns.
    pub const METRICS: [Column; 6] = [
        Column::PotentialRevenue,
        Column::AnnualizedCompetitor,
        Column::ProcessingVolume,
        Column::Merchant,
        Column::AnnualizedMarketShare,
        Column::CommercialDdas,
    ];

    /// Header label, identical to the JSON key.
    pub fn label(self) -> &'static str {
        match self {
            Column::Location => "Location",
            Column::Branch => "Branch",
            Column::PotentialRevenue => "Potential Revenue",
            Column::AnnualizedCompetitor => "Annualized Competitor",
            Column::ProcessingVolume => "Processing Volume",
            Column::Merchant => "Merchant",
            Column::AnnualizedMarketShare => "Annualized Market Share",
            Column::CommercialDdas => "Commercial DDA's",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::Location | Column::Branch => ColumnKind::Text,
            _ => ColumnKind::Numeric,
        }
    }

    pub fn format(self) -> CellFormat {
        match self {
            Column::Location | Column::Branch => CellFormat::Text,
            Column::PotentialRevenue | Column::AnnualizedCompetitor => CellFormat::Currency,
            Column::ProcessingVolume | Column::Merchant | Column::CommercialDdas => {
                CellFormat::Number
            }
            Column::AnnualizedMarketShare => CellFormat::Fixed2,
        }
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&c| c == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_display_order() {
        for (i, col) in Column::ALL.iter().enumerate() {
            assert_eq!(col.index(), i);
            assert_eq!(Column::from_index(i), Some(*col));
        }
        assert_eq!(Column::from_index(8), None);
    }

    #[test]
    fn metrics_are_all_numeric() {
        assert!(
            Column::METRICS
                .iter()
                .all(|c| c.kind() == ColumnKind::Numeric)
        );
        assert_eq!(Column::Branch.kind(), ColumnKind::Text);
    }
}
