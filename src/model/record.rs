//! Branch record as served by the data endpoint.

use serde::Deserialize;

use super::Column;

/// One row of input data.
///
/// Field names on the wire are the human-readable column labels, including
/// the apostrophe in `Commercial DDA's`. Unknown keys are ignored; a missing
/// or mistyped field fails deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "Potential Revenue")]
    pub potential_revenue: f64,
    #[serde(rename = "Annualized Competitor")]
    pub annualized_competitor: f64,
    #[serde(rename = "Processing Volume")]
    pub processing_volume: f64,
    #[serde(rename = "Merchant")]
    pub merchant: f64,
    #[serde(rename = "Annualized Market Share")]
    pub annualized_market_share: f64,
    #[serde(rename = "Commercial DDA's")]
    pub commercial_ddas: f64,
}

/// Borrowed cell content of a record for a given column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl Record {
    /// Returns the value stored under `column`.
    pub fn value(&self, column: Column) -> CellValue<'_> {
        match column {
            Column::Location => CellValue::Text(&self.location),
            Column::Branch => CellValue::Text(&self.branch),
            Column::PotentialRevenue => CellValue::Number(self.potential_revenue),
            Column::AnnualizedCompetitor => CellValue::Number(self.annualized_competitor),
            Column::ProcessingVolume => CellValue::Number(self.processing_volume),
            Column::Merchant => CellValue::Number(self.merchant),
            Column::AnnualizedMarketShare => CellValue::Number(self.annualized_market_share),
            Column::CommercialDdas => CellValue::Number(self.commercial_ddas),
        }
    }

    /// Numeric value of a summed column, `None` for text columns.
    pub fn metric(&self, column: Column) -> Option<f64> {
        match self.value(column) {
            CellValue::Number(v) => Some(v),
            CellValue::Text(_) => None,
        }
    }

    /// Mutable slot for a summed column, `None` for text columns.
    pub(crate) fn metric_mut(&mut self, column: Column) -> Option<&mut f64> {
        match column {
            Column::Location | Column::Branch => None,
            Column::PotentialRevenue => Some(&mut self.potential_revenue),
            Column::AnnualizedCompetitor => Some(&mut self.annualized_competitor),
            Column::ProcessingVolume => Some(&mut self.processing_volume),
            Column::Merchant => Some(&mut self.merchant),
            Column::AnnualizedMarketShare => Some(&mut self.annualized_market_share),
            Column::CommercialDdas => Some(&mut self.commercial_ddas),
        }
    }
}

#[cfg(test)]
pub(crate) fn record(location: &str, branch: &str, revenue: f64) -> Record {
    Record {
        location: location.to_string(),
        branch: branch.to_string(),
        potential_revenue: revenue,
        annualized_competitor: revenue / 2.0,
        processing_volume: 10.0,
        merchant: 1.0,
        annualized_market_share: 0.25,
        commercial_ddas: 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{
            "Location": "North",
            "Branch": "Main St",
            "Potential Revenue": 1500,
            "Annualized Competitor": 2500000.5,
            "Processing Volume": 42,
            "Merchant": 3,
            "Annualized Market Share": 0.125,
            "Commercial DDA's": 7,
            "Extra": "ignored"
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.location, "North");
        assert_eq!(r.branch, "Main St");
        assert_eq!(r.potential_revenue, 1500.0);
        assert_eq!(r.commercial_ddas, 7.0);
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"Location": "North", "Branch": "Main St"}"#;
        let err = serde_json::from_str::<Record>(json).unwrap_err();
        assert!(err.to_string().contains("Potential Revenue"));
    }

    #[test]
    fn string_metric_is_rejected() {
        let json = r#"{
            "Location": "North", "Branch": "B",
            "Potential Revenue": "1500",
            "Annualized Competitor": 1, "Processing Volume": 1, "Merchant": 1,
            "Annualized Market Share": 1, "Commercial DDA's": 1
        }"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn metric_is_none_for_text_columns() {
        let r = record("A", "B", 100.0);
        assert_eq!(r.metric(Column::Location), None);
        assert_eq!(r.metric(Column::PotentialRevenue), Some(100.0));
        assert_eq!(r.value(Column::Branch), CellValue::Text("B"));
    }
}
