//! Shared formatting helpers for grid cells.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.
//! The per-column choice between them is made by [`CellFormat`].

use crate::model::{CellFormat, CellValue, Column, Record};

/// Format a monetary amount with a magnitude suffix.
///
/// `2500000` → `"$2.50M"`, `1500` → `"$1.50K"`, `999` → `"$999"`.
/// Values below one thousand are printed raw, without decimal normalization.
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format!("${}", format_number(value))
    }
}

/// Format a plain number: integers without a decimal point, others in
/// shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    value.to_string()
}

/// Format with exactly two decimals.
pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats a numeric value according to `format`.
pub fn format_value(value: f64, format: CellFormat) -> String {
    match format {
        CellFormat::Currency => format_currency(value),
        CellFormat::Fixed2 => format_fixed2(value),
        CellFormat::Number | CellFormat::Text => format_number(value),
    }
}

/// Renders one cell of `record`.
pub fn format_cell(record: &Record, column: Column) -> String {
    match record.value(column) {
        CellValue::Text(s) => s.to_string(),
        CellValue::Number(v) => format_value(v, column.format()),
    }
}
