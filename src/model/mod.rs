//! Data model: typed records, grid columns, and the identified collection.

mod collection;
mod column;
mod record;

pub use collection::{Collection, RecordId, Row};
pub use column::{CellFormat, Column, ColumnKind};
pub use record::{CellValue, Record};

#[cfg(test)]
pub(crate) use record::record as test_record;
