//! Record sources: where the grid's collection comes from.
//!
//! This module defines the `RecordSource` trait so the TUI can load records
//! from different places (the HTTP endpoint, or a local JSON file) through a
//! single interface, and a [`Loader`] that runs the one fetch in the
//! background.

mod file;
mod http;
mod loader;

pub use file::FileSource;
pub use http::HttpSource;
pub use loader::{LoadOutcome, Loader};

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Record;

/// Errors that can occur while fetching records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (connection refused, timeout, TLS...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },
    /// The payload is not a JSON array of records.
    #[error("invalid payload: {0}")]
    Payload(String),
    /// One element of the array does not match the record schema.
    #[error("record {index} does not match the schema: {message}")]
    Schema { index: usize, message: String },
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The fetch worker stopped without reporting a result.
    #[error("fetch worker exited without a result")]
    Interrupted,
}

/// Abstraction for record sources.
///
/// The trait is object-safe and designed to be shared with the fetch thread
/// as `Arc<dyn RecordSource>`.
pub trait RecordSource: Send + Sync {
    /// Fetches the full collection. Called once per load.
    fn fetch(&self) -> Result<Vec<Record>, SourceError>;

    /// Short human-readable description (URL or path) for the header bar.
    fn describe(&self) -> String;
}

/// Load status of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded {
        count: usize,
    },
    Failed(String),
}

/// Parses a payload into records, validating every element.
///
/// Fails on the first element that does not match the schema, naming its
/// index.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>, SourceError> {
    let values: Vec<serde_json::Value> = serde_json::from_slice(bytes)
        .map_err(|e| SourceError::Payload(format!("expected a JSON array of records: {e}")))?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<Record>(value).map_err(|e| SourceError::Schema {
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) const SAMPLE_PAYLOAD: &str = r#"[
    {"Location": "North", "Branch": "Main", "Potential Revenue": 1500,
     "Annualized Competitor": 2500000, "Processing Volume": 40, "Merchant": 3,
     "Annualized Market Share": 0.5, "Commercial DDA's": 7},
    {"Location": "South", "Branch": "Harbor", "Potential Revenue": 999,
     "Annualized Competitor": 10, "Processing Volume": 2, "Merchant": 1,
     "Annualized Market Share": 0.25, "Commercial DDA's": 1}
]"#;
