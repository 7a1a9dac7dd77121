//! Local JSON file source for offline viewing.

use std::path::{Path, PathBuf};

use tracing::info;

use super::{RecordSource, SourceError, parse_records};
use crate::model::Record;

/// Reads the same payload the endpoint serves from a file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for FileSource {
    fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records = parse_records(&bytes)?;
        info!(path = %self.path.display(), count = records.len(), "records read");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
