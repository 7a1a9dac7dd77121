//! Validated runtime configuration.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::source::{FileSource, HttpSource, RecordSource, SourceError};

/// Endpoint the grid loads from when none is given.
pub const DEFAULT_URL: &str = "http://localhost:5000/api/data";

/// Rows per page at start-up.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Where records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Http {
        url: String,
        timeout: Option<Duration>,
    },
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: SourceConfig,
    pub page_size: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::Http {
                url: DEFAULT_URL.to_string(),
                timeout: None,
            },
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Builds the configured record source.
    pub fn build_source(&self) -> Result<Arc<dyn RecordSource>, SourceError> {
        Ok(match &self.source {
            SourceConfig::Http { url, timeout } => Arc::new(HttpSource::new(url, *timeout)?),
            SourceConfig::File(path) => Arc::new(FileSource::new(path)),
        })
    }
}
