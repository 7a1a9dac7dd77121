//! HTTP record source.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use super::{RecordSource, SourceError, parse_records};
use crate::model::Record;

/// Fetches the collection with a single `GET`.
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// Creates a source for `url`. `timeout` bounds the whole request;
    /// `None` keeps the client default.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            url: url.into(),
            client: builder.build()?,
        })
    }
}

impl RecordSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        debug!(url = %self.url, "GET");
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes()?;
        let records = parse_records(&body)?;
        info!(url = %self.url, count = records.len(), "records fetched");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
