//! Sheet source fetcher
//!
//! Pulls the published CSV export of the maintenance sheet over HTTP and
//! decodes it into raw string rows. This is the only operation in the core
//! that touches the network; callers treat every failure here as non-fatal
//! and degrade to the seed source.

use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("swaplog/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Sheet fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Sheet host returned a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Response body is not decodable CSV
    #[error("CSV decode error: {0}")]
    Decode(String),
}

/// HTTP client for one published sheet export
pub struct SheetSource {
    url: String,
    http_client: reqwest::Client,
}

impl SheetSource {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }

    /// The export URL this source reads from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the export and decode it into raw rows, header row skipped
    pub async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching sheet export");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let rows = decode_csv(&body)?;
        tracing::info!(url = %self.url, rows = rows.len(), "Fetched sheet export");
        Ok(rows)
    }
}

/// Decode a CSV body into raw string rows
///
/// The header row is skipped: columns are positional (see
/// [`SheetLayout`](crate::parse::SheetLayout)),
/// so the header carries no information the parser uses. Records may be
/// ragged; width checks happen downstream against the layout.
pub fn decode_csv(body: &str) -> Result<Vec<Vec<String>>, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FetchError::Decode(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
