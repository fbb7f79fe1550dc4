//! Error types for the ingestion pipeline.

use thiserror::Error;

/// Transport failures from [`Fetcher`](crate::fetch::Fetcher). Each kind is
/// kept distinct so callers can tell them apart.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("request to {url} timed out")]
  Timeout { url: String },

  #[error("HTTP {status} fetching {url}")]
  Http { status: reqwest::StatusCode, url: String },

  #[error("network error fetching {url}: {source}")]
  Network {
    url:    String,
    #[source]
    source: reqwest::Error,
  },

  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Fetch(#[from] FetchError),

  /// The feed no longer has the columns we expect; usually an upstream
  /// format change.
  #[error("unexpected {series} CSV columns: expected {expected:?}, found {found:?}")]
  Schema {
    series:   String,
    expected: String,
    found:    Vec<String>,
  },

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
