//! Source fetcher: one GET per call, no retries, no caching.

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async HTTP client for the raw CSV feeds.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct Fetcher {
  client: Client,
}

impl Fetcher {
  /// Build a fetcher whose requests give up after `timeout`.
  pub fn new(timeout: Duration) -> Result<Self, FetchError> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(FetchError::Client)?;
    Ok(Self { client })
  }

  /// Fetch `url` and return the response body as text.
  pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
    tracing::info!(url, "fetching");

    let resp = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| classify(url, e))?;

    let status = resp.status();
    if !status.is_success() {
      tracing::error!(url, %status, "HTTP error fetching feed");
      return Err(FetchError::Http { status, url: url.to_owned() });
    }

    resp.text().await.map_err(|e| classify(url, e))
  }
}

fn classify(url: &str, e: reqwest::Error) -> FetchError {
  if e.is_timeout() {
    tracing::error!(url, "request timed out");
    FetchError::Timeout { url: url.to_owned() }
  } else {
    tracing::error!(url, error = %e, "network error fetching feed");
    FetchError::Network { url: url.to_owned(), source: e }
  }
}
