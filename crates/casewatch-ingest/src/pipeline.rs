//! The ingestion run: fetch both feeds, parse, merge, upsert.
//!
//! Both feeds are fetched and parsed before anything is written, so a
//! transport or schema failure leaves the store untouched. Once writing
//! starts, a store failure stops the batch; rerunning it is always safe
//! because every upsert is idempotent.

use casewatch_core::{CaseRecord, merge::merge, repository, store::CaseStore};

use crate::{
  error::{Error, Result},
  fetch::Fetcher,
  parse::{COVID, FLU},
};

pub const BASE_URL: &str =
  "https://raw.githubusercontent.com/nychealth/respiratory-illness-data/main/data";

// ─── Sources ─────────────────────────────────────────────────────────────────

/// The two feed URLs, one per disease series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
  pub covid_url: String,
  pub flu_url:   String,
}

impl Default for Sources {
  fn default() -> Self {
    Self {
      covid_url: format!("{BASE_URL}/Case_data_COVID-19.csv"),
      flu_url:   format!("{BASE_URL}/Case_data_influenza.csv"),
    }
  }
}

// ─── Run ─────────────────────────────────────────────────────────────────────

/// Parse both raw feeds and outer-join them into one record per date.
pub fn merge_feeds(covid_raw: &str, flu_raw: &str) -> Result<Vec<CaseRecord>> {
  let covid = COVID.parse(covid_raw)?;
  let flu = FLU.parse(flu_raw)?;
  let merged = merge(&covid, &flu);
  tracing::info!(records = merged.len(), "merged series");
  Ok(merged)
}

/// Parse, merge and upsert already-fetched feeds. Returns the number of
/// merged records processed.
pub async fn ingest_feeds<S: CaseStore>(
  store:     &S,
  covid_raw: &str,
  flu_raw:   &str,
) -> Result<usize> {
  let merged = merge_feeds(covid_raw, flu_raw)?;
  let count = repository::apply(store, &merged)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  tracing::info!(count, "upserted records");
  Ok(count)
}

/// Fetch both feeds from `sources` and apply them to `store`.
pub async fn run_ingestion<S: CaseStore>(
  fetcher: &Fetcher,
  sources: &Sources,
  store:   &S,
) -> Result<usize> {
  let covid_raw = fetcher.fetch(&sources.covid_url).await?;
  let flu_raw = fetcher.fetch(&sources.flu_url).await?;
  ingest_feeds(store, &covid_raw, &flu_raw).await
}
