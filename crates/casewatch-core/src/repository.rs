//! Write-side helpers over any [`CaseStore`].
//!
//! The store owns per-date atomicity; this module turns merged records into
//! sparse patches and drives them through the store in order.

use chrono::NaiveDate;

use crate::{
  record::{CasePatch, CaseRecord},
  store::CaseStore,
};

/// Create or sparse-patch the record for `date`.
pub async fn upsert<S: CaseStore>(
  store:       &S,
  date:        NaiveDate,
  covid_cases: Option<u32>,
  flu_cases:   Option<u32>,
) -> Result<CaseRecord, S::Error> {
  store.upsert(CasePatch { date, covid_cases, flu_cases }).await
}

/// Upsert every merged record in order and return how many were processed.
///
/// Stops at the first store error. Records already written stay written;
/// because each upsert is idempotent, re-running the whole batch is safe.
pub async fn apply<S: CaseStore>(
  store:   &S,
  records: &[CaseRecord],
) -> Result<usize, S::Error> {
  let mut count = 0;
  for record in records {
    store.upsert(CasePatch::from(*record)).await?;
    count += 1;
  }
  tracing::debug!(count, "applied merged records");
  Ok(count)
}
