//! In-memory [`CaseStore`] backed by a `BTreeMap`.
//!
//! Used by tests across the workspace and anywhere a throwaway store is
//! enough. Each operation holds the lock for its full duration, which gives
//! the per-date atomicity the trait requires.

use std::{
  collections::BTreeMap,
  convert::Infallible,
  sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::NaiveDate;

use crate::{
  record::{CasePatch, CaseRecord},
  store::{CaseStore, DateRange},
};

#[derive(Debug, Default)]
pub struct MemoryStore {
  records: Mutex<BTreeMap<NaiveDate, CaseRecord>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Number of stored records.
  pub fn len(&self) -> usize { self.lock().len() }

  pub fn is_empty(&self) -> bool { self.lock().is_empty() }

  fn lock(&self) -> MutexGuard<'_, BTreeMap<NaiveDate, CaseRecord>> {
    self.records.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl CaseStore for MemoryStore {
  type Error = Infallible;

  async fn get(&self, date: NaiveDate) -> Result<Option<CaseRecord>, Infallible> {
    Ok(self.lock().get(&date).copied())
  }

  async fn upsert(&self, patch: CasePatch) -> Result<CaseRecord, Infallible> {
    let mut records = self.lock();
    let record = records
      .entry(patch.date)
      .and_modify(|r| r.apply(&patch))
      .or_insert_with(|| patch.into_record());
    Ok(*record)
  }

  async fn list(&self, range: DateRange) -> Result<Vec<CaseRecord>, Infallible> {
    Ok(
      self
        .lock()
        .values()
        .filter(|r| range.contains(r.date))
        .copied()
        .collect(),
    )
  }
}
