//! The `CaseStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `casewatch-store-sqlite`
//! and the in-memory [`MemoryStore`](crate::MemoryStore)). Ingestion and the
//! read API depend on this abstraction, not on any concrete backend.

use std::future::Future;

use chrono::NaiveDate;

use crate::record::{CasePatch, CaseRecord};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Inclusive date bounds for [`CaseStore::list`]. `None` leaves that side
/// unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
  pub start: Option<NaiveDate>,
  pub end:   Option<NaiveDate>,
}

impl DateRange {
  pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
    Self { start, end }
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Keyed persistence for [`CaseRecord`]s, at most one record per date.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CaseStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the record for `date`. Returns `None` if nothing is stored.
  fn get(
    &self,
    date: NaiveDate,
  ) -> impl Future<Output = Result<Option<CaseRecord>, Self::Error>> + Send + '_;

  /// Create or sparse-patch the record for `patch.date` and return the
  /// record as stored afterwards.
  ///
  /// Must be atomic for the single date: either the whole patch applies or
  /// none of it does.
  fn upsert(
    &self,
    patch: CasePatch,
  ) -> impl Future<Output = Result<CaseRecord, Self::Error>> + Send + '_;

  /// All records within `range`, ascending by date.
  fn list(
    &self,
    range: DateRange,
  ) -> impl Future<Output = Result<Vec<CaseRecord>, Self::Error>> + Send + '_;
}
