//! Case records and the sparse patches applied to them.
//!
//! A count of `None` always means "no data reported". It is never a stand-in
//! for zero: `Some(0)` is a reported count of zero cases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Persisted record ────────────────────────────────────────────────────────

/// One row per reporting date. The date is the primary key; the store holds
/// at most one record for any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
  pub date:        NaiveDate,
  pub covid_cases: Option<u32>,
  pub flu_cases:   Option<u32>,
}

impl CaseRecord {
  /// A record for `date` with no data in either series.
  pub fn empty(date: NaiveDate) -> Self {
    Self { date, covid_cases: None, flu_cases: None }
  }

  /// Apply `patch` field by field. A `None` in the patch leaves the stored
  /// value untouched.
  ///
  /// The patch date is not checked; callers key patches by `self.date`.
  pub fn apply(&mut self, patch: &CasePatch) {
    if let Some(covid) = patch.covid_cases {
      self.covid_cases = Some(covid);
    }
    if let Some(flu) = patch.flu_cases {
      self.flu_cases = Some(flu);
    }
  }
}

// ─── Sparse patch ────────────────────────────────────────────────────────────

/// An upsert request for a single date.
///
/// Fields set to `None` mean "leave whatever is stored alone", so re-running
/// ingestion for one series never clobbers the other series' values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasePatch {
  pub date:        NaiveDate,
  pub covid_cases: Option<u32>,
  pub flu_cases:   Option<u32>,
}

impl CasePatch {
  /// The record created when no record exists yet for `self.date`.
  pub fn into_record(self) -> CaseRecord {
    CaseRecord {
      date:        self.date,
      covid_cases: self.covid_cases,
      flu_cases:   self.flu_cases,
    }
  }
}

impl From<CaseRecord> for CasePatch {
  fn from(record: CaseRecord) -> Self {
    Self {
      date:        record.date,
      covid_cases: record.covid_cases,
      flu_cases:   record.flu_cases,
    }
  }
}

// ─── Ingestion row ───────────────────────────────────────────────────────────

/// A single validated row of one disease series, before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSeriesRow {
  pub date:  NaiveDate,
  pub count: Option<u32>,
}
