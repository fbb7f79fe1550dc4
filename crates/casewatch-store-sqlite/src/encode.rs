//! Encoding and decoding helpers between Rust domain types and the values
//! stored in SQLite columns.
//!
//! Dates are stored as day numbers counted from 0001-01-01 (day 1), so range
//! predicates compare integers and hold for any year chrono can represent.
//! Counts are nullable integers.

use casewatch_core::CaseRecord;
use chrono::{Datelike as _, NaiveDate};

use crate::{Error, Result};

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_date(date: NaiveDate) -> i32 { date.num_days_from_ce() }

pub fn decode_date(days: i32) -> Result<NaiveDate> {
  NaiveDate::from_num_days_from_ce_opt(days)
    .ok_or_else(|| Error::DateParse(format!("day number {days} is out of range")))
}

// ─── Raw row ──────────────────────────────────────────────────────────────────

/// A `case_records` row exactly as read from SQLite.
pub struct RawRecord {
  pub date:        i32,
  pub covid_cases: Option<u32>,
  pub flu_cases:   Option<u32>,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      date:        row.get(0)?,
      covid_cases: row.get(1)?,
      flu_cases:   row.get(2)?,
    })
  }

  pub fn into_record(self) -> Result<CaseRecord> {
    Ok(CaseRecord {
      date:        decode_date(self.date)?,
      covid_cases: self.covid_cases,
      flu_cases:   self.flu_cases,
    })
  }
}
