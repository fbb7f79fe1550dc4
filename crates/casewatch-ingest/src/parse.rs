//! CSV series parser.
//!
//! Pipeline:
//!   raw CSV text
//!     └─ header check        → SchemaError if a column is missing
//!          └─ per-row date    → unparseable dates drop the row
//!               └─ per-row count → unparseable counts become `None`
//!
//! Date validity and value validity are independent: a good date with a bad
//! count keeps the row, a bad date drops it whatever the count says.

use casewatch_core::ParsedSeriesRow;
use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{Error, Result};

const DATE_COLUMN: &str = "date";
const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Series definitions ──────────────────────────────────────────────────────

/// Where a disease series keeps its count, and what we call it downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
  /// Header of the count column in the source CSV.
  pub value_column: &'static str,
  /// Name of the field this series populates on a case record.
  pub field:        &'static str,
}

pub const COVID: SeriesSpec = SeriesSpec {
  value_column: "COVID-19 cases overall",
  field:        "covid_cases",
};

pub const FLU: SeriesSpec = SeriesSpec {
  value_column: "Influenza cases overall",
  field:        "flu_cases",
};

impl SeriesSpec {
  pub fn parse(&self, raw: &str) -> Result<Vec<ParsedSeriesRow>> {
    parse(raw, self.value_column, self.field)
  }
}

// ─── Parser ──────────────────────────────────────────────────────────────────

/// Parse one series from raw CSV text.
///
/// Fails only on schema problems: the `date` column or `value_column` is
/// missing from the header. Rows keep their input order.
pub fn parse(raw: &str, value_column: &str, field: &str) -> Result<Vec<ParsedSeriesRow>> {
  let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
  let mut reader = csv::ReaderBuilder::new()
    .flexible(true)
    .trim(csv::Trim::All)
    .from_reader(raw.as_bytes());

  let headers = reader.headers()?.clone();
  let date_idx = column_index(&headers, DATE_COLUMN, field)?;
  let value_idx = column_index(&headers, value_column, field)?;

  let mut rows = Vec::new();
  let mut dropped = 0usize;
  let mut gaps = 0usize;

  for (i, result) in reader.records().enumerate() {
    let record = match result {
      Ok(r) => r,
      Err(e) => {
        tracing::debug!(series = field, row = i + 1, error = %e, "dropping undecodable row");
        dropped += 1;
        continue;
      }
    };

    let Some(date) = record.get(date_idx).and_then(parse_date) else {
      tracing::debug!(
        series = field,
        row = i + 1,
        value = record.get(date_idx).unwrap_or_default(),
        "dropping row with unparseable date"
      );
      dropped += 1;
      continue;
    };

    let count = record.get(value_idx).and_then(parse_count);
    if count.is_none() {
      gaps += 1;
    }
    rows.push(ParsedSeriesRow { date, count });
  }

  tracing::info!(series = field, kept = rows.len(), dropped, gaps, "parsed series");
  Ok(rows)
}

fn column_index(headers: &StringRecord, column: &str, series: &str) -> Result<usize> {
  headers
    .iter()
    .position(|h| h == column)
    .ok_or_else(|| Error::Schema {
      series:   series.to_owned(),
      expected: column.to_owned(),
      found:    headers.iter().map(str::to_owned).collect(),
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// A non-negative whole count. Whole-valued decimals such as `1200.0` are
/// accepted; anything else is a gap.
fn parse_count(s: &str) -> Option<u32> {
  if let Ok(n) = s.parse::<u32>() {
    return Some(n);
  }
  let f = s.parse::<f64>().ok()?;
  (f.is_finite() && f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f))
    .then_some(f as u32)
}
