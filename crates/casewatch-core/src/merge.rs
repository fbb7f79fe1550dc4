//! Outer join of the two disease series on date.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::record::{CaseRecord, ParsedSeriesRow};

/// Merge the COVID-19 and influenza series into one record per date.
///
/// Every date present in either series yields exactly one record; the side
/// that has no row for that date stays `None`. Output is ascending by date.
///
/// A series that repeats a date resolves to its last row in input order,
/// even when that row's count is `None`.
pub fn merge(covid: &[ParsedSeriesRow], flu: &[ParsedSeriesRow]) -> Vec<CaseRecord> {
  let mut by_date: BTreeMap<NaiveDate, CaseRecord> = BTreeMap::new();

  for row in covid {
    by_date
      .entry(row.date)
      .or_insert_with(|| CaseRecord::empty(row.date))
      .covid_cases = row.count;
  }
  for row in flu {
    by_date
      .entry(row.date)
      .or_insert_with(|| CaseRecord::empty(row.date))
      .flu_cases = row.count;
  }

  by_date.into_values().collect()
}
