//! Read-side shaping: disease masking and time bucketing.
//!
//! Source data is weekly, so `daily` and `weekly` return one bucket per
//! stored record. `monthly` sums each series within a calendar month.

use std::{collections::BTreeMap, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, record::CaseRecord};

// ─── Selectors ───────────────────────────────────────────────────────────────

/// Which disease series a query returns. The other series is reported as
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseSelector {
  Covid,
  Flu,
  #[default]
  All,
}

/// Time bucket size for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
  Daily,
  #[default]
  Weekly,
  Monthly,
}

impl FromStr for DiseaseSelector {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "covid" => Ok(Self::Covid),
      "flu" => Ok(Self::Flu),
      "all" => Ok(Self::All),
      other => Err(Error::UnknownSelector(other.to_string())),
    }
  }
}

impl FromStr for Granularity {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "daily" => Ok(Self::Daily),
      "weekly" => Ok(Self::Weekly),
      "monthly" => Ok(Self::Monthly),
      other => Err(Error::UnknownGranularity(other.to_string())),
    }
  }
}

impl<'de> Deserialize<'de> for DiseaseSelector {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    String::deserialize(deserializer)?
      .parse()
      .map_err(serde::de::Error::custom)
  }
}

impl<'de> Deserialize<'de> for Granularity {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    String::deserialize(deserializer)?
      .parse()
      .map_err(serde::de::Error::custom)
  }
}

// ─── Output ──────────────────────────────────────────────────────────────────

/// One output row of a query. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedBucket {
  /// The record date, or the first day of the month for monthly buckets.
  #[serde(rename = "date")]
  pub period_start: NaiveDate,
  pub covid_cases:  Option<u64>,
  pub flu_cases:    Option<u64>,
}

impl From<CaseRecord> for AggregatedBucket {
  fn from(r: CaseRecord) -> Self {
    Self {
      period_start: r.date,
      covid_cases:  r.covid_cases.map(u64::from),
      flu_cases:    r.flu_cases.map(u64::from),
    }
  }
}

// ─── Aggregation ─────────────────────────────────────────────────────────────

/// Copy `record` with the series not covered by `selector` blanked out.
pub fn mask(record: &CaseRecord, selector: DiseaseSelector) -> CaseRecord {
  let mut out = *record;
  match selector {
    DiseaseSelector::Covid => out.flu_cases = None,
    DiseaseSelector::Flu => out.covid_cases = None,
    DiseaseSelector::All => {}
  }
  out
}

/// Mask `records` by `selector` and bucket them by `granularity`.
///
/// `records` is only read; masking works on copies. Input is expected to be
/// ascending by date, as returned by [`CaseStore::list`].
///
/// Monthly buckets always carry `Some` sums: absent counts add zero, so a
/// month where every record lacks a series reports `Some(0)` for it.
///
/// [`CaseStore::list`]: crate::store::CaseStore::list
pub fn aggregate(
  records:     &[CaseRecord],
  selector:    DiseaseSelector,
  granularity: Granularity,
) -> Vec<AggregatedBucket> {
  let masked = records.iter().map(|r| mask(r, selector));

  match granularity {
    Granularity::Daily | Granularity::Weekly => {
      masked.map(AggregatedBucket::from).collect()
    }
    Granularity::Monthly => {
      let mut months: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
      for r in masked {
        let sums = months.entry(month_start(r.date)).or_default();
        sums.0 += r.covid_cases.map_or(0, u64::from);
        sums.1 += r.flu_cases.map_or(0, u64::from);
      }
      months
        .into_iter()
        .map(|(period_start, (covid, flu))| AggregatedBucket {
          period_start,
          covid_cases: Some(covid),
          flu_cases: Some(flu),
        })
        .collect()
    }
  }
}

fn month_start(date: NaiveDate) -> NaiveDate {
  date.with_day(1).unwrap_or(date)
}
