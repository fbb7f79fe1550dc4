//! [`SqliteStore`] — the SQLite implementation of [`CaseStore`].

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::OptionalExtension as _;

use casewatch_core::{
  record::{CasePatch, CaseRecord},
  store::{CaseStore, DateRange},
};

use crate::{
  encode::{RawRecord, encode_date},
  schema::SCHEMA,
  Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A case store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Total number of stored records.
  pub async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM case_records", [], |r| r.get(0))?)
      })
      .await?;
    Ok(usize::try_from(n).unwrap_or_default())
  }
}

// ─── CaseStore impl ──────────────────────────────────────────────────────────

impl CaseStore for SqliteStore {
  type Error = crate::Error;

  async fn get(&self, date: NaiveDate) -> Result<Option<CaseRecord>> {
    let date_str = encode_date(date);

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT date, covid_cases, flu_cases FROM case_records WHERE date = ?1",
            rusqlite::params![date_str],
            RawRecord::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn upsert(&self, patch: CasePatch) -> Result<CaseRecord> {
    let date_str = encode_date(patch.date);
    let covid    = patch.covid_cases;
    let flu      = patch.flu_cases;

    // A single statement, so the patch for one date applies atomically.
    // COALESCE keeps the stored value whenever the incoming one is NULL.
    let raw: RawRecord = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "INSERT INTO case_records (date, covid_cases, flu_cases)
           VALUES (?1, ?2, ?3)
           ON CONFLICT (date) DO UPDATE SET
             covid_cases = COALESCE(excluded.covid_cases, case_records.covid_cases),
             flu_cases   = COALESCE(excluded.flu_cases,   case_records.flu_cases)
           RETURNING date, covid_cases, flu_cases",
          rusqlite::params![date_str, covid, flu],
          RawRecord::from_row,
        )?)
      })
      .await?;

    raw.into_record()
  }

  async fn list(&self, range: DateRange) -> Result<Vec<CaseRecord>> {
    let start_str = range.start.map(encode_date);
    let end_str   = range.end.map(encode_date);

    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT date, covid_cases, flu_cases
           FROM case_records
           WHERE (?1 IS NULL OR date >= ?1)
             AND (?2 IS NULL OR date <= ?2)
           ORDER BY date ASC",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![start_str, end_str], RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}
