//! Integration tests for `SqliteStore` against an in-memory database.

use casewatch_core::{
  MemoryStore,
  record::{CasePatch, CaseRecord},
  repository,
  store::{CaseStore, DateRange},
};
use chrono::NaiveDate;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn d(m: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(2024, m, day).unwrap()
}

fn patch(date: NaiveDate, covid: Option<u32>, flu: Option<u32>) -> CasePatch {
  CasePatch { date, covid_cases: covid, flu_cases: flu }
}

async fn seed(s: &SqliteStore) {
  for (date, covid, flu) in [
    (d(1, 6), 1500, 300),
    (d(1, 13), 1200, 450),
    (d(1, 20), 900, 500),
    (d(2, 3), 800, 600),
    (d(2, 10), 750, 650),
  ] {
    s.upsert(patch(date, Some(covid), Some(flu))).await.unwrap();
  }
}

// ─── Upsert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_inserts_new_record() {
  let s = store().await;
  let rec = s.upsert(patch(d(1, 6), Some(100), Some(50))).await.unwrap();
  assert_eq!(rec.date, d(1, 6));
  assert_eq!(rec.covid_cases, Some(100));
  assert_eq!(rec.flu_cases, Some(50));
}

#[tokio::test]
async fn upsert_updates_existing_record() {
  let s = store().await;
  s.upsert(patch(d(1, 6), Some(100), Some(50))).await.unwrap();
  let rec = s.upsert(patch(d(1, 6), Some(200), None)).await.unwrap();
  assert_eq!(rec.covid_cases, Some(200));
  // Unchanged when the incoming value is absent.
  assert_eq!(rec.flu_cases, Some(50));
}

#[tokio::test]
async fn upsert_does_not_duplicate() {
  let s = store().await;
  s.upsert(patch(d(1, 6), Some(100), Some(50))).await.unwrap();
  s.upsert(patch(d(1, 6), Some(200), Some(60))).await.unwrap();
  assert_eq!(s.count().await.unwrap(), 1);
  let rec = s.get(d(1, 6)).await.unwrap().unwrap();
  assert_eq!(rec.covid_cases, Some(200));
  assert_eq!(rec.flu_cases, Some(60));
}

#[tokio::test]
async fn upsert_is_idempotent() {
  let s = store().await;
  let first = s.upsert(patch(d(1, 6), Some(100), Some(50))).await.unwrap();
  let second = s.upsert(patch(d(1, 6), Some(100), Some(50))).await.unwrap();
  assert_eq!(first, second);
  assert_eq!(s.count().await.unwrap(), 1);
}

#[tokio::test]
async fn upsert_all_absent_creates_empty_record() {
  let s = store().await;
  let rec = s.upsert(patch(d(1, 6), None, None)).await.unwrap();
  assert_eq!(rec, CaseRecord::empty(d(1, 6)));

  let rec = s.upsert(patch(d(1, 6), None, Some(7))).await.unwrap();
  assert_eq!(rec.covid_cases, None);
  assert_eq!(rec.flu_cases, Some(7));
}

#[tokio::test]
async fn reported_zero_overwrites_and_is_kept() {
  let s = store().await;
  s.upsert(patch(d(1, 6), Some(100), Some(50))).await.unwrap();
  let rec = s.upsert(patch(d(1, 6), Some(0), None)).await.unwrap();
  assert_eq!(rec.covid_cases, Some(0));
  assert_eq!(rec.flu_cases, Some(50));
}

// ─── Get ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(d(1, 6)).await.unwrap().is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store_returns_empty() {
  let s = store().await;
  assert!(s.list(DateRange::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_unbounded_returns_all_ascending() {
  let s = store().await;
  // Insert out of order; the store must sort.
  s.upsert(patch(d(2, 3), Some(1), None)).await.unwrap();
  s.upsert(patch(d(1, 6), Some(2), None)).await.unwrap();
  s.upsert(patch(d(1, 20), Some(3), None)).await.unwrap();

  let dates: Vec<_> = s
    .list(DateRange::default())
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.date)
    .collect();
  assert_eq!(dates, vec![d(1, 6), d(1, 20), d(2, 3)]);
}

#[tokio::test]
async fn list_start_bound_only() {
  let s = store().await;
  seed(&s).await;
  let rows = s.list(DateRange::new(Some(d(2, 1)), None)).await.unwrap();
  assert_eq!(rows.len(), 2);
  assert!(rows.iter().all(|r| r.date >= d(2, 1)));
}

#[tokio::test]
async fn list_end_bound_is_inclusive() {
  let s = store().await;
  seed(&s).await;
  let rows = s.list(DateRange::new(None, Some(d(1, 13)))).await.unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[1].date, d(1, 13));
}

#[tokio::test]
async fn list_both_bounds_inclusive() {
  let s = store().await;
  seed(&s).await;
  let rows = s
    .list(DateRange::new(Some(d(1, 13)), Some(d(1, 20))))
    .await
    .unwrap();
  let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
  assert_eq!(dates, vec![d(1, 13), d(1, 20)]);
}

#[tokio::test]
async fn list_inverted_range_is_empty() {
  let s = store().await;
  seed(&s).await;
  let rows = s
    .list(DateRange::new(Some(d(2, 10)), Some(d(1, 6))))
    .await
    .unwrap();
  assert!(rows.is_empty());
}

#[tokio::test]
async fn list_bounds_past_year_9999_agree_with_memory_store() {
  let s = store().await;
  let mem = MemoryStore::new();
  let far = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
  seed(&s).await;
  for r in s.list(DateRange::default()).await.unwrap() {
    mem.upsert(r.into()).await.unwrap();
  }
  s.upsert(patch(far, Some(1), None)).await.unwrap();
  mem.upsert(patch(far, Some(1), None)).await.unwrap();

  for range in [
    DateRange::new(None, Some(far)),
    DateRange::new(Some(far), None),
    DateRange::new(Some(d(1, 13)), Some(far)),
    DateRange::new(None, NaiveDate::from_ymd_opt(9999, 12, 31)),
  ] {
    let from_sqlite = s.list(range).await.unwrap();
    let from_memory = mem.list(range).await.unwrap();
    assert_eq!(from_sqlite, from_memory, "{range:?}");
  }

  let everything = s.list(DateRange::new(None, Some(far))).await.unwrap();
  assert_eq!(everything.len(), 6);
  assert_eq!(everything.last().map(|r| r.date), Some(far));
}

// ─── Batches ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn batch_rerun_leaves_same_state() {
  let batch = vec![
    CaseRecord { date: d(1, 6), covid_cases: Some(1500), flu_cases: None },
    CaseRecord { date: d(1, 13), covid_cases: Some(1200), flu_cases: Some(450) },
  ];

  let s = store().await;
  assert_eq!(repository::apply(&s, &batch).await.unwrap(), 2);
  let once = s.list(DateRange::default()).await.unwrap();

  assert_eq!(repository::apply(&s, &batch).await.unwrap(), 2);
  let twice = s.list(DateRange::default()).await.unwrap();

  assert_eq!(once, twice);
  assert_eq!(s.count().await.unwrap(), 2);
}

#[tokio::test]
async fn reopened_file_store_keeps_records() {
  let dir = std::env::temp_dir().join(format!(
    "casewatch-store-test-{}",
    std::process::id()
  ));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("cases.db");
  let _ = std::fs::remove_file(&path);

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.upsert(patch(d(1, 6), Some(100), Some(50))).await.unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  let rec = s.get(d(1, 6)).await.unwrap().unwrap();
  assert_eq!(rec.covid_cases, Some(100));
  assert_eq!(s.count().await.unwrap(), 1);

  drop(s);
  let _ = std::fs::remove_dir_all(&dir);
}
