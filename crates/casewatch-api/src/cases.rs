//! Handler for `GET /cases`.
//!
//! | Param | Values | Default |
//! |-------|--------|---------|
//! | `start_date` | `YYYY-MM-DD`, inclusive | unbounded |
//! | `end_date` | `YYYY-MM-DD`, inclusive | unbounded |
//! | `disease_type` | `covid` \| `flu` \| `all` | `all` |
//! | `granularity` | `daily` \| `weekly` \| `monthly` | `weekly` |
//!
//! Any parameter that fails to parse is rejected with 422 before the store is
//! touched.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use casewatch_core::{
  query::{AggregatedBucket, DiseaseSelector, Granularity, aggregate},
  store::{CaseStore, DateRange},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize, Default)]
pub struct CasesParams {
  pub start_date:   Option<NaiveDate>,
  pub end_date:     Option<NaiveDate>,
  #[serde(default)]
  pub disease_type: DiseaseSelector,
  #[serde(default)]
  pub granularity:  Granularity,
}

/// `GET /cases[?start_date=...][&end_date=...][&disease_type=...][&granularity=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<CasesParams>, QueryRejection>,
) -> Result<Json<Vec<AggregatedBucket>>, ApiError>
where
  S: CaseStore,
{
  let Query(params) = params.map_err(|e| ApiError::Unprocessable(e.body_text()))?;

  let records = store
    .list(DateRange::new(params.start_date, params.end_date))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let buckets = aggregate(&records, params.disease_type, params.granularity);
  tracing::debug!(
    records = records.len(),
    buckets = buckets.len(),
    disease_type = ?params.disease_type,
    granularity = ?params.granularity,
    "served cases query"
  );
  Ok(Json(buckets))
}
