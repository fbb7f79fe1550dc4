//! JSON read API for Casewatch.
//!
//! Exposes an axum [`Router`] backed by any [`casewatch_core::store::CaseStore`].
//! Transport, TLS and static assets are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api/v1", casewatch_api::api_router(store.clone()))
//! ```

pub mod cases;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use casewatch_core::store::CaseStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CaseStore + 'static,
{
  Router::new()
    .route("/cases", get(cases::list::<S>))
    .with_state(store)
}
