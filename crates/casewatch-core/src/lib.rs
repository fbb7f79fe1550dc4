//! Core types and logic for the Casewatch respiratory-case tracker.
//!
//! This crate is deliberately free of HTTP, CSV and database dependencies.
//! It holds the data model, the [`CaseStore`](store::CaseStore) abstraction,
//! the outer-join merge used by ingestion and the aggregation used by the
//! read API.

pub mod error;
pub mod memory;
pub mod merge;
pub mod query;
pub mod record;
pub mod repository;
pub mod store;

pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use record::{CasePatch, CaseRecord, ParsedSeriesRow};
