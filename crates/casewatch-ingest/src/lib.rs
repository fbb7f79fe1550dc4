//! Ingestion pipeline for Casewatch.
//!
//! Fetches the weekly COVID-19 and influenza CSV feeds, validates and parses
//! each into a date-keyed series, outer-joins the two series and sparse-upserts
//! the result into any [`casewatch_core::store::CaseStore`].
//!
//! # Quick start
//!
//! ```no_run
//! # async fn demo() -> casewatch_ingest::Result<()> {
//! use casewatch_core::MemoryStore;
//! use casewatch_ingest::{Fetcher, Sources, fetch::DEFAULT_TIMEOUT, run_ingestion};
//!
//! let store = MemoryStore::new();
//! let fetcher = Fetcher::new(DEFAULT_TIMEOUT)?;
//! let count = run_ingestion(&fetcher, &Sources::default(), &store).await?;
//! println!("{count} records processed");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod pipeline;

pub use config::IngestConfig;
pub use error::{Error, FetchError, Result};
pub use fetch::Fetcher;
pub use pipeline::{Sources, ingest_feeds, run_ingestion};

#[cfg(test)]
mod test_support;
