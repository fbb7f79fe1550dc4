//! Error types for `casewatch-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("unknown disease selector: {0:?} (expected covid, flu or all)")]
  UnknownSelector(String),

  #[error("unknown granularity: {0:?} (expected daily, weekly or monthly)")]
  UnknownGranularity(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
