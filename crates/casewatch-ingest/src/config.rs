//! Runtime configuration for the `ingest` binary.

use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

use crate::{fetch::DEFAULT_TIMEOUT, pipeline::Sources};

/// Deserialised from `config.toml` and `CASEWATCH_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
  #[serde(default = "default_store_path")]
  pub store_path:   PathBuf,
  #[serde(default = "default_covid_url")]
  pub covid_url:    String,
  #[serde(default = "default_flu_url")]
  pub flu_url:      String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

impl IngestConfig {
  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

  pub fn sources(&self) -> Sources {
    Sources { covid_url: self.covid_url.clone(), flu_url: self.flu_url.clone() }
  }
}

fn default_store_path() -> PathBuf { PathBuf::from("data.db") }

fn default_covid_url() -> String { Sources::default().covid_url }

fn default_flu_url() -> String { Sources::default().flu_url }

fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT.as_secs() }
