//! casewatch `ingest` binary.
//!
//! Reads `config.toml` (or the path given with `--config`), fetches both case
//! feeds and upserts them into the SQLite store. Exits non-zero if any fetch,
//! parse or store step fails; rerunning after a failure is always safe.

use std::{
  path::{Path, PathBuf},
  process::ExitCode,
};

use anyhow::Context as _;
use casewatch_ingest::{Fetcher, IngestConfig, run_ingestion};
use casewatch_store_sqlite::SqliteStore;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Fetch the weekly case feeds into the Casewatch store")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override `store_path` from the configuration.
  #[arg(long)]
  store: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  match run(Cli::parse()).await {
    Ok(count) => {
      tracing::info!(count, "ingestion finished");
      ExitCode::SUCCESS
    }
    Err(e) => {
      tracing::error!("ingestion failed: {e:#}");
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli) -> anyhow::Result<usize> {
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CASEWATCH"))
    .build()
    .context("failed to read config file")?;

  let cfg: IngestConfig = settings
    .try_deserialize()
    .context("failed to deserialise IngestConfig")?;

  let store_path = expand_tilde(cli.store.as_deref().unwrap_or(&cfg.store_path));
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let fetcher = Fetcher::new(cfg.timeout()).context("failed to build fetcher")?;
  let count = run_ingestion(&fetcher, &cfg.sources(), &store).await?;
  Ok(count)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
