//! Cocktail API server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store named by `DATABASE_URL`, and serves the JSON API over HTTP.

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use cocktail_api::AppState;
use cocktail_core::BaseUrl;
use cocktail_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::{ServerConfig, StoreLocation, store_location};

#[derive(Parser)]
#[command(author, version, about = "Cocktail API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let server_cfg = ServerConfig::load(&cli.config)?;

  let store = match store_location(&server_cfg.database_url) {
    StoreLocation::Memory => {
      tracing::warn!("using an in-memory store; data is lost on exit");
      SqliteStore::open_in_memory()
        .await
        .context("failed to open in-memory store")?
    }
    StoreLocation::File(path) => SqliteStore::open(&path)
      .await
      .with_context(|| format!("failed to open store at {path:?}"))?,
  };

  let mut state = AppState::new(Arc::new(store));
  if let Some(url) = &server_cfg.public_url {
    state = state.with_public_url(BaseUrl::parse(url)?);
  }

  let app = cocktail_api::api_router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
