//! Server configuration.
//!
//! Sources, lowest to highest precedence: built-in defaults, the TOML file,
//! `COCKTAIL_*` environment variables, and finally `DATABASE_URL`.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "sqlite3://cocktails.sqlite3";

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// `sqlite3://<path>`, `sqlite://<path>`, a bare path, or `:memory:`.
  pub database_url: String,
  /// Fixed base URL for links, e.g. when running behind a proxy that
  /// rewrites `Host`.
  #[serde(default)]
  pub public_url:   Option<String>,
}

impl ServerConfig {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 4567)?
      .set_default("database_url", DEFAULT_DATABASE_URL)?
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("COCKTAIL").try_parsing(true))
      .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
      .build()
      .context("failed to read configuration")?;

    settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }
}

/// Where the SQLite store lives.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreLocation {
  Memory,
  File(PathBuf),
}

pub fn store_location(database_url: &str) -> StoreLocation {
  let path = database_url
    .strip_prefix("sqlite3://")
    .or_else(|| database_url.strip_prefix("sqlite://"))
    .unwrap_or(database_url);

  if path == ":memory:" {
    StoreLocation::Memory
  } else {
    StoreLocation::File(PathBuf::from(path))
  }
}
