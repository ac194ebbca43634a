//! Error types for `cocktail-core`.

use thiserror::Error;

use crate::link::ResourceKind;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{} {id} not found", .kind.singular())]
  NotFound { kind: ResourceKind, id: i64 },

  #[error("invalid base url {0:?}: must start with http:// or https://")]
  InvalidBaseUrl(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
