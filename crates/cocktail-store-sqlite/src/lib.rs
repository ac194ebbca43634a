//! SQLite backend for the cocktail store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. That thread executes one closure at a
//! time and every store operation is a single closure wrapping a single
//! transaction, so operations never interleave.

mod rows;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
