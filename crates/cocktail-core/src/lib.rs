//! Core types and trait definitions for the cocktail API.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backend and the HTTP layer both depend on it.

pub mod bottle;
pub mod drink;
pub mod error;
pub mod link;
pub mod patch;
pub mod representation;
pub mod store;

pub use error::{Error, Result};
pub use link::{BaseUrl, ResourceKind};
pub use patch::Patch;
