//! Handler for the API entry point, `GET /`.

use axum::Json;
use cocktail_core::representation::{self, RootRepresentation};

use crate::extract::RequestBaseUrl;

/// `GET /` — greeting plus links to every collection.
pub async fn handler(RequestBaseUrl(base): RequestBaseUrl) -> Json<RootRepresentation> {
  Json(representation::root(&base))
}
