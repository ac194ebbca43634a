//! OPTIONS handling and the catch-all fallback.

use axum::{
  http::{Method, StatusCode, Uri},
  response::{IntoResponse, Response},
};

use crate::error::ApiError;

/// `OPTIONS` on any known route: empty `200`.
pub async fn handler() -> StatusCode { StatusCode::OK }

/// Unmatched paths: `OPTIONS` still succeeds, anything else is a JSON 404.
pub async fn fallback(method: Method, uri: Uri) -> Response {
  if method == Method::OPTIONS {
    StatusCode::OK.into_response()
  } else {
    ApiError::NotFound(format!("no resource at {}", uri.path())).into_response()
  }
}

/// Known path, unsupported method: JSON 405.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
  ApiError::MethodNotAllowed(format!("{method} not supported on {}", uri.path()))
}
