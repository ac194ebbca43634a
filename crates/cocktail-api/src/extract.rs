//! Request extractors.
//!
//! [`ApiJson`] and [`ApiPath`] wrap axum's own extractors so that malformed
//! bodies and ids come back as the usual JSON `{"message": ...}` envelope
//! instead of axum's plain-text rejections.

use std::convert::Infallible;

use axum::{
  extract::{FromRequest, FromRequestParts},
  http::{header, request::Parts},
};
use cocktail_core::BaseUrl;

use crate::{AppState, error::ApiError};

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// The base URL that every link in the response is rooted at.
///
/// Uses the configured public URL when there is one; otherwise it is built
/// from `X-Forwarded-Proto` (default `http`) and the `Host` header of the
/// request being served.
#[derive(Debug, Clone)]
pub struct RequestBaseUrl(pub BaseUrl);

impl<S> FromRequestParts<AppState<S>> for RequestBaseUrl
where
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let base = match &state.public_url {
      Some(url) => url.clone(),
      None => base_url_from_parts(parts),
    };
    Ok(RequestBaseUrl(base))
  }
}

fn base_url_from_parts(parts: &Parts) -> BaseUrl {
  let scheme = parts
    .headers
    .get("x-forwarded-proto")
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split(',').next())
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .or_else(|| parts.uri.scheme_str())
    .unwrap_or("http");

  let host = parts
    .headers
    .get(header::HOST)
    .and_then(|v| v.to_str().ok())
    .or_else(|| parts.uri.authority().map(|a| a.as_str()))
    .unwrap_or("localhost");

  BaseUrl::from_parts(scheme, host)
}
