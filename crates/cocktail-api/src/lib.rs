//! JSON hypermedia API for drinks and bottles.
//!
//! Exposes an axum [`Router`] backed by any [`CocktailStore`]. Every
//! response body is built by [`cocktail_core::representation`] from the
//! request's [`BaseUrl`]. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Serving
//!
//! ```rust,ignore
//! let app = cocktail_api::api_router(AppState::new(store));
//! axum::serve(listener, app).await?;
//! ```

pub mod bottles;
pub mod drinks;
pub mod error;
pub mod extract;
pub mod options;
pub mod root;

use std::sync::Arc;

use axum::{Router, routing::get};
use cocktail_core::{BaseUrl, store::CocktailStore};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store:      Arc<S>,
  /// Fixed base for all links; when `None` it is derived per request.
  pub public_url: Option<BaseUrl>,
}

impl<S> AppState<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store, public_url: None } }

  pub fn with_public_url(mut self, url: BaseUrl) -> Self {
    self.public_url = Some(url);
    self
  }
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:      Arc::clone(&self.store),
      public_url: self.public_url.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// CORS is permissive: preflight requests are answered by the layer, and a
/// bare `OPTIONS` on any path gets an empty `200`.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: CocktailStore + 'static,
{
  Router::new()
    .route("/", get(root::handler).options(options::handler))
    // Drinks
    .route(
      "/drinks",
      get(drinks::list::<S>)
        .post(drinks::create::<S>)
        .options(options::handler),
    )
    .route(
      "/drinks/{id}",
      get(drinks::get_one::<S>)
        .patch(drinks::update::<S>)
        .delete(drinks::delete_one::<S>)
        .options(options::handler),
    )
    // Bottles
    .route(
      "/bottles",
      get(bottles::list::<S>)
        .post(bottles::create::<S>)
        .options(options::handler),
    )
    .route(
      "/bottles/{id}",
      get(bottles::get_one::<S>)
        .patch(bottles::update::<S>)
        .delete(bottles::delete_one::<S>)
        .options(options::handler),
    )
    .fallback(options::fallback)
    .method_not_allowed_fallback(options::method_not_allowed)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
