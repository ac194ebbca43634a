//! Handlers for `/bottles` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/bottles`     | Collection of every bottle |
//! | `POST`   | `/bottles`     | Body: `{"type", "amount", "pin"?}`; returns the bottle |
//! | `GET`    | `/bottles/:id` | 404 if not found |
//! | `PATCH`  | `/bottles/:id` | Only the fields present in the body change |
//! | `DELETE` | `/bottles/:id` | 404 if not found |

use axum::{
  Json,
  extract::State,
  http::header,
  response::IntoResponse,
};
use cocktail_core::{
  Error, ResourceKind,
  bottle::{BottlePatch, NewBottle},
  representation::{
    self, BottleRepresentation, CollectionRepresentation, DELETE_FAILED,
    DELETE_SUCCEEDED, Message,
  },
  store::CocktailStore,
};

use crate::{
  AppState,
  error::ApiError,
  extract::{ApiJson, ApiPath, RequestBaseUrl},
};

/// `GET /bottles`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
) -> Result<Json<CollectionRepresentation<BottleRepresentation>>, ApiError>
where
  S: CocktailStore + 'static,
{
  let bottles = state.store.list_bottles().await.map_err(ApiError::store)?;
  let items = bottles
    .iter()
    .map(|b| representation::bottle(b, &base))
    .collect();
  Ok(Json(representation::collection(ResourceKind::Bottles, items, &base)))
}

/// `GET /bottles/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<BottleRepresentation>, ApiError>
where
  S: CocktailStore + 'static,
{
  let bottle = state
    .store
    .get_bottle(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(Error::NotFound { kind: ResourceKind::Bottles, id })?;
  Ok(Json(representation::bottle(&bottle, &base)))
}

/// `POST /bottles`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
  ApiJson(body): ApiJson<NewBottle>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CocktailStore + 'static,
{
  let bottle = state.store.create_bottle(body).await.map_err(ApiError::store)?;
  tracing::info!(bottle_id = bottle.id, "created bottle");

  let rep = representation::bottle(&bottle, &base);
  Ok(([(header::LOCATION, rep.links.self_link.clone())], Json(rep)))
}

/// `PATCH /bottles/:id`
pub async fn update<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
  ApiPath(id): ApiPath<i64>,
  ApiJson(patch): ApiJson<BottlePatch>,
) -> Result<Json<BottleRepresentation>, ApiError>
where
  S: CocktailStore + 'static,
{
  let bottle = state
    .store
    .update_bottle(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or(Error::NotFound { kind: ResourceKind::Bottles, id })?;
  tracing::info!(bottle_id = id, "updated bottle");
  Ok(Json(representation::bottle(&bottle, &base)))
}

/// `DELETE /bottles/:id`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<Message>, ApiError>
where
  S: CocktailStore + 'static,
{
  let deleted = state.store.delete_bottle(id).await.map_err(ApiError::store)?;
  if !deleted {
    tracing::warn!(bottle_id = id, "delete of missing bottle");
    return Err(ApiError::NotFound(DELETE_FAILED.to_owned()));
  }
  tracing::info!(bottle_id = id, "deleted bottle");
  Ok(Json(representation::message(DELETE_SUCCEEDED)))
}
