//! Handlers for `/drinks` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/drinks`     | Collection of every drink with its ingredients |
//! | `POST`   | `/drinks`     | Body: [`NewDrink`]; returns the drink |
//! | `GET`    | `/drinks/:id` | 404 if not found |
//! | `PATCH`  | `/drinks/:id` | Body: [`DrinkPatch`]; `ingredients`, when present, replaces the whole set |
//! | `DELETE` | `/drinks/:id` | Cascades to ingredients; 404 if not found |

use axum::{
  Json,
  extract::State,
  http::header,
  response::IntoResponse,
};
use cocktail_core::{
  Error, ResourceKind,
  drink::{DrinkPatch, NewDrink},
  representation::{
    self, CollectionRepresentation, DELETE_FAILED, DELETE_SUCCEEDED,
    DrinkRepresentation, Message,
  },
  store::CocktailStore,
};

use crate::{
  AppState,
  error::ApiError,
  extract::{ApiJson, ApiPath, RequestBaseUrl},
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /drinks`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
) -> Result<Json<CollectionRepresentation<DrinkRepresentation>>, ApiError>
where
  S: CocktailStore + 'static,
{
  let drinks = state.store.list_drinks().await.map_err(ApiError::store)?;
  let items = drinks
    .iter()
    .map(|view| representation::drink_view(view, &base))
    .collect();
  Ok(Json(representation::collection(ResourceKind::Drinks, items, &base)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /drinks/:id`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<DrinkRepresentation>, ApiError>
where
  S: CocktailStore + 'static,
{
  let view = state
    .store
    .get_drink(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(Error::NotFound { kind: ResourceKind::Drinks, id })?;
  Ok(Json(representation::drink_view(&view, &base)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /drinks`. Returns the created drink, with a `Location` header
/// pointing at it.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
  ApiJson(body): ApiJson<NewDrink>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CocktailStore + 'static,
{
  let view = state.store.create_drink(body).await.map_err(ApiError::store)?;
  tracing::info!(
    drink_id = view.drink.id,
    ingredients = view.ingredients.len(),
    "created drink"
  );

  let rep = representation::drink_view(&view, &base);
  Ok(([(header::LOCATION, rep.links.self_link.clone())], Json(rep)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /drinks/:id`
pub async fn update<S>(
  State(state): State<AppState<S>>,
  RequestBaseUrl(base): RequestBaseUrl,
  ApiPath(id): ApiPath<i64>,
  ApiJson(patch): ApiJson<DrinkPatch>,
) -> Result<Json<DrinkRepresentation>, ApiError>
where
  S: CocktailStore + 'static,
{
  let replaces_ingredients = patch.ingredients.is_present();
  let view = state
    .store
    .update_drink(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or(Error::NotFound { kind: ResourceKind::Drinks, id })?;
  tracing::info!(drink_id = id, replaces_ingredients, "updated drink");

  Ok(Json(representation::drink_view(&view, &base)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /drinks/:id` — removes the drink's ingredients, then the drink.
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<Message>, ApiError>
where
  S: CocktailStore + 'static,
{
  let deleted = state.store.delete_drink(id).await.map_err(ApiError::store)?;
  if !deleted {
    tracing::warn!(drink_id = id, "delete of missing drink");
    return Err(ApiError::NotFound(DELETE_FAILED.to_owned()));
  }
  tracing::info!(drink_id = id, "deleted drink");
  Ok(Json(representation::message(DELETE_SUCCEEDED)))
}

#[cfg(test)]
mod tests {
  use axum::http::{StatusCode, header};
  use cocktail_core::{drink::NewDrink, store::CocktailStore};
  use serde_json::json;

  use crate::test_support::{expect_json, make_state, oneshot};

  #[tokio::test]
  async fn list_empty_has_empty_array_and_self_link() {
    let state = make_state().await;
    let resp = oneshot(state, "GET", "/drinks", None).await;
    let body = expect_json(resp, StatusCode::OK).await;

    assert_eq!(body["_embedded"]["drinks"], json!([]));
    assert_eq!(body["_links"]["self"], "http://example.org/drinks");
  }

  #[tokio::test]
  async fn list_embeds_every_drink() {
    let state = make_state().await;
    state.store.create_drink(NewDrink::named("Bloody Mary")).await.unwrap();
    state.store.create_drink(NewDrink::named("Gin and Tonic")).await.unwrap();

    let resp = oneshot(state, "GET", "/drinks", None).await;
    let body = expect_json(resp, StatusCode::OK).await;

    let drinks = body["_embedded"]["drinks"].as_array().unwrap();
    assert_eq!(drinks.len(), 2);
    assert_eq!(drinks[0]["name"], "Bloody Mary");
    assert_eq!(drinks[0]["_links"]["self"], "http://example.org/drinks/1");
    assert_eq!(drinks[1]["_links"]["self"], "http://example.org/drinks/2");
  }

  #[tokio::test]
  async fn create_returns_drink_with_ingredients_in_order() {
    let state = make_state().await;
    let resp = oneshot(
      state,
      "POST",
      "/drinks",
      Some(json!({
        "name": "Gin and Juice",
        "description": "Combine gin and tonic and enjoy.",
        "ingredients": [
          { "type": "Gin", "amount": 30 },
          { "type": "Juice", "amount": 100 }
        ]
      })),
    )
    .await;

    assert_eq!(
      resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
      "http://example.org/drinks/1"
    );
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(
      body,
      json!({
        "name": "Gin and Juice",
        "description": "Combine gin and tonic and enjoy.",
        "ingredients": [
          { "type": "Gin", "amount": 30 },
          { "type": "Juice", "amount": 100 }
        ],
        "_links": { "self": "http://example.org/drinks/1" }
      })
    );
  }

  #[tokio::test]
  async fn create_ignores_extra_ingredient_fields() {
    let state = make_state().await;
    let resp = oneshot(
      state,
      "POST",
      "/drinks",
      Some(json!({
        "name": "Martini",
        "ingredients": [{ "type": "Gin", "amount": 60, "id": 99, "drink_id": 42 }]
      })),
    )
    .await;
    let body = expect_json(resp, StatusCode::OK).await;

    assert_eq!(body["ingredients"], json!([{ "type": "Gin", "amount": 60 }]));
  }

  #[tokio::test]
  async fn create_with_malformed_body_is_json_400() {
    let state = make_state().await;
    let resp = oneshot(
      state,
      "POST",
      "/drinks",
      Some(json!({ "name": "Martini", "ingredients": [{ "amount": "lots" }] })),
    )
    .await;
    let body = expect_json(resp, StatusCode::BAD_REQUEST).await;
    assert!(body["message"].is_string());
  }

  #[tokio::test]
  async fn get_one_includes_ingredients() {
    let state = make_state().await;
    state
      .store
      .create_drink(
        NewDrink {
          description: Some("Combine gin and tonic and enjoy.".into()),
          ..NewDrink::named("Gin and Juice")
        }
        .with_ingredient("Gin", 30)
        .with_ingredient("Juice", 100),
      )
      .await
      .unwrap();

    let resp = oneshot(state, "GET", "/drinks/1", None).await;
    let body = expect_json(resp, StatusCode::OK).await;

    assert_eq!(body["name"], "Gin and Juice");
    assert_eq!(body["description"], "Combine gin and tonic and enjoy.");
    assert_eq!(
      body["ingredients"],
      json!([{ "type": "Gin", "amount": 30 }, { "type": "Juice", "amount": 100 }])
    );
  }

  #[tokio::test]
  async fn get_missing_is_404() {
    let state = make_state().await;
    let resp = oneshot(state, "GET", "/drinks/12", None).await;
    let body = expect_json(resp, StatusCode::NOT_FOUND).await;
    assert_eq!(body["message"], "drink 12 not found");
  }

  #[tokio::test]
  async fn get_with_non_numeric_id_is_400() {
    let state = make_state().await;
    let resp = oneshot(state, "GET", "/drinks/mojito", None).await;
    expect_json(resp, StatusCode::BAD_REQUEST).await;
  }

  #[tokio::test]
  async fn patch_replaces_ingredients_and_name() {
    let state = make_state().await;
    state
      .store
      .create_drink(
        NewDrink::named("Bloody Mary")
          .with_ingredient("Vodka", 30)
          .with_ingredient("Tomato Juice", 100),
      )
      .await
      .unwrap();

    let resp = oneshot(
      state.clone(),
      "PATCH",
      "/drinks/1",
      Some(json!({
        "name": "Bloody Mary 2",
        "ingredients": [{ "amount": 60, "type": "Gin" }]
      })),
    )
    .await;
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["name"], "Bloody Mary 2");
    assert_eq!(body["_links"]["self"], "http://example.org/drinks/1");

    let resp = oneshot(state.clone(), "GET", "/drinks/1", None).await;
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["name"], "Bloody Mary 2");
    assert_eq!(body["ingredients"], json!([{ "type": "Gin", "amount": 60 }]));
    assert_eq!(state.store.ingredient_count().await.unwrap(), 1);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn readers_never_see_a_half_replaced_ingredient_list() {
    let state = make_state().await;
    state
      .store
      .create_drink(
        NewDrink::named("Negroni")
          .with_ingredient("Gin", 30)
          .with_ingredient("Campari", 30),
      )
      .await
      .unwrap();

    let writer = tokio::spawn({
      let state = state.clone();
      async move {
        for round in 0..100 {
          let (first, second) =
            if round % 2 == 0 { ("Rum", "Lime") } else { ("Gin", "Campari") };
          let resp = oneshot(
            state.clone(),
            "PATCH",
            "/drinks/1",
            Some(json!({
              "ingredients": [
                { "type": first, "amount": 30 },
                { "type": second, "amount": 30 }
              ]
            })),
          )
          .await;
          assert_eq!(resp.status(), StatusCode::OK);
        }
      }
    });

    let reader = tokio::spawn({
      let state = state.clone();
      async move {
        for _ in 0..100 {
          let resp = oneshot(state.clone(), "GET", "/drinks/1", None).await;
          let body = expect_json(resp, StatusCode::OK).await;
          let kinds: Vec<&str> = body["ingredients"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["type"].as_str().unwrap())
            .collect();
          assert!(
            kinds == ["Gin", "Campari"] || kinds == ["Rum", "Lime"],
            "inconsistent ingredient list: {kinds:?}"
          );
        }
      }
    });

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(state.store.ingredient_count().await.unwrap(), 2);
  }

  #[tokio::test]
  async fn patch_without_ingredients_keeps_them() {
    let state = make_state().await;
    state
      .store
      .create_drink(NewDrink::named("Negroni").with_ingredient("Campari", 30))
      .await
      .unwrap();

    let resp = oneshot(
      state,
      "PATCH",
      "/drinks/1",
      Some(json!({ "description": "Stirred, not shaken." })),
    )
    .await;
    let body = expect_json(resp, StatusCode::OK).await;

    assert_eq!(body["name"], "Negroni");
    assert_eq!(body["description"], "Stirred, not shaken.");
    assert_eq!(body["ingredients"], json!([{ "type": "Campari", "amount": 30 }]));
  }

  #[tokio::test]
  async fn null_ingredients_are_treated_as_absent() {
    let state = make_state().await;
    state
      .store
      .create_drink(NewDrink::named("Negroni").with_ingredient("Campari", 30))
      .await
      .unwrap();

    let resp = oneshot(
      state.clone(),
      "PATCH",
      "/drinks/1",
      Some(json!({ "ingredients": null })),
    )
    .await;
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["ingredients"], json!([{ "type": "Campari", "amount": 30 }]));

    let resp = oneshot(
      state,
      "POST",
      "/drinks",
      Some(json!({ "name": "Martini", "ingredients": null })),
    )
    .await;
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body["ingredients"], json!([]));
  }

  #[tokio::test]
  async fn patch_missing_is_404() {
    let state = make_state().await;
    let resp = oneshot(state, "PATCH", "/drinks/5", Some(json!({ "name": "x" }))).await;
    expect_json(resp, StatusCode::NOT_FOUND).await;
  }

  #[tokio::test]
  async fn delete_removes_drink_and_ingredients() {
    let state = make_state().await;
    state
      .store
      .create_drink(
        NewDrink::named("Gin and Juice")
          .with_ingredient("Gin", 30)
          .with_ingredient("Juice", 100),
      )
      .await
      .unwrap();

    let resp = oneshot(state.clone(), "DELETE", "/drinks/1", None).await;
    let body = expect_json(resp, StatusCode::OK).await;
    assert_eq!(body, json!({ "message": "Success!" }));

    assert!(state.store.list_drinks().await.unwrap().is_empty());
    assert_eq!(state.store.ingredient_count().await.unwrap(), 0);
  }

  #[tokio::test]
  async fn delete_missing_is_404_failed() {
    let state = make_state().await;
    let resp = oneshot(state, "DELETE", "/drinks/1", None).await;
    let body = expect_json(resp, StatusCode::NOT_FOUND).await;
    assert_eq!(body, json!({ "message": "Failed!" }));
  }
}
