//! The `CocktailStore` trait.
//!
//! Implemented by storage backends (e.g. `cocktail-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.
//!
//! Lookups by id return `Option` (or `bool` for deletes) so that a missing
//! record is an ordinary outcome rather than a backend error; callers decide
//! how to surface it.

use std::future::Future;

use crate::{
  bottle::{Bottle, BottlePatch, NewBottle},
  drink::{DrinkPatch, DrinkView, Ingredient, NewDrink, NewIngredient},
};

/// Abstraction over a cocktail store backend.
///
/// Every method is a single atomic unit of work: implementations must not
/// let another caller observe a partially applied write. In particular a
/// drink whose ingredients are being replaced is never visible with an empty
/// or mixed ingredient set.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CocktailStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Drinks ────────────────────────────────────────────────────────────

  /// Create a drink and its ingredients, in input order.
  fn create_drink(
    &self,
    input: NewDrink,
  ) -> impl Future<Output = Result<DrinkView, Self::Error>> + Send + '_;

  /// Retrieve a drink and its current ingredients. `None` if not found.
  fn get_drink(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<DrinkView>, Self::Error>> + Send + '_;

  /// All drinks in creation order, each with its ingredients.
  fn list_drinks(
    &self,
  ) -> impl Future<Output = Result<Vec<DrinkView>, Self::Error>> + Send + '_;

  /// Apply a partial update. A present ingredient list is a full replace.
  /// `None` if the drink does not exist; nothing is written in that case.
  fn update_drink(
    &self,
    id: i64,
    patch: DrinkPatch,
  ) -> impl Future<Output = Result<Option<DrinkView>, Self::Error>> + Send + '_;

  /// Delete every ingredient of the drink and create `ingredients` in their
  /// place. `None` if the drink does not exist.
  fn replace_ingredients(
    &self,
    drink_id: i64,
    ingredients: Vec<NewIngredient>,
  ) -> impl Future<Output = Result<Option<Vec<Ingredient>>, Self::Error>> + Send + '_;

  /// Delete a drink, removing its ingredients first. Returns `false` if the
  /// drink did not exist.
  fn delete_drink(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Bottles ───────────────────────────────────────────────────────────

  fn create_bottle(
    &self,
    input: NewBottle,
  ) -> impl Future<Output = Result<Bottle, Self::Error>> + Send + '_;

  fn get_bottle(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Bottle>, Self::Error>> + Send + '_;

  fn list_bottles(
    &self,
  ) -> impl Future<Output = Result<Vec<Bottle>, Self::Error>> + Send + '_;

  fn update_bottle(
    &self,
    id: i64,
    patch: BottlePatch,
  ) -> impl Future<Output = Result<Option<Bottle>, Self::Error>> + Send + '_;

  fn delete_bottle(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
