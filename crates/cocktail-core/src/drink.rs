//! Drinks and the ingredients they own.
//!
//! An [`Ingredient`] only exists as part of a [`Drink`]: it is created with
//! the drink or by a full replace of the drink's ingredient list, and it is
//! deleted with the drink.

use serde::{Deserialize, Deserializer};

use crate::patch::Patch;

// ─── Stored records ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
  pub id:          i64,
  pub name:        Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
  pub id:       i64,
  /// Back-reference to the owning drink.
  pub drink_id: i64,
  pub kind:     Option<String>,
  pub amount:   Option<i64>,
}

/// A drink together with its ingredients, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkView {
  pub drink:       Drink,
  pub ingredients: Vec<Ingredient>,
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// One entry of an inbound ingredient list. Only `type` and `amount` are
/// carried over; any other keys in the JSON object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewIngredient {
  #[serde(rename = "type", default)]
  pub kind:   Option<String>,
  #[serde(default)]
  pub amount: Option<i64>,
}

impl NewIngredient {
  pub fn new(kind: impl Into<String>, amount: i64) -> Self {
    Self { kind: Some(kind.into()), amount: Some(amount) }
  }
}

/// Input for [`CocktailStore::create_drink`](crate::store::CocktailStore::create_drink).
///
/// Every field may be absent; absent fields are stored unset. A `null`
/// ingredient list is the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewDrink {
  #[serde(default)]
  pub name:        Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub ingredients: Vec<NewIngredient>,
}

impl NewDrink {
  pub fn named(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()), ..Self::default() }
  }

  pub fn with_ingredient(mut self, kind: impl Into<String>, amount: i64) -> Self {
    self.ingredients.push(NewIngredient::new(kind, amount));
    self
  }
}

/// Partial update of a drink.
///
/// A present `ingredients` list replaces the drink's whole ingredient set;
/// an absent or `null` one leaves the existing ingredients alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DrinkPatch {
  #[serde(default)]
  pub name:        Patch<Option<String>>,
  #[serde(default)]
  pub description: Patch<Option<String>>,
  #[serde(default, deserialize_with = "null_as_absent")]
  pub ingredients: Patch<Vec<NewIngredient>>,
}

impl DrinkPatch {
  /// Apply the scalar fields to `drink`. Ingredients are handled by the store.
  pub fn apply_fields(&self, drink: &mut Drink) {
    self.name.clone().apply_to(&mut drink.name);
    self.description.clone().apply_to(&mut drink.description);
  }
}

fn null_as_empty<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> Result<Vec<NewIngredient>, D::Error> {
  Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_absent<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> Result<Patch<Vec<NewIngredient>>, D::Error> {
  Ok(match Option::deserialize(deserializer)? {
    Some(list) => Patch::Present(list),
    None => Patch::Absent,
  })
}
