//! Hypermedia representations of stored entities.
//!
//! Pure functions from entity + related data + [`BaseUrl`] to
//! serde-serializable structs. Only the fields declared here ever reach the
//! wire: record ids and `drink_id` back-references stay internal and are
//! exposed only through `_links.self`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
  bottle::Bottle,
  drink::{Drink, DrinkView, Ingredient},
  link::{BaseUrl, ResourceKind},
};

pub const ROOT_MESSAGE: &str = "Hello World. Would you like a cocktail?";
pub const DELETE_SUCCEEDED: &str = "Success!";
pub const DELETE_FAILED: &str = "Failed!";

// ─── Links ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Links {
  #[serde(rename = "self")]
  pub self_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootLinks {
  #[serde(rename = "self")]
  pub self_link: String,
  pub drinks:    String,
  pub bottles:   String,
}

// ─── Representations ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRepresentation {
  #[serde(rename = "type")]
  pub kind:   Option<String>,
  pub amount: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkRepresentation {
  pub name:        Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub ingredients: Vec<IngredientRepresentation>,
  #[serde(rename = "_links")]
  pub links:       Links,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BottleRepresentation {
  #[serde(rename = "type")]
  pub kind:   Option<String>,
  pub amount: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pin:    Option<i64>,
  #[serde(rename = "_links")]
  pub links:  Links,
}

/// `{ "_embedded": { "<kind>": [...] }, "_links": { "self": ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionRepresentation<T> {
  #[serde(rename = "_embedded")]
  pub embedded: BTreeMap<String, Vec<T>>,
  #[serde(rename = "_links")]
  pub links:    Links,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootRepresentation {
  pub message: String,
  #[serde(rename = "_links")]
  pub links:   RootLinks,
}

/// Bare `{ "message": ... }` outcome body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
  pub message: String,
}

// ─── Builders ────────────────────────────────────────────────────────────────

pub fn drink(
  drink: &Drink,
  ingredients: &[Ingredient],
  base: &BaseUrl,
) -> DrinkRepresentation {
  DrinkRepresentation {
    name:        drink.name.clone(),
    description: drink.description.clone(),
    ingredients: ingredients
      .iter()
      .map(|i| IngredientRepresentation {
        kind:   i.kind.clone(),
        amount: i.amount,
      })
      .collect(),
    links:       Links {
      self_link: base.member(ResourceKind::Drinks, drink.id),
    },
  }
}

pub fn drink_view(view: &DrinkView, base: &BaseUrl) -> DrinkRepresentation {
  drink(&view.drink, &view.ingredients, base)
}

pub fn bottle(bottle: &Bottle, base: &BaseUrl) -> BottleRepresentation {
  BottleRepresentation {
    kind:   bottle.kind.clone(),
    amount: bottle.amount,
    pin:    bottle.pin,
    links:  Links {
      self_link: base.member(ResourceKind::Bottles, bottle.id),
    },
  }
}

/// Wrap already-built item representations in a collection envelope.
pub fn collection<T>(
  kind: ResourceKind,
  items: Vec<T>,
  base: &BaseUrl,
) -> CollectionRepresentation<T> {
  CollectionRepresentation {
    embedded: BTreeMap::from([(kind.plural().to_owned(), items)]),
    links:    Links { self_link: base.collection(kind) },
  }
}

pub fn root(base: &BaseUrl) -> RootRepresentation {
  RootRepresentation {
    message: ROOT_MESSAGE.to_owned(),
    links:   RootLinks {
      self_link: base.to_string(),
      drinks:    base.collection(ResourceKind::Drinks),
      bottles:   base.collection(ResourceKind::Bottles),
    },
  }
}

pub fn message(text: impl Into<String>) -> Message {
  Message { message: text.into() }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn base() -> BaseUrl { BaseUrl::from_parts("http", "example.org") }

  fn ingredient(id: i64, kind: &str, amount: i64) -> Ingredient {
    Ingredient { id, drink_id: 1, kind: Some(kind.into()), amount: Some(amount) }
  }

  #[test]
  fn drink_has_exact_fields() {
    let d = Drink {
      id:          1,
      name:        Some("Gin and Juice".into()),
      description: Some("Combine gin and juice and enjoy.".into())
    };
    let rep = drink(&d, &[ingredient(7, "Gin", 30), ingredient(8, "Juice", 100)], &base());

    assert_eq!(
      serde_json::to_value(&rep).unwrap(),
      json!({
        "name": "Gin and Juice",
        "description": "Combine gin and juice and enjoy.",
        "ingredients": [
          { "type": "Gin", "amount": 30 },
          { "type": "Juice", "amount": 100 }
        ],
        "_links": { "self": "http://example.org/drinks/1" }
      })
    );
  }

  #[test]
  fn drink_without_description_omits_the_key() {
    let d = Drink { id: 3, name: Some("Bloody Mary".into()), description: None };
    let value = serde_json::to_value(drink(&d, &[], &base())).unwrap();

    assert!(value.get("description").is_none());
    assert_eq!(value["ingredients"], json!([]));
    assert_eq!(value["_links"]["self"], "http://example.org/drinks/3");
  }

  #[test]
  fn bottle_links_to_itself() {
    let b = Bottle { id: 5, kind: Some("Gin".into()), amount: Some(700), pin: None };
    assert_eq!(
      serde_json::to_value(bottle(&b, &base())).unwrap(),
      json!({
        "type": "Gin",
        "amount": 700,
        "_links": { "self": "http://example.org/bottles/5" }
      })
    );
  }

  #[test]
  fn bottle_includes_pin_when_set() {
    let b = Bottle { id: 1, kind: Some("Gin".into()), amount: Some(700), pin: Some(1) };
    let value = serde_json::to_value(bottle(&b, &base())).unwrap();
    assert_eq!(value["pin"], 1);
  }

  #[test]
  fn empty_collection_is_an_empty_array() {
    let rep = collection::<BottleRepresentation>(ResourceKind::Bottles, vec![], &base());
    assert_eq!(
      serde_json::to_value(&rep).unwrap(),
      json!({
        "_embedded": { "bottles": [] },
        "_links": { "self": "http://example.org/bottles" }
      })
    );
  }

  #[test]
  fn root_links_every_collection() {
    let value = serde_json::to_value(root(&base())).unwrap();
    assert_eq!(value["message"], ROOT_MESSAGE);
    assert_eq!(value["_links"]["self"], "http://example.org");
    assert_eq!(value["_links"]["drinks"], "http://example.org/drinks");
    assert_eq!(value["_links"]["bottles"], "http://example.org/bottles");
  }
}
