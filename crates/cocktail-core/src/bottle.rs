//! Bottles — standalone stock records with no relationships.

use serde::Deserialize;

use crate::patch::Patch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bottle {
  pub id:     i64,
  pub kind:   Option<String>,
  /// Amount left in the bottle.
  pub amount: Option<i64>,
  /// Dispenser pin the bottle is attached to, if any.
  pub pin:    Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewBottle {
  #[serde(rename = "type", default)]
  pub kind:   Option<String>,
  #[serde(default)]
  pub amount: Option<i64>,
  #[serde(default)]
  pub pin:    Option<i64>,
}

impl NewBottle {
  pub fn new(kind: impl Into<String>, amount: i64) -> Self {
    Self { kind: Some(kind.into()), amount: Some(amount), pin: None }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BottlePatch {
  #[serde(rename = "type", default)]
  pub kind:   Patch<Option<String>>,
  #[serde(default)]
  pub amount: Patch<Option<i64>>,
  #[serde(default)]
  pub pin:    Patch<Option<i64>>,
}

impl BottlePatch {
  pub fn apply(self, bottle: &mut Bottle) {
    self.kind.apply_to(&mut bottle.kind);
    self.amount.apply_to(&mut bottle.amount);
    self.pin.apply_to(&mut bottle.pin);
  }
}
