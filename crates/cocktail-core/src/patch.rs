//! [`Patch`] — a field wrapper for partial updates.
//!
//! A JSON key that is missing from the body and a key that is present with
//! a `null` value mean different things in a PATCH request. Wrapping the field
//! type in `Patch` and marking it `#[serde(default)]` keeps the two apart:
//!
//! | JSON                | `Patch<Option<String>>`     |
//! |---------------------|-----------------------------|
//! | key missing         | `Patch::Absent`             |
//! | `"name": null`      | `Patch::Present(None)`      |
//! | `"name": "Negroni"` | `Patch::Present(Some(..))`  |

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
  Absent,
  Present(T),
}

impl<T> Default for Patch<T> {
  fn default() -> Self { Self::Absent }
}

impl<T> Patch<T> {
  pub fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }

  /// Overwrite `target` if the field was supplied.
  pub fn apply_to(self, target: &mut T) {
    if let Self::Present(v) = self {
      *target = v;
    }
  }
}

// Only reached when the key exists; a missing key falls back to `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    T::deserialize(deserializer).map(Self::Present)
  }
}
