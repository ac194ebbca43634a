//! Row mapping between SQLite result rows and `cocktail-core` records.
//!
//! Column order in each `*_COLUMNS` constant must match the indices read by
//! the corresponding `*_from_row` function.

use cocktail_core::{bottle::Bottle, drink::{Drink, Ingredient}};
use rusqlite::Row;

pub const DRINK_COLUMNS: &str = "id, name, description";
pub const INGREDIENT_COLUMNS: &str = "id, drink_id, type, amount";
pub const BOTTLE_COLUMNS: &str = "id, type, amount, pin";

pub fn drink_from_row(row: &Row<'_>) -> rusqlite::Result<Drink> {
  Ok(Drink {
    id:          row.get(0)?,
    name:        row.get(1)?,
    description: row.get(2)?,
  })
}

pub fn ingredient_from_row(row: &Row<'_>) -> rusqlite::Result<Ingredient> {
  Ok(Ingredient {
    id:       row.get(0)?,
    drink_id: row.get(1)?,
    kind:     row.get(2)?,
    amount:   row.get(3)?,
  })
}

pub fn bottle_from_row(row: &Row<'_>) -> rusqlite::Result<Bottle> {
  Ok(Bottle {
    id:     row.get(0)?,
    kind:   row.get(1)?,
    amount: row.get(2)?,
    pin:    row.get(3)?,
  })
}
