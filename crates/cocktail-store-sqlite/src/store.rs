//! [`SqliteStore`] — the SQLite implementation of [`CocktailStore`].

use std::{collections::HashMap, path::Path};

use cocktail_core::{
  bottle::{Bottle, BottlePatch, NewBottle},
  drink::{Drink, DrinkPatch, DrinkView, Ingredient, NewDrink, NewIngredient},
  patch::Patch,
  store::CocktailStore,
};
use rusqlite::{Connection, OptionalExtension as _, params};

use crate::{
  Result,
  rows::{
    BOTTLE_COLUMNS, DRINK_COLUMNS, INGREDIENT_COLUMNS, bottle_from_row,
    drink_from_row, ingredient_from_row,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A cocktail store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Total number of ingredient rows across all drinks.
  pub async fn ingredient_count(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM ingredients", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count as u64)
  }
}

// ─── Statement helpers ───────────────────────────────────────────────────────
//
// These run on the connection thread, inside whatever transaction the caller
// has opened. `Transaction` derefs to `Connection`, so they take the latter.

fn select_drink(conn: &Connection, id: i64) -> rusqlite::Result<Option<Drink>> {
  conn
    .query_row(
      &format!("SELECT {DRINK_COLUMNS} FROM drinks WHERE id = ?1"),
      params![id],
      drink_from_row,
    )
    .optional()
}

fn select_ingredients(conn: &Connection, drink_id: i64) -> rusqlite::Result<Vec<Ingredient>> {
  let mut stmt = conn.prepare_cached(&format!(
    "SELECT {INGREDIENT_COLUMNS} FROM ingredients WHERE drink_id = ?1 ORDER BY id"
  ))?;
  let rows = stmt
    .query_map(params![drink_id], ingredient_from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

fn insert_ingredients(
  conn: &Connection,
  drink_id: i64,
  inputs: &[NewIngredient],
) -> rusqlite::Result<Vec<Ingredient>> {
  let mut stmt = conn
    .prepare_cached("INSERT INTO ingredients (drink_id, type, amount) VALUES (?1, ?2, ?3)")?;

  let mut created = Vec::with_capacity(inputs.len());
  for input in inputs {
    stmt.execute(params![drink_id, input.kind, input.amount])?;
    created.push(Ingredient {
      id: conn.last_insert_rowid(),
      drink_id,
      kind: input.kind.clone(),
      amount: input.amount,
    });
  }
  Ok(created)
}

fn delete_ingredients(conn: &Connection, drink_id: i64) -> rusqlite::Result<usize> {
  conn.execute("DELETE FROM ingredients WHERE drink_id = ?1", params![drink_id])
}

fn select_bottle(conn: &Connection, id: i64) -> rusqlite::Result<Option<Bottle>> {
  conn
    .query_row(
      &format!("SELECT {BOTTLE_COLUMNS} FROM bottles WHERE id = ?1"),
      params![id],
      bottle_from_row,
    )
    .optional()
}

// ─── CocktailStore impl ──────────────────────────────────────────────────────

impl CocktailStore for SqliteStore {
  type Error = crate::Error;

  // ── Drinks ────────────────────────────────────────────────────────────────

  async fn create_drink(&self, input: NewDrink) -> Result<DrinkView> {
    let view = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO drinks (name, description) VALUES (?1, ?2)",
          params![input.name, input.description],
        )?;
        let drink = Drink {
          id:          tx.last_insert_rowid(),
          name:        input.name,
          description: input.description,
        };
        let ingredients = insert_ingredients(&tx, drink.id, &input.ingredients)?;
        tx.commit()?;
        Ok(DrinkView { drink, ingredients })
      })
      .await?;
    Ok(view)
  }

  async fn get_drink(&self, id: i64) -> Result<Option<DrinkView>> {
    let view = self
      .conn
      .call(move |conn| {
        let Some(drink) = select_drink(conn, id)? else {
          return Ok(None);
        };
        let ingredients = select_ingredients(conn, id)?;
        Ok(Some(DrinkView { drink, ingredients }))
      })
      .await?;
    Ok(view)
  }

  async fn list_drinks(&self) -> Result<Vec<DrinkView>> {
    let views = self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;

        let drinks: Vec<Drink> = tx
          .prepare(&format!("SELECT {DRINK_COLUMNS} FROM drinks ORDER BY id"))?
          .query_map([], drink_from_row)?
          .collect::<rusqlite::Result<_>>()?;

        let mut by_drink: HashMap<i64, Vec<Ingredient>> = HashMap::new();
        let ingredients: Vec<Ingredient> = tx
          .prepare(&format!("SELECT {INGREDIENT_COLUMNS} FROM ingredients ORDER BY id"))?
          .query_map([], ingredient_from_row)?
          .collect::<rusqlite::Result<_>>()?;
        for ingredient in ingredients {
          by_drink.entry(ingredient.drink_id).or_default().push(ingredient);
        }

        tx.commit()?;

        Ok(
          drinks
            .into_iter()
            .map(|drink| {
              let ingredients = by_drink.remove(&drink.id).unwrap_or_default();
              DrinkView { drink, ingredients }
            })
            .collect(),
        )
      })
      .await?;
    Ok(views)
  }

  async fn update_drink(&self, id: i64, patch: DrinkPatch) -> Result<Option<DrinkView>> {
    let view = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let Some(mut drink) = select_drink(&tx, id)? else {
          return Ok(None);
        };

        patch.apply_fields(&mut drink);
        tx.execute(
          "UPDATE drinks SET name = ?1, description = ?2 WHERE id = ?3",
          params![drink.name, drink.description, id],
        )?;

        let ingredients = match patch.ingredients {
          Patch::Present(replacement) => {
            delete_ingredients(&tx, id)?;
            insert_ingredients(&tx, id, &replacement)?
          }
          Patch::Absent => select_ingredients(&tx, id)?,
        };

        tx.commit()?;
        Ok(Some(DrinkView { drink, ingredients }))
      })
      .await?;
    Ok(view)
  }

  async fn replace_ingredients(
    &self,
    drink_id: i64,
    ingredients: Vec<NewIngredient>,
  ) -> Result<Option<Vec<Ingredient>>> {
    let replaced = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if select_drink(&tx, drink_id)?.is_none() {
          return Ok(None);
        }
        delete_ingredients(&tx, drink_id)?;
        let created = insert_ingredients(&tx, drink_id, &ingredients)?;
        tx.commit()?;
        Ok(Some(created))
      })
      .await?;
    Ok(replaced)
  }

  async fn delete_drink(&self, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let removed_ingredients = delete_ingredients(&tx, id)?;
        let removed = tx.execute("DELETE FROM drinks WHERE id = ?1", params![id])?;
        tx.commit()?;
        tracing::debug!(drink_id = id, removed_ingredients, "cascaded drink delete");
        Ok(removed > 0)
      })
      .await?;
    Ok(deleted)
  }

  // ── Bottles ───────────────────────────────────────────────────────────────

  async fn create_bottle(&self, input: NewBottle) -> Result<Bottle> {
    let bottle = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO bottles (type, amount, pin) VALUES (?1, ?2, ?3)",
          params![input.kind, input.amount, input.pin],
        )?;
        Ok(Bottle {
          id:     conn.last_insert_rowid(),
          kind:   input.kind,
          amount: input.amount,
          pin:    input.pin,
        })
      })
      .await?;
    Ok(bottle)
  }

  async fn get_bottle(&self, id: i64) -> Result<Option<Bottle>> {
    let bottle = self
      .conn
      .call(move |conn| Ok(select_bottle(conn, id)?))
      .await?;
    Ok(bottle)
  }

  async fn list_bottles(&self) -> Result<Vec<Bottle>> {
    let bottles = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {BOTTLE_COLUMNS} FROM bottles ORDER BY id"))?;
        let rows = stmt
          .query_map([], bottle_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(bottles)
  }

  async fn update_bottle(&self, id: i64, patch: BottlePatch) -> Result<Option<Bottle>> {
    let bottle = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let Some(mut bottle) = select_bottle(&tx, id)? else {
          return Ok(None);
        };
        patch.apply(&mut bottle);
        tx.execute(
          "UPDATE bottles SET type = ?1, amount = ?2, pin = ?3 WHERE id = ?4",
          params![bottle.kind, bottle.amount, bottle.pin, id],
        )?;
        tx.commit()?;
        Ok(Some(bottle))
      })
      .await?;
    Ok(bottle)
  }

  async fn delete_bottle(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| Ok(conn.execute("DELETE FROM bottles WHERE id = ?1", params![id])?))
      .await?;
    Ok(removed > 0)
  }
}
