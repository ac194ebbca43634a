//! SQL schema for the cocktail SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS drinks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT,
    description TEXT
);

-- Owned by a drink; removed before the drink itself.
CREATE TABLE IF NOT EXISTS ingredients (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    drink_id    INTEGER NOT NULL REFERENCES drinks(id),
    type        TEXT,
    amount      INTEGER
);

CREATE TABLE IF NOT EXISTS bottles (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    type        TEXT,
    amount      INTEGER,
    pin         INTEGER
);

CREATE INDEX IF NOT EXISTS ingredients_drink_idx ON ingredients(drink_id);

PRAGMA user_version = 1;
";
