//! SQL schema for the phonebook SQLite store.
//!
//! Executed once at connection startup. There are no migrations; the
//! `user_version` pragma only records which layout created the file.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One document per person. `doc` holds the JSON body ({name, number});
-- `version` and `created_at` are bookkeeping and never leave the store.
CREATE TABLE IF NOT EXISTS persons (
    person_id   TEXT PRIMARY KEY,
    doc         TEXT NOT NULL,
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    version     INTEGER NOT NULL DEFAULT 0
);

PRAGMA user_version = 1;
";
