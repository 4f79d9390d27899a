//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use phonebook_core::{
  person::{NewPerson, Person, PersonId},
  store::PersonStore,
  validate::validate,
};

use crate::{
  Result,
  encode::{RawPerson, encode_doc, encode_dt, encode_id},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A phonebook store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
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

  /// Internal revision counter of a stored document. Bumped on every update;
  /// never part of the wire representation.
  #[cfg(test)]
  pub(crate) async fn version_of(&self, id: PersonId) -> Result<Option<i64>> {
    let id_str = encode_id(id);
    let version = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT version FROM persons WHERE person_id = ?1",
            rusqlite::params![id_str],
            |row| row.get(0),
          )
          .optional()?)
      })
      .await?;
    Ok(version)
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = crate::Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_all(&self) -> Result<Vec<Person>> {
    let raws: Vec<RawPerson> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT person_id, doc FROM persons ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawPerson {
              person_id: row.get(0)?,
              doc:       row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPerson::into_person).collect()
  }

  async fn count_all(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM persons", [], |row| row.get(0))?)
      })
      .await?;
    Ok(count.max(0) as u64)
  }

  async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>> {
    let id_str = encode_id(id);

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT person_id, doc FROM persons WHERE person_id = ?1",
            rusqlite::params![id_str],
            |row| {
              Ok(RawPerson {
                person_id: row.get(0)?,
                doc:       row.get(1)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert(&self, candidate: NewPerson) -> Result<Person> {
    let valid = validate(&candidate).map_err(phonebook_core::Error::from)?;

    let id      = PersonId::new();
    let id_str  = encode_id(id);
    let doc_str = encode_doc(&valid)?;
    let at_str  = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO persons (person_id, doc, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, doc_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(Person {
      id,
      name: valid.name,
      number: valid.number,
    })
  }

  async fn update_by_id(
    &self,
    id:        PersonId,
    candidate: NewPerson,
  ) -> Result<Option<Person>> {
    let valid = validate(&candidate).map_err(phonebook_core::Error::from)?;

    let id_str  = encode_id(id);
    let doc_str = encode_doc(&valid)?;

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE persons SET doc = ?2, version = version + 1 WHERE person_id = ?1",
          rusqlite::params![id_str, doc_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Ok(None);
    }

    Ok(Some(Person {
      id,
      name: valid.name,
      number: valid.number,
    }))
  }

  async fn delete_by_id(&self, id: PersonId) -> Result<bool> {
    let id_str = encode_id(id);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM persons WHERE person_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }
}
