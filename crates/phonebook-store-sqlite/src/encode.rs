//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, ids as hyphenated lowercase
//! UUIDs, and the person body as compact JSON.

use chrono::{DateTime, Utc};
use phonebook_core::{
  person::{Person, PersonId},
  validate::ValidPerson,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_id(id: PersonId) -> String { id.as_uuid().hyphenated().to_string() }

pub fn decode_id(s: &str) -> Result<PersonId> { Ok(Uuid::parse_str(s)?.into()) }

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

// ─── Document body ───────────────────────────────────────────────────────────

/// The JSON document stored in the `doc` column.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersonDoc {
  pub name:   String,
  pub number: String,
}

pub fn encode_doc(valid: &ValidPerson) -> Result<String> {
  Ok(serde_json::to_string(&PersonDoc {
    name:   valid.name.clone(),
    number: valid.number.clone(),
  })?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `persons` row.
pub struct RawPerson {
  pub person_id: String,
  pub doc:       String,
}

impl RawPerson {
  pub fn into_person(self) -> Result<Person> {
    let doc: PersonDoc = serde_json::from_str(&self.doc)?;
    Ok(Person {
      id:     decode_id(&self.person_id)?,
      name:   doc.name,
      number: doc.number,
    })
  }
}
