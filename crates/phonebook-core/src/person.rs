//! Person — the only entity in the phonebook.
//!
//! [`Person`] is the external (wire) shape: `{id, name, number}`. Any
//! bookkeeping a backend keeps alongside a record stays inside the backend.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque, store-assigned identifier of a [`Person`].
///
/// Serialised as a hyphenated lowercase UUID string.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
  /// Mint a fresh identifier. Random v4 UUIDs are never reused.
  pub fn new() -> Self { Self(Uuid::new_v4()) }

  /// Parse a path-supplied identifier.
  ///
  /// Anything that is not a UUID fails with [`Error::MalformedId`], which is
  /// distinct from the identifier simply not existing.
  pub fn parse(raw: &str) -> Result<Self> {
    Uuid::parse_str(raw)
      .map(Self)
      .map_err(|_| Error::MalformedId(raw.to_owned()))
  }

  pub fn as_uuid(&self) -> Uuid { self.0 }
}

impl Default for PersonId {
  fn default() -> Self { Self::new() }
}

impl From<Uuid> for PersonId {
  fn from(id: Uuid) -> Self { Self(id) }
}

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.hyphenated())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:     PersonId,
  pub name:   String,
  pub number: String,
}

/// A candidate record as received from a client, before validation.
///
/// Both fields are optional on the way in; the required rule is enforced by
/// [`validate`](crate::validate::validate) when the candidate is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
  #[serde(default)]
  pub name:   Option<String>,
  #[serde(default)]
  pub number: Option<String>,
}

impl NewPerson {
  pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
    Self {
      name:   Some(name.into()),
      number: Some(number.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_hyphenated_uuid() {
    let id = PersonId::new();
    let parsed = PersonId::parse(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
  }

  #[test]
  fn parse_rejects_non_uuid() {
    let err = PersonId::parse("5").unwrap_err();
    assert!(matches!(err, Error::MalformedId(ref s) if s == "5"));
  }

  #[test]
  fn person_serialises_to_wire_shape() {
    let id = PersonId::new();
    let person = Person {
      id,
      name:   "Arto Hellas".into(),
      number: "040-123456".into(),
    };
    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "id": id.to_string(),
        "name": "Arto Hellas",
        "number": "040-123456",
      })
    );
  }

  #[test]
  fn new_person_tolerates_missing_fields() {
    let candidate: NewPerson =
      serde_json::from_str(r#"{"number":"040-123456"}"#).unwrap();
    assert_eq!(candidate.name, None);
    assert_eq!(candidate.number.as_deref(), Some("040-123456"));
  }
}
