//! Field constraints for [`Person`](crate::person::Person) records.
//!
//! Backends call [`validate`] on every insert and update; nothing is written
//! unless it passes. The function is pure, so callers can also check a
//! candidate without touching a store.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::person::NewPerson;

/// Minimum length of `name`, in characters.
pub const NAME_MIN_LEN: usize = 3;

/// Two digits, a dash, six or more digits; or three digits, a dash, five or
/// more digits.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[0-9]{2}-[0-9]{6,}|[0-9]{3}-[0-9]{5,})$")
    .expect("phone number regex is valid")
});

// ─── Failures ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Number,
}

impl Field {
  pub fn as_str(self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Number => "number",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
  /// Absent or empty.
  Required,
  TooShort { min: usize, value: String },
  InvalidNumber { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
  pub field: Field,
  pub kind:  FailureKind,
}

impl fmt::Display for FieldFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let field = self.field.as_str();
    match &self.kind {
      FailureKind::Required => write!(f, "{field}: `{field}` is required"),
      FailureKind::TooShort { min, value } => write!(
        f,
        "{field}: `{field}` (`{value}`) is shorter than the minimum allowed \
         length ({min})"
      ),
      FailureKind::InvalidNumber { value } => {
        write!(f, "{field}: `{value}` is not a valid phone number")
      }
    }
  }
}

/// One or more field constraints failed. Failures are listed in field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Person validation failed: {}", join_failures(.failures))]
pub struct ValidationError {
  pub failures: Vec<FieldFailure>,
}

impl ValidationError {
  pub fn has_failure(&self, field: Field) -> bool {
    self.failures.iter().any(|f| f.field == field)
  }
}

fn join_failures(failures: &[FieldFailure]) -> String {
  failures
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── Predicate ───────────────────────────────────────────────────────────────

/// A candidate that passed [`validate`]; both fields are present and
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPerson {
  pub name:   String,
  pub number: String,
}

/// Does `number` match the phone pattern?
pub fn is_valid_number(number: &str) -> bool { NUMBER_RE.is_match(number) }

/// Check `candidate` against every field constraint.
pub fn validate(candidate: &NewPerson) -> Result<ValidPerson, ValidationError> {
  let mut failures = Vec::new();

  let name = present(candidate.name.as_deref());
  match name {
    None => failures.push(FieldFailure {
      field: Field::Name,
      kind:  FailureKind::Required,
    }),
    Some(n) if n.chars().count() < NAME_MIN_LEN => failures.push(FieldFailure {
      field: Field::Name,
      kind:  FailureKind::TooShort {
        min:   NAME_MIN_LEN,
        value: n.to_owned(),
      },
    }),
    Some(_) => {}
  }

  let number = present(candidate.number.as_deref());
  match number {
    None => failures.push(FieldFailure {
      field: Field::Number,
      kind:  FailureKind::Required,
    }),
    Some(n) if !is_valid_number(n) => failures.push(FieldFailure {
      field: Field::Number,
      kind:  FailureKind::InvalidNumber { value: n.to_owned() },
    }),
    Some(_) => {}
  }

  match (name, number) {
    (Some(name), Some(number)) if failures.is_empty() => Ok(ValidPerson {
      name:   name.to_owned(),
      number: number.to_owned(),
    }),
    _ => Err(ValidationError { failures }),
  }
}

fn present(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_both_number_shapes() {
    assert!(is_valid_number("09-1234556"));
    assert!(is_valid_number("040-22334455"));
    assert!(is_valid_number("12-123456"));
    assert!(is_valid_number("123-12345"));
  }

  #[test]
  fn rejects_malformed_numbers() {
    for n in ["1234556", "1-22334455", "10-22-334455", "12-12345", "1234-5678", ""] {
      assert!(!is_valid_number(n), "{n:?} should be rejected");
    }
  }

  #[test]
  fn rejects_non_ascii_digits() {
    assert!(!is_valid_number("٠٩-١٢٣٤٥٥٦"));
  }

  #[test]
  fn valid_candidate_passes_through_unchanged() {
    let ok = validate(&NewPerson::new("Ada Lovelace", "39-445323523")).unwrap();
    assert_eq!(ok.name, "Ada Lovelace");
    assert_eq!(ok.number, "39-445323523");
  }

  #[test]
  fn short_name_fails() {
    let err = validate(&NewPerson::new("Al", "040-123456")).unwrap_err();
    assert_eq!(err.failures.len(), 1);
    assert_eq!(err.failures[0].field, Field::Name);
    assert!(matches!(err.failures[0].kind, FailureKind::TooShort { min: 3, .. }));
  }

  #[test]
  fn name_length_counts_characters() {
    assert!(validate(&NewPerson::new("Åsa", "040-123456")).is_ok());
  }

  #[test]
  fn empty_strings_count_as_missing() {
    let err = validate(&NewPerson::new("", "")).unwrap_err();
    assert_eq!(
      err.failures,
      vec![
        FieldFailure { field: Field::Name, kind: FailureKind::Required },
        FieldFailure { field: Field::Number, kind: FailureKind::Required },
      ]
    );
  }

  #[test]
  fn missing_name_only() {
    let candidate = NewPerson {
      name:   None,
      number: Some("040-123456".into()),
    };
    let err = validate(&candidate).unwrap_err();
    assert!(err.has_failure(Field::Name));
    assert!(!err.has_failure(Field::Number));
    assert_eq!(
      err.to_string(),
      "Person validation failed: name: `name` is required"
    );
  }

  #[test]
  fn message_lists_every_failure() {
    let err = validate(&NewPerson::new("Al", "1234556")).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Person validation failed: name: `name` (`Al`) is shorter than the \
       minimum allowed length (3), number: `1234556` is not a valid phone \
       number"
    );
  }
}
