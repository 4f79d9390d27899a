//! Error types for `phonebook-core`.
//!
//! [`Error`] is the failure taxonomy seen at the persistence boundary. Absence
//! of a record is never an error; store operations report it as `None` or
//! `false`.

use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Error)]
pub enum Error {
  /// A path-supplied identifier that cannot be parsed into a [`PersonId`].
  ///
  /// [`PersonId`]: crate::person::PersonId
  #[error("malformed id: {0:?}")]
  MalformedId(String),

  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// Anything else the backend reports (I/O, connection loss, corruption).
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
