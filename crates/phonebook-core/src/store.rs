//! The `PersonStore` trait — the persistence gateway.
//!
//! The trait is implemented by storage backends (e.g.
//! `phonebook-store-sqlite`). Higher layers (`phonebook-api`,
//! `phonebook-cli`) depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::{NewPerson, Person, PersonId};

/// Abstraction over a phonebook storage backend.
///
/// Every write runs [`validate`](crate::validate::validate) first and fails
/// with [`Error::Validation`](crate::Error::Validation) if the candidate is
/// rejected. A missing record is a normal outcome (`None` / `false`), never
/// an error.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  /// Backend error; must classify into the core failure taxonomy.
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All persons, in insertion order.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Number of persons at the time of the call.
  fn count_all(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate and persist a new person. The store assigns the id.
  fn insert(
    &self,
    candidate: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Validate `candidate` and replace name and number of the person with
  /// `id`. Returns `None` if no such person exists.
  fn update_by_id(
    &self,
    id: PersonId,
    candidate: NewPerson,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Remove the person with `id`. Returns whether a record was removed.
  fn delete_by_id(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
