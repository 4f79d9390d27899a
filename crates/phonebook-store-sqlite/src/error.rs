//! Error type for `phonebook-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] phonebook_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Classify into the core taxonomy: validation and id failures pass through,
/// everything else is an unclassified store failure.
impl From<Error> for phonebook_core::Error {
  fn from(e: Error) -> Self {
    match e {
      Error::Core(core) => core,
      other => phonebook_core::Error::Store(Box::new(other)),
    }
  }
}
