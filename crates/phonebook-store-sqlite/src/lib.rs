//! SQLite backend for the phonebook store.
//!
//! Each person is kept as a small JSON document keyed by its id. Wraps
//! [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
