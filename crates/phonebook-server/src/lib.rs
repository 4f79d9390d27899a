//! HTTP server wiring for the phonebook.
//!
//! Configuration loading and the top-level [`Router`]; the binary in
//! `main.rs` owns the store and the listener.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use phonebook_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

/// Layer defaults, the optional TOML file at `path`, `PHONEBOOK_*`
/// environment variables, and finally a bare `PORT` variable.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", 3001_i64)?
    .set_default("store_path", "phonebook.db")?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("PHONEBOOK"))
    .set_override_option("port", std::env::var("PORT").ok())?
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router with request logging. Completed responses are logged at
/// `INFO` so the default filter shows one line per request.
pub fn app(store: Arc<SqliteStore>) -> Router {
  phonebook_api::api_router(store).layer(
    TraceLayer::new_for_http()
      .on_response(DefaultOnResponse::new().level(Level::INFO)),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use phonebook_core::{person::NewPerson, store::PersonStore};
  use tower::ServiceExt as _;

  #[test]
  fn config_file_overrides_defaults() {
    let path = std::env::temp_dir().join("phonebook-server-config-test.toml");
    std::fs::write(&path, "host = \"127.0.0.1\"\nstore_path = \"/tmp/pb.db\"\n")
      .unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/pb.db"));

    std::fs::remove_file(&path).unwrap();
  }

  #[test]
  fn missing_config_file_is_optional() {
    let cfg = load_config(Path::new("/nonexistent/phonebook.toml")).unwrap();
    assert!(!cfg.host.is_empty());
  }

  #[test]
  fn expand_tilde_leaves_plain_paths() {
    assert_eq!(
      expand_tilde(Path::new("/var/lib/phonebook.db")),
      PathBuf::from("/var/lib/phonebook.db")
    );
  }

  #[tokio::test]
  async fn app_serves_persons_behind_trace_layer() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    store
      .insert(NewPerson::new("Arto Hellas", "040-123456"))
      .await
      .unwrap();

    let resp = app(store)
      .oneshot(
        Request::builder()
          .uri("/api/persons")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let persons: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(persons.as_array().unwrap().len(), 1);
  }

  #[derive(Clone, Default)]
  struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

  impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
  }

  impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer { self.clone() }
  }

  #[tokio::test]
  async fn responses_are_logged_at_info() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(Level::INFO)
      .with_ansi(false)
      .with_writer(captured.clone())
      .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let resp = app(store)
      .oneshot(Request::builder().uri("/info").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(log.contains("finished processing request"), "{log}");
    assert!(log.contains("INFO"), "{log}");
  }
}
