//! phonebook server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `PHONEBOOK_*` / `PORT` environment variables, opens the SQLite store, and
//! serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use phonebook_server::{app, expand_tilde, load_config};
use phonebook_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Phonebook HTTP server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config).context("failed to load configuration")?;
  let store_path = expand_tilde(&server_cfg.store_path);

  // The store lives for the whole process and is dropped after the server
  // stops accepting requests.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  tracing::info!("connected to store at {}", store_path.display());

  let app = app(Arc::new(store));
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!("failed to listen for Ctrl+C: {e}");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutdown signal received, draining requests");
}
