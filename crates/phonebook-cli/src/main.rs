//! `phonebook` — list or add phonebook entries directly against a store.
//!
//! # Usage
//!
//! ```
//! phonebook ~/phonebook.db                      # list all entries
//! phonebook ~/phonebook.db "Arto Hellas" 040-123456
//! ```

mod app;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use app::Command;
use clap::Parser;
use phonebook_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "phonebook",
  about = "List or add phonebook entries",
  override_usage = "phonebook <STORE> [<NAME> <NUMBER>]"
)]
struct Args {
  /// Path to the store file (the same one the server uses).
  store: PathBuf,

  /// Name of the entry to add.
  #[arg(requires = "number")]
  name: Option<String>,

  /// Phone number of the entry to add.
  number: Option<String>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  let store = SqliteStore::open(&args.store)
    .await
    .with_context(|| format!("opening store {}", args.store.display()))?;

  let command = Command::from_args(args.name, args.number);
  let mut stdout = io::stdout().lock();
  app::run(&store, command, &mut stdout).await
}
