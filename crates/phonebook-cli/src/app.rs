//! The two things the utility can do: list the phonebook or add one entry.

use std::io::Write;

use anyhow::{Context, Result};
use phonebook_core::{person::NewPerson, store::PersonStore};

// ─── Command ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// Print every entry.
  List,
  /// Insert one entry. Goes through the same store validation as the HTTP
  /// create path.
  Add { name: String, number: String },
}

impl Command {
  pub fn from_args(name: Option<String>, number: Option<String>) -> Self {
    match (name, number) {
      (Some(name), Some(number)) => Command::Add { name, number },
      _ => Command::List,
    }
  }
}

// ─── Run ──────────────────────────────────────────────────────────────────────

/// Execute `command` against `store`, writing human-readable output to `out`.
pub async fn run<S, W>(store: &S, command: Command, out: &mut W) -> Result<()>
where
  S: PersonStore,
  W: Write,
{
  match command {
    Command::List => {
      let persons = store
        .list_all()
        .await
        .map_err(Into::<phonebook_core::Error>::into)
        .context("listing phonebook")?;
      writeln!(out, "Phonebook:")?;
      for p in persons {
        writeln!(out, "{} {}", p.name, p.number)?;
      }
    }
    Command::Add { name, number } => {
      let person = store
        .insert(NewPerson::new(name, number))
        .await
        .map_err(Into::<phonebook_core::Error>::into)?;
      tracing::debug!(id = %person.id, "inserted person");
      writeln!(
        out,
        "added \"{}\" number {} to phonebook",
        person.name, person.number
      )?;
    }
  }
  Ok(())
}
