mod catalog;
mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vitrina_storage::Database;

pub use catalog::Catalog;
pub use cli::{Cli, Kind, Op, Request};
pub use commands::{CommandError, Outcome, dispatch};

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
    .with_writer(std::io::stderr)
    .init();
}

/// Abre la base indicada por `--db` o por la configuración y ejecuta la orden.
fn execute(cli: &Cli) -> anyhow::Result<Outcome> {
  let storage =
    config::storage_config(cli.db.as_deref()).context("failed to load storage configuration")?;
  let db = Database::open(&storage)
    .with_context(|| format!("failed to open database at {}", storage.db_path.display()))?;

  // --- Dependency Injection Phase ---
  let catalog = Catalog::new(&db);

  Ok(commands::dispatch(&catalog, cli.kind, cli.op, &cli.request)?)
}

fn report(err: &anyhow::Error) -> u8 {
  let Some(command) = err.downcast_ref::<CommandError>() else {
    eprintln!("error: {err:#}");
    return 1;
  };

  match command {
    CommandError::Core(core) if !core.violations().is_empty() => {
      for violation in core.violations() {
        eprintln!("{violation}");
      }
    }
    other => eprintln!("error: {other}"),
  }
  command.exit_code()
}

pub fn run() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match execute(&cli) {
    Ok(Outcome::Done) => ExitCode::SUCCESS,
    Ok(Outcome::Value(value)) => match serde_json::to_string_pretty(&value) {
      Ok(text) => {
        println!("{text}");
        ExitCode::SUCCESS
      }
      Err(err) => {
        eprintln!("error: {err}");
        ExitCode::FAILURE
      }
    },
    Ok(Outcome::Missing) => {
      eprintln!("not found");
      ExitCode::from(3)
    }
    Err(err) => {
      tracing::debug!(error = ?err, "command failed");
      ExitCode::from(report(&err))
    }
  }
}
