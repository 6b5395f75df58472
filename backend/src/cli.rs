use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vitrina_core::Id;

/// Catálogo personal de películas, series, música, juegos y libros.
#[derive(Debug, Parser)]
#[command(name = "vitrina", version, about = "Personal media catalog")]
pub struct Cli {
  /// SQLite database to use instead of `[storage].db_path`.
  #[arg(long, global = true)]
  pub db: Option<PathBuf>,

  /// Log at debug level (`RUST_LOG` still wins when set).
  #[arg(short, long, global = true)]
  pub verbose: bool,

  #[arg(value_enum)]
  pub kind: Kind,

  #[arg(value_enum)]
  pub op: Op,

  #[command(flatten)]
  pub request: Request,
}

/// Argumentos de la operación, comunes a todos los tipos.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Request {
  /// Id of the entity to get, remove, duplicate or move.
  #[arg(long)]
  pub id: Option<Id>,

  /// Id of the parent, for nested kinds.
  #[arg(long)]
  pub parent: Option<Id>,

  /// Entity as JSON, for add and update.
  #[arg(long)]
  pub json: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
  Genres,
  Movies,
  Games,
  Programs,
  Pictures,
  Music,
  Songs,
  Shows,
  Seasons,
  Episodes,
  BookCategories,
  Books,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Op {
  List,
  Get,
  Add,
  Update,
  Remove,
  Duplicate,
  MoveUp,
  MoveDown,
  UpdatePositions,
}

impl fmt::Display for Op {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.to_possible_value() {
      Some(value) => f.write_str(value.get_name()),
      None => write!(f, "{self:?}"),
    }
  }
}
