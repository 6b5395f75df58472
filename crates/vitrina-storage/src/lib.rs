//! Persistencia SQLite del catálogo.
//!
//! Cada raíz de agregado se guarda como una fila `(id, kind, position, body)`
//! con el JSON de su forma de dominio. Los hijos anidados viajan dentro del
//! cuerpo de su raíz y sacan sus ids de la tabla `nested_ids`.

pub mod config;
pub mod models;
pub mod schema;
mod store;

use std::fs;
use std::marker::PhantomData;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;
use tracing::{info, warn};
use vitrina_core::ports::RepoError;

pub use config::StorageConfig;
pub use store::SqliteStore;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("database: {0}")]
  Diesel(#[from] diesel::result::Error),
  #[error("connection pool: {0}")]
  Pool(#[from] PoolError),
  #[error("migrations: {0}")]
  Migration(String),
  #[error("json body: {0}")]
  Json(#[from] serde_json::Error),
  #[error("{kind} {id} is not stored")]
  Missing { kind: &'static str, id: i32 },
  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl From<StoreError> for RepoError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::Missing { .. } => RepoError::NotFound,
      StoreError::Json(e) => RepoError::Serialization(e.to_string()),
      other => RepoError::Storage(other.to_string()),
    }
  }
}

/// PRAGMAs aplicados a cada conexión que entrega el pool.
#[derive(Debug)]
struct Pragmas {
  journal_mode: Option<String>,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for Pragmas {
  fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
    conn
      .batch_execute("PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;")
      .map_err(r2d2::Error::QueryError)?;

    if let Some(mode) = &self.journal_mode {
      conn
        .batch_execute(&format!("PRAGMA journal_mode = {mode};"))
        .map_err(r2d2::Error::QueryError)?;
    }
    Ok(())
  }
}

fn journal_mode(config: &StorageConfig) -> Option<String> {
  let mode = config.journal_mode.as_deref()?.trim();
  if !mode.is_empty() && mode.chars().all(|c| c.is_ascii_alphabetic()) {
    Some(mode.to_ascii_uppercase())
  } else {
    warn!(journal_mode = mode, "ignoring invalid journal mode");
    None
  }
}

/// Base de datos abierta y migrada; reparte almacenes por tipo.
#[derive(Clone)]
pub struct Database {
  pool: DbPool,
}

impl Database {
  pub fn open(config: &StorageConfig) -> Result<Self, StoreError> {
    if let Some(parent) = config.db_path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }

    let url = config.db_path.to_string_lossy().into_owned();
    let manager = ConnectionManager::<SqliteConnection>::new(url);
    let pool = Pool::builder()
      .max_size(config.pool_size.max(1))
      .connection_customizer(Box::new(Pragmas { journal_mode: journal_mode(config) }))
      .build(manager)?;

    let database = Self { pool };
    database.migrate()?;
    info!(path = %config.db_path.display(), "database ready");
    Ok(database)
  }

  fn migrate(&self) -> Result<(), StoreError> {
    let mut conn = self.connection()?;
    let conn: &mut SqliteConnection = &mut conn;
    let applied = conn
      .run_pending_migrations(MIGRATIONS)
      .map_err(|e| StoreError::Migration(e.to_string()))?;
    info!(applied = applied.len(), "migrations run");
    Ok(())
  }

  pub fn connection(&self) -> Result<DbConnection, StoreError> {
    Ok(self.pool.get()?)
  }

  /// Almacén de las raíces de tipo `A`.
  pub fn store<A>(&self) -> SqliteStore<A> {
    SqliteStore { pool: self.pool.clone(), _aggregate: PhantomData }
  }
}
