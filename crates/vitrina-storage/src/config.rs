use std::path::PathBuf;

use serde::{Deserialize, Serialize};
pub use vitrina_config::ConfigError;
use vitrina_config::{CONFIG_BACKEND, PATHS, TomlConfigBackend};

const SECTION: &str = "storage";

fn default_pool_size() -> u32 {
  4
}

/// Sección `[storage]` de `vitrina.toml`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
  pub db_path: PathBuf,
  pub journal_mode: Option<String>,
  #[serde(default = "default_pool_size")]
  pub pool_size: u32,
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig::at(PATHS.database_file())
  }
}

impl StorageConfig {
  /// Configuración por defecto apuntando a `db_path`.
  pub fn at(db_path: impl Into<PathBuf>) -> Self {
    StorageConfig {
      db_path: db_path.into(),
      journal_mode: Some("WAL".to_string()),
      pool_size: default_pool_size(),
    }
  }

  pub fn load() -> Result<Self, ConfigError> {
    Self::load_with(&CONFIG_BACKEND)
  }

  /// Carga la sección (o sus valores por defecto) y la deja escrita en el archivo.
  pub fn load_with(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg: StorageConfig = backend.load_section(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }
}
