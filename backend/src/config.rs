use std::path::Path;

use vitrina_storage::StorageConfig;
use vitrina_storage::config::ConfigError;

/// Configuración de almacenamiento efectiva: `--db` manda sobre `vitrina.toml`.
pub fn storage_config(db: Option<&Path>) -> Result<StorageConfig, ConfigError> {
  match db {
    Some(path) => Ok(StorageConfig::at(path)),
    None => StorageConfig::load(),
  }
}
