use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

/// Variable de entorno que fija un directorio base (modo portable).
pub const BASE_DIR_ENV: &str = "VITRINA_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("section [{section}]: {reason}")]
  Section { section: String, reason: String },
  #[error("config document: {0}")]
  Document(String),
}

impl ConfigError {
  pub(crate) fn section(section: &str, reason: impl ToString) -> Self {
    ConfigError::Section { section: section.to_string(), reason: reason.to_string() }
  }
}

/// Directorios donde Vitrina guarda su configuración y su base de datos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitrinaPaths {
  pub config_dir: PathBuf,
  pub data_dir: PathBuf,
}

impl VitrinaPaths {
  /// Todo bajo un mismo directorio: `config/` y `data/`.
  pub fn from_base(base: impl AsRef<Path>) -> Self {
    let base = base.as_ref();
    Self { config_dir: base.join("config"), data_dir: base.join("data") }
  }

  /// Directorios del sistema para la aplicación.
  pub fn system() -> Result<Self, ConfigError> {
    let dirs = ProjectDirs::from("com", "vitrina", "vitrina").ok_or(ConfigError::Directories)?;
    Ok(Self {
      config_dir: dirs.config_dir().to_path_buf(),
      data_dir: dirs.data_dir().to_path_buf(),
    })
  }

  /// `VITRINA_BASE_DIR` si está definida, si no los del sistema. Crea los
  /// directorios que falten.
  pub fn detect() -> Result<Self, ConfigError> {
    let paths = match std::env::var_os(BASE_DIR_ENV) {
      Some(base) if !base.is_empty() => Self::from_base(PathBuf::from(base)),
      _ => Self::system()?,
    };
    paths.ensure()?;
    Ok(paths)
  }

  pub fn ensure(&self) -> Result<(), ConfigError> {
    for dir in [&self.config_dir, &self.data_dir] {
      std::fs::create_dir_all(dir)?;
    }
    Ok(())
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("vitrina.toml")
  }

  /// Ubicación por defecto de la base SQLite.
  pub fn database_file(&self) -> PathBuf {
    self.data_dir.join("vitrina.db")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: &'static str,
    original: Option<std::ffi::OsString>,
  }

  impl EnvVarGuard {
    fn set(key: &'static str, value: &Path) -> Self {
      let original = std::env::var_os(key);
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key, original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(self.key, val) },
        None => unsafe { std::env::remove_var(self.key) },
      }
    }
  }

  #[test]
  fn base_dir_layout() {
    let paths = VitrinaPaths::from_base("/srv/vitrina");

    assert_eq!(paths.config_file(), Path::new("/srv/vitrina/config/vitrina.toml"));
    assert_eq!(paths.database_file(), Path::new("/srv/vitrina/data/vitrina.db"));
  }

  #[test]
  fn env_override_wins_and_creates_dirs() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::set(BASE_DIR_ENV, tmp.path());

    let paths = VitrinaPaths::detect().unwrap();

    assert_eq!(paths, VitrinaPaths::from_base(tmp.path()));
    assert!(paths.config_dir.is_dir());
    assert!(paths.data_dir.is_dir());
  }
}
