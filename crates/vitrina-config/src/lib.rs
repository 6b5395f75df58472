mod backend;
mod io;
mod paths;

pub use backend::TomlConfigBackend;
pub use io::atomic_write_str;
pub use paths::{ConfigError, VitrinaPaths};

use once_cell::sync::Lazy;

/// Directorios resueltos una sola vez por proceso.
pub static PATHS: Lazy<VitrinaPaths> =
  Lazy::new(|| VitrinaPaths::detect().expect("no se pudieron resolver los directorios de Vitrina"));

pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> =
  Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
