use std::fs;
use std::io::ErrorKind;

use serde::Serialize;
use serde::de::DeserializeOwned;
use toml_edit::{DocumentMut, Item, Table};

use crate::paths::{ConfigError, VitrinaPaths};

/// `vitrina.toml`: una tabla por sección. Se lee con `toml` (serde) y se
/// reescribe con `toml_edit` para no perder lo que el usuario escribió a mano.
pub struct TomlConfigBackend {
  paths: VitrinaPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: VitrinaPaths) -> Self {
    Self { paths }
  }

  /// Carga `[section]`, o `T::default()` si el archivo o la sección no existen.
  /// Las claves ausentes se resuelven con los `#[serde(default)]` de `T`.
  pub fn load_section<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(content) = self.read()? else {
      return Ok(T::default());
    };

    let document: toml::Table = toml::from_str(&content)?;
    match document.get(section) {
      Some(table) => table.clone().try_into().map_err(|e| ConfigError::section(section, e)),
      None => Ok(T::default()),
    }
  }

  /// Escribe `[section]` clave a clave sobre la tabla existente. Comentarios,
  /// formato y el resto de secciones quedan como estaban.
  pub fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let mut document = match self.read()? {
      Some(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Document(e.to_string()))?
      }
      None => DocumentMut::new(),
    };

    let fresh = toml::to_string(value)
      .map_err(|e| ConfigError::section(section, e))?
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::section(section, e))?;

    match document.get_mut(section).and_then(Item::as_table_mut) {
      Some(table) => merge(table, fresh.as_table()),
      None => {
        document.insert(section, Item::Table(fresh.as_table().clone()));
      }
    }

    crate::io::atomic_write_str(&self.paths.config_file(), &document.to_string())?;
    Ok(())
  }

  fn read(&self) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(self.paths.config_file()) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }
}

/// Vuelca `fresh` sobre `target`. Los valores conservan la decoración de la
/// clave y los comentarios al final de línea; las claves que `fresh` ya no
/// trae se quitan.
fn merge(target: &mut Table, fresh: &Table) {
  target.retain(|key, _| fresh.contains_key(key));

  for (key, item) in fresh.iter() {
    if !target.contains_key(key) {
      target.insert(key, item.clone());
      continue;
    }

    match (&mut target[key], item) {
      (Item::Value(old), Item::Value(new)) => {
        let decor = old.decor().clone();
        *old = new.clone();
        *old.decor_mut() = decor;
      }
      (Item::Table(old), Item::Table(new)) => merge(old, new),
      (slot, _) => *slot = item.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::{TempDir, tempdir};

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    size: u32,
    label: Option<String>,
  }

  fn backend_in(tmp: &TempDir) -> (TomlConfigBackend, std::path::PathBuf) {
    let paths = VitrinaPaths::from_base(tmp.path());
    paths.ensure().unwrap();
    let file = paths.config_file();
    (TomlConfigBackend::new(paths), file)
  }

  #[test]
  fn missing_file_or_section_yields_default() {
    let tmp = tempdir().unwrap();
    let (backend, file) = backend_in(&tmp);

    assert_eq!(backend.load_section::<Sample>("sample").unwrap(), Sample::default());

    fs::write(&file, "[other]\nkeep = true\n").unwrap();
    assert_eq!(backend.load_section::<Sample>("sample").unwrap(), Sample::default());
  }

  #[test]
  fn save_then_load_section() {
    let tmp = tempdir().unwrap();
    let (backend, _) = backend_in(&tmp);
    let sample = Sample { name: "vitrina".into(), size: 4, label: Some("main".into()) };

    backend.save_section("sample", &sample).unwrap();

    assert_eq!(backend.load_section::<Sample>("sample").unwrap(), sample);
  }

  #[test]
  fn save_keeps_comments_inside_and_around_the_section() {
    let tmp = tempdir().unwrap();
    let (backend, file) = backend_in(&tmp);
    fs::write(
      &file,
      "# mi configuración\n[sample]\n# nombre visible\nname = \"old\" # a mano\nsize = 1\n\
       label = \"gone\"\n\n[other]\nkeep = true\n",
    )
    .unwrap();

    backend.save_section("sample", &Sample { name: "new".into(), size: 2, label: None }).unwrap();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.starts_with("# mi configuración\n[sample]\n"));
    assert!(content.contains("# nombre visible\nname = \"new\" # a mano\n"));
    assert!(content.contains("size = 2"));
    assert!(!content.contains("label"));
    assert!(content.contains("[other]\nkeep = true"));
  }

  #[test]
  fn broken_document_is_reported_not_overwritten() {
    let tmp = tempdir().unwrap();
    let (backend, file) = backend_in(&tmp);
    fs::write(&file, "[sample\nname = ").unwrap();

    let err = backend.save_section("sample", &Sample::default()).unwrap_err();

    assert!(matches!(err, ConfigError::Document(_)));
    assert_eq!(fs::read_to_string(&file).unwrap(), "[sample\nname = ");
  }
}
