use serde::{Deserialize, Serialize};

/// Idiomas de audio y subtítulos que maneja el catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
  #[default]
  Cz,
  En,
  Fr,
  Ja,
  Sk,
  De,
  Es,
}
