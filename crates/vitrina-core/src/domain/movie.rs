use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::movable::{Aggregate, Composite, Id, impl_movable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  pub id: Option<Id>,
  /// Nombre local.
  pub name: String,
  pub original_name: String,
  pub year: i32,
  /// Duración en minutos.
  pub length: i32,
  pub language: Language,
  pub imdb_code: Option<i32>,
  pub genre_ids: Vec<Id>,
  /// Póster, si lo hay.
  pub picture: Option<Id>,
  pub note: String,
  pub position: i32,
}

impl_movable!(Movie);

impl Composite for Movie {}

impl Aggregate for Movie {
  const KIND: &'static str = "movie";
}
