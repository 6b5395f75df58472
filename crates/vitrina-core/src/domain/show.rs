use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::movable::{Aggregate, Composite, Id, Movable, impl_movable};

/// Serie: raíz de agregado de dos niveles (temporadas y episodios).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
  pub id: Option<Id>,
  pub name: String,
  pub original_name: String,
  pub imdb_code: Option<i32>,
  pub genre_ids: Vec<Id>,
  pub picture: Option<Id>,
  pub note: String,
  pub position: i32,
  pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
  pub id: Option<Id>,
  /// Número de temporada (1..n).
  pub number: i32,
  pub start_year: i32,
  pub end_year: i32,
  pub language: Language,
  pub subtitles: Vec<Language>,
  pub note: String,
  pub position: i32,
  pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
  pub id: Option<Id>,
  pub number: i32,
  pub name: String,
  /// Duración en minutos.
  pub length: i32,
  pub note: String,
  pub position: i32,
}

impl_movable!(Show, Season, Episode);

impl Composite for Show {
  fn visit_children_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Movable)) {
    for season in &mut self.seasons {
      visit(season);
      season.visit_children_mut(visit);
    }
  }
}

impl Composite for Season {
  fn visit_children_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Movable)) {
    for episode in &mut self.episodes {
      visit(episode);
    }
  }
}

impl Composite for Episode {}

impl Aggregate for Show {
  const KIND: &'static str = "show";
}
