use serde::{Deserialize, Serialize};

use crate::domain::{self, Language};
use crate::entity::{note_to_domain, note_to_entity};
use crate::movable::{Id, impl_movable};
use crate::ports::Converter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
  pub id: Option<Id>,
  pub name: String,
  pub original_name: String,
  pub year: i32,
  pub length: i32,
  pub language: Language,
  pub imdb_code: Option<i32>,
  pub genre_ids: Vec<Id>,
  pub picture: Option<Id>,
  pub note: Option<String>,
  pub position: i32,
}

impl_movable!(Movie);

#[derive(Debug, Clone, Copy, Default)]
pub struct MovieConverter;

impl Converter for MovieConverter {
  type Entity = Movie;
  type Domain = domain::Movie;

  fn to_entity(&self, domain: &domain::Movie) -> Movie {
    Movie {
      id: domain.id,
      name: domain.name.clone(),
      original_name: domain.original_name.clone(),
      year: domain.year,
      length: domain.length,
      language: domain.language,
      imdb_code: domain.imdb_code,
      genre_ids: domain.genre_ids.clone(),
      picture: domain.picture,
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Movie) -> domain::Movie {
    domain::Movie {
      id: entity.id,
      name: entity.name.clone(),
      original_name: entity.original_name.clone(),
      year: entity.year,
      length: entity.length,
      language: entity.language,
      imdb_code: entity.imdb_code,
      genre_ids: entity.genre_ids.clone(),
      picture: entity.picture,
      note: note_to_domain(&entity.note),
      position: entity.position,
    }
  }
}
