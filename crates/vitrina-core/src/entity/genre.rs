use serde::{Deserialize, Serialize};

use crate::domain;
use crate::movable::{Id, impl_movable};
use crate::ports::Converter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
  pub id: Option<Id>,
  pub name: String,
  pub position: i32,
}

impl_movable!(Genre);

#[derive(Debug, Clone, Copy, Default)]
pub struct GenreConverter;

impl Converter for GenreConverter {
  type Entity = Genre;
  type Domain = domain::Genre;

  fn to_entity(&self, domain: &domain::Genre) -> Genre {
    Genre { id: domain.id, name: domain.name.clone(), position: domain.position }
  }

  fn to_domain(&self, entity: &Genre) -> domain::Genre {
    domain::Genre { id: entity.id, name: entity.name.clone(), position: entity.position }
  }
}
