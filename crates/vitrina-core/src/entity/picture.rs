use serde::{Deserialize, Serialize};

use crate::domain;
use crate::movable::{Id, impl_movable};
use crate::ports::Converter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
  pub id: Option<Id>,
  pub content: Vec<u8>,
  pub position: i32,
}

impl_movable!(Picture);

#[derive(Debug, Clone, Copy, Default)]
pub struct PictureConverter;

impl Converter for PictureConverter {
  type Entity = Picture;
  type Domain = domain::Picture;

  fn to_entity(&self, domain: &domain::Picture) -> Picture {
    Picture { id: domain.id, content: domain.content.clone(), position: domain.position }
  }

  fn to_domain(&self, entity: &Picture) -> domain::Picture {
    domain::Picture { id: entity.id, content: entity.content.clone(), position: entity.position }
  }
}
