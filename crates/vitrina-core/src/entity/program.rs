use serde::{Deserialize, Serialize};

use crate::domain;
use crate::entity::{note_to_domain, note_to_entity};
use crate::movable::{Id, impl_movable};
use crate::ports::Converter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
  pub id: Option<Id>,
  pub name: String,
  pub wiki: Option<String>,
  pub media_count: i32,
  pub has_crack: bool,
  pub has_serial_key: bool,
  pub note: Option<String>,
  pub position: i32,
}

impl_movable!(Program);

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramConverter;

impl Converter for ProgramConverter {
  type Entity = Program;
  type Domain = domain::Program;

  fn to_entity(&self, domain: &domain::Program) -> Program {
    Program {
      id: domain.id,
      name: domain.name.clone(),
      wiki: domain.wiki.clone(),
      media_count: domain.media_count,
      has_crack: domain.has_crack,
      has_serial_key: domain.has_serial_key,
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Program) -> domain::Program {
    domain::Program {
      id: entity.id,
      name: entity.name.clone(),
      wiki: entity.wiki.clone(),
      media_count: entity.media_count,
      has_crack: entity.has_crack,
      has_serial_key: entity.has_serial_key,
      note: note_to_domain(&entity.note),
      position: entity.position,
    }
  }
}
