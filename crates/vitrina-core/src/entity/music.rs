use serde::{Deserialize, Serialize};

use crate::domain;
use crate::entity::{note_to_domain, note_to_entity};
use crate::movable::{Id, impl_movable};
use crate::ports::Converter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Music {
  pub id: Option<Id>,
  pub name: String,
  pub wiki: Option<String>,
  pub media_count: i32,
  pub note: Option<String>,
  pub position: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
  pub id: Option<Id>,
  pub name: String,
  pub length: i32,
  pub note: Option<String>,
  pub position: i32,
}

impl_movable!(Music, Song);

#[derive(Debug, Clone, Copy, Default)]
pub struct MusicConverter;

impl Converter for MusicConverter {
  type Entity = Music;
  type Domain = domain::Music;

  fn to_entity(&self, domain: &domain::Music) -> Music {
    Music {
      id: domain.id,
      name: domain.name.clone(),
      wiki: domain.wiki.clone(),
      media_count: domain.media_count,
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Music) -> domain::Music {
    domain::Music {
      id: entity.id,
      name: entity.name.clone(),
      wiki: entity.wiki.clone(),
      media_count: entity.media_count,
      note: note_to_domain(&entity.note),
      position: entity.position,
      songs: Vec::new(),
    }
  }

  fn apply(&self, entity: &Music, domain: &mut domain::Music) {
    let songs = std::mem::take(&mut domain.songs);
    *domain = self.to_domain(entity);
    domain.songs = songs;
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SongConverter;

impl Converter for SongConverter {
  type Entity = Song;
  type Domain = domain::Song;

  fn to_entity(&self, domain: &domain::Song) -> Song {
    Song {
      id: domain.id,
      name: domain.name.clone(),
      length: domain.length,
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Song) -> domain::Song {
    domain::Song {
      id: entity.id,
      name: entity.name.clone(),
      length: entity.length,
      note: note_to_domain(&entity.note),
      position: entity.position,
    }
  }
}
