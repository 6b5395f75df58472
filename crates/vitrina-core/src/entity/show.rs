use serde::{Deserialize, Serialize};

use crate::domain::{self, Language};
use crate::entity::{note_to_domain, note_to_entity};
use crate::movable::{Id, impl_movable};
use crate::ports::Converter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Show {
  pub id: Option<Id>,
  pub name: String,
  pub original_name: String,
  pub imdb_code: Option<i32>,
  pub genre_ids: Vec<Id>,
  pub picture: Option<Id>,
  pub note: Option<String>,
  pub position: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Season {
  pub id: Option<Id>,
  pub number: i32,
  pub start_year: i32,
  pub end_year: i32,
  pub language: Language,
  pub subtitles: Vec<Language>,
  pub note: Option<String>,
  pub position: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
  pub id: Option<Id>,
  pub number: i32,
  pub name: String,
  pub length: i32,
  pub note: Option<String>,
  pub position: i32,
}

impl_movable!(Show, Season, Episode);

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowConverter;

impl Converter for ShowConverter {
  type Entity = Show;
  type Domain = domain::Show;

  fn to_entity(&self, domain: &domain::Show) -> Show {
    Show {
      id: domain.id,
      name: domain.name.clone(),
      original_name: domain.original_name.clone(),
      imdb_code: domain.imdb_code,
      genre_ids: domain.genre_ids.clone(),
      picture: domain.picture,
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Show) -> domain::Show {
    domain::Show {
      id: entity.id,
      name: entity.name.clone(),
      original_name: entity.original_name.clone(),
      imdb_code: entity.imdb_code,
      genre_ids: entity.genre_ids.clone(),
      picture: entity.picture,
      note: note_to_domain(&entity.note),
      position: entity.position,
      seasons: Vec::new(),
    }
  }

  fn apply(&self, entity: &Show, domain: &mut domain::Show) {
    let seasons = std::mem::take(&mut domain.seasons);
    *domain = self.to_domain(entity);
    domain.seasons = seasons;
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonConverter;

impl Converter for SeasonConverter {
  type Entity = Season;
  type Domain = domain::Season;

  fn to_entity(&self, domain: &domain::Season) -> Season {
    Season {
      id: domain.id,
      number: domain.number,
      start_year: domain.start_year,
      end_year: domain.end_year,
      language: domain.language,
      subtitles: domain.subtitles.clone(),
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Season) -> domain::Season {
    domain::Season {
      id: entity.id,
      number: entity.number,
      start_year: entity.start_year,
      end_year: entity.end_year,
      language: entity.language,
      subtitles: entity.subtitles.clone(),
      note: note_to_domain(&entity.note),
      position: entity.position,
      episodes: Vec::new(),
    }
  }

  fn apply(&self, entity: &Season, domain: &mut domain::Season) {
    let episodes = std::mem::take(&mut domain.episodes);
    *domain = self.to_domain(entity);
    domain.episodes = episodes;
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EpisodeConverter;

impl Converter for EpisodeConverter {
  type Entity = Episode;
  type Domain = domain::Episode;

  fn to_entity(&self, domain: &domain::Episode) -> Episode {
    Episode {
      id: domain.id,
      number: domain.number,
      name: domain.name.clone(),
      length: domain.length,
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Episode) -> domain::Episode {
    domain::Episode {
      id: entity.id,
      number: entity.number,
      name: entity.name.clone(),
      length: entity.length,
      note: note_to_domain(&entity.note),
      position: entity.position,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn apply_keeps_nested_episodes() {
    let converter = SeasonConverter;
    let mut stored = converter.to_domain(&Season { id: Some(4), number: 1, ..Season::default() });
    stored.episodes.push(domain::Episode {
      id: Some(40),
      number: 1,
      name: "Pilot".into(),
      length: 44,
      note: String::new(),
      position: 0,
    });

    let edited =
      Season { id: Some(4), number: 2, note: Some("re-dub".into()), ..Season::default() };
    converter.apply(&edited, &mut stored);

    assert_eq!(stored.number, 2);
    assert_eq!(stored.note, "re-dub");
    assert_eq!(stored.episodes.len(), 1);
    assert_eq!(converter.to_entity(&stored), edited);
  }
}
