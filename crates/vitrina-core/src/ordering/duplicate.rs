use crate::movable::{Composite, Movable};

/// Copia `source` como un hermano nuevo todavía sin persistir.
///
/// Se conservan todos los campos salvo los ids, tanto el propio como los de
/// cualquier descendiente, para que la persistencia genere identidades nuevas.
/// La posición se copia tal cual; el alta la recalcula después.
pub fn duplicate<T>(source: &T) -> T
where
  T: Movable + Composite + Clone,
{
  let mut copy = source.clone();
  copy.set_id(None);
  copy.visit_children_mut(&mut |child: &mut dyn Movable| child.set_id(None));
  copy
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::language::Language;
  use crate::domain::{Episode, Season, Show};

  fn show() -> Show {
    Show {
      id: Some(3),
      name: "Dark".into(),
      original_name: "Dark".into(),
      imdb_code: Some(5753856),
      genre_ids: vec![1],
      picture: None,
      note: "note".into(),
      position: 2,
      seasons: vec![Season {
        id: Some(30),
        number: 1,
        start_year: 2017,
        end_year: 2017,
        language: Language::De,
        subtitles: vec![Language::En],
        note: String::new(),
        position: 0,
        episodes: vec![Episode {
          id: Some(300),
          number: 1,
          name: "Secrets".into(),
          length: 51,
          note: String::new(),
          position: 0,
        }],
      }],
    }
  }

  #[test]
  fn duplicate_clears_every_identity_and_keeps_fields() {
    let source = show();

    let copy = duplicate(&source);

    assert_eq!(copy.id, None);
    assert_eq!(copy.seasons[0].id, None);
    assert_eq!(copy.seasons[0].episodes[0].id, None);
    assert_eq!(copy.name, source.name);
    assert_eq!(copy.imdb_code, source.imdb_code);
    assert_eq!(copy.seasons[0].episodes[0].name, "Secrets");
    assert_eq!(copy.position, source.position);
    assert_eq!(source.seasons[0].id, Some(30));
  }
}
