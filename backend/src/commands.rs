use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use vitrina_core::CoreError;
use vitrina_core::entity;
use vitrina_core::movable::{Aggregate, Movable};
use vitrina_core::ports::{Converter, Repository, Validator};
use vitrina_core::services::{ChildFacade, Nesting, ParentFacade};

use crate::catalog::Catalog;
use crate::cli::{Kind, Op, Request};

/// Resultado de una orden que terminó sin error.
#[derive(Debug, PartialEq)]
pub enum Outcome {
  Done,
  Value(Value),
  /// `get` no encontró nada.
  Missing,
}

#[derive(Debug, Error)]
pub enum CommandError {
  #[error(transparent)]
  Core(#[from] CoreError),
  #[error("{0} needs --json")]
  MissingJson(Op),
  #[error("invalid --json: {0}")]
  Json(#[from] serde_json::Error),
}

impl CommandError {
  /// 2 para entradas inválidas, 3 para "no existe", 1 para el resto.
  pub fn exit_code(&self) -> u8 {
    match self {
      CommandError::Core(CoreError::NotFound(_)) => 3,
      CommandError::Core(CoreError::Invalid(_) | CoreError::Argument(_)) => 2,
      CommandError::Core(CoreError::Repository(_)) => 1,
      CommandError::MissingJson(_) | CommandError::Json(_) => 2,
    }
  }
}

pub fn dispatch(
  catalog: &Catalog,
  kind: Kind,
  op: Op,
  request: &Request,
) -> Result<Outcome, CommandError> {
  debug!(?kind, %op, id = ?request.id, parent = ?request.parent, "dispatch");

  match kind {
    Kind::Genres => root(&catalog.genres, op, request),
    Kind::Movies => root(&catalog.movies, op, request),
    Kind::Games => root(&catalog.games, op, request),
    Kind::Programs => root(&catalog.programs, op, request),
    Kind::Pictures => root(&catalog.pictures, op, request),
    Kind::Music => root(&catalog.music, op, request),
    Kind::Shows => root(&catalog.shows, op, request),
    Kind::BookCategories => root(&catalog.book_categories, op, request),
    Kind::Songs => child::<entity::Music, _, _, _, _, _>(&catalog.songs, op, request),
    Kind::Seasons => child::<entity::Show, _, _, _, _, _>(&catalog.seasons, op, request),
    Kind::Episodes => child::<entity::Season, _, _, _, _, _>(&catalog.episodes, op, request),
    Kind::Books => child::<entity::BookCategory, _, _, _, _, _>(&catalog.books, op, request),
  }
}

fn root<C, R, V>(
  facade: &ParentFacade<C, R, V>,
  op: Op,
  request: &Request,
) -> Result<Outcome, CommandError>
where
  C: Converter,
  C::Domain: Aggregate,
  C::Entity: Serialize + DeserializeOwned + Default,
  R: Repository<C::Domain>,
  V: Validator<C::Entity>,
{
  let outcome = match op {
    Op::List => value(&facade.list()?)?,
    Op::Get => found(facade.get(request.id)?)?,
    Op::Add => value(&facade.add(&input(op, request)?)?)?,
    Op::Update => {
      facade.update(&input(op, request)?)?;
      Outcome::Done
    }
    Op::Remove => {
      facade.remove(&target(request)?)?;
      Outcome::Done
    }
    Op::Duplicate => value(&facade.duplicate(&target(request)?)?)?,
    Op::MoveUp => {
      facade.move_up(&target(request)?)?;
      Outcome::Done
    }
    Op::MoveDown => {
      facade.move_down(&target(request)?)?;
      Outcome::Done
    }
    Op::UpdatePositions => {
      facade.update_positions()?;
      Outcome::Done
    }
  };
  Ok(outcome)
}

/// Igual que `root`, con `list` y `add` referidos al padre de `--parent`.
fn child<P, K, C, R, V, PV>(
  facade: &ChildFacade<K, C, R, V, PV>,
  op: Op,
  request: &Request,
) -> Result<Outcome, CommandError>
where
  P: Movable + Default,
  K: Nesting,
  C: Converter<Domain = K::Child>,
  C::Entity: Serialize + DeserializeOwned + Default,
  R: Repository<K::Root>,
  V: Validator<C::Entity>,
  PV: Validator<P>,
{
  let outcome = match op {
    Op::List => value(&facade.find(&parent::<P>(request))?)?,
    Op::Get => found(facade.get(request.id)?)?,
    Op::Add => value(&facade.add(&parent::<P>(request), &input(op, request)?)?)?,
    Op::Update => {
      facade.update(&input(op, request)?)?;
      Outcome::Done
    }
    Op::Remove => {
      facade.remove(&target(request)?)?;
      Outcome::Done
    }
    Op::Duplicate => value(&facade.duplicate(&target(request)?)?)?,
    Op::MoveUp => {
      facade.move_up(&target(request)?)?;
      Outcome::Done
    }
    Op::MoveDown => {
      facade.move_down(&target(request)?)?;
      Outcome::Done
    }
    Op::UpdatePositions => {
      facade.update_positions()?;
      Outcome::Done
    }
  };
  Ok(outcome)
}

fn value<T: Serialize>(value: &T) -> Result<Outcome, CommandError> {
  Ok(Outcome::Value(serde_json::to_value(value)?))
}

fn found<T: Serialize>(entity: Option<T>) -> Result<Outcome, CommandError> {
  match entity {
    Some(entity) => value(&entity),
    None => Ok(Outcome::Missing),
  }
}

/// Entidad de `--json`; `--id`, si viene, reemplaza al id del JSON.
fn input<E>(op: Op, request: &Request) -> Result<E, CommandError>
where
  E: DeserializeOwned + Movable,
{
  let json = request.json.as_deref().ok_or(CommandError::MissingJson(op))?;
  let mut entity: E = serde_json::from_str(json)?;
  if request.id.is_some() {
    entity.set_id(request.id);
  }
  Ok(entity)
}

/// Entidad identificada solo por `--id` (o la de `--json`, si se pasa).
fn target<E>(request: &Request) -> Result<E, CommandError>
where
  E: DeserializeOwned + Movable + Default,
{
  let mut entity = match request.json.as_deref() {
    Some(json) => serde_json::from_str(json)?,
    None => E::default(),
  };
  if request.id.is_some() {
    entity.set_id(request.id);
  }
  Ok(entity)
}

fn parent<P: Movable + Default>(request: &Request) -> P {
  let mut parent = P::default();
  parent.set_id(request.parent);
  parent
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use tempfile::{TempDir, tempdir};
  use vitrina_core::ports::Code;
  use vitrina_storage::{Database, StorageConfig};

  fn catalog(tmp: &TempDir) -> Catalog {
    let db = Database::open(&StorageConfig::at(tmp.path().join("vitrina.db"))).unwrap();
    Catalog::new(&db)
  }

  fn request(id: Option<i32>, parent: Option<i32>, json: Option<Value>) -> Request {
    Request { id, parent, json: json.map(|j| j.to_string()) }
  }

  fn run(catalog: &Catalog, kind: Kind, op: Op, request: Request) -> Outcome {
    dispatch(catalog, kind, op, &request).unwrap()
  }

  fn id_of(outcome: &Outcome) -> i32 {
    match outcome {
      Outcome::Value(value) => value["id"].as_i64().unwrap() as i32,
      other => panic!("expected a value, got {other:?}"),
    }
  }

  #[test]
  fn roots_are_added_moved_and_listed() {
    let tmp = tempdir().unwrap();
    let catalog = catalog(&tmp);

    let add = |name: &str| {
      run(&catalog, Kind::Genres, Op::Add, request(None, None, Some(json!({ "name": name }))))
    };
    let first = add("Drama");
    let second = add("Comedy");
    run(&catalog, Kind::Genres, Op::MoveUp, request(Some(id_of(&second)), None, None));

    let Outcome::Value(listed) = run(&catalog, Kind::Genres, Op::List, Request::default()) else {
      panic!("list returns a value");
    };
    let names: Vec<_> = listed.as_array().unwrap().iter().map(|g| g["name"].clone()).collect();
    assert_eq!(names, vec![json!("Comedy"), json!("Drama")]);
    assert_eq!(
      run(&catalog, Kind::Genres, Op::Get, request(Some(id_of(&first)), None, None)),
      Outcome::Value(json!({"id": id_of(&first), "name": "Drama", "position": 1}))
    );
  }

  #[test]
  fn children_are_listed_per_parent() {
    let tmp = tempdir().unwrap();
    let catalog = catalog(&tmp);
    let show = run(
      &catalog,
      Kind::Shows,
      Op::Add,
      request(None, None, Some(json!({"name": "Dark", "original_name": "Dark"}))),
    );
    let season = json!({"number": 1, "start_year": 2017, "end_year": 2017});

    let added =
      run(&catalog, Kind::Seasons, Op::Add, request(None, Some(id_of(&show)), Some(season)));
    let Outcome::Value(listed) =
      run(&catalog, Kind::Seasons, Op::List, request(None, Some(id_of(&show)), None))
    else {
      panic!("list returns a value");
    };

    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"].as_i64(), Some(id_of(&added) as i64));
  }

  #[test]
  fn failures_map_to_exit_codes() {
    let tmp = tempdir().unwrap();
    let catalog = catalog(&tmp);

    let missing_parent =
      dispatch(&catalog, Kind::Seasons, Op::List, &request(None, Some(99), None)).unwrap_err();
    assert_eq!(missing_parent.exit_code(), 3);

    let no_parent = dispatch(&catalog, Kind::Episodes, Op::List, &Request::default()).unwrap_err();
    assert_eq!(no_parent.exit_code(), 2);
    let CommandError::Core(core) = &no_parent else { panic!("core error expected") };
    assert_eq!(core.violations()[0].code, Code::IdNull);

    let nameless = request(None, None, Some(json!({"media_count": 1})));
    let empty_name = dispatch(&catalog, Kind::Games, Op::Add, &nameless).unwrap_err();
    assert_eq!(empty_name.exit_code(), 2);

    let no_json = dispatch(&catalog, Kind::Movies, Op::Add, &Request::default()).unwrap_err();
    assert!(matches!(no_json, CommandError::MissingJson(Op::Add)));

    assert_eq!(
      run(&catalog, Kind::Books, Op::Get, request(Some(5), None, None)),
      Outcome::Missing
    );
    let update_missing = dispatch(
      &catalog,
      Kind::Programs,
      Op::Update,
      &request(Some(5), None, Some(json!({"name": "Vim", "media_count": 1}))),
    )
    .unwrap_err();
    assert_eq!(update_missing.exit_code(), 3);
  }
}
