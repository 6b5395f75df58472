use std::marker::PhantomData;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use vitrina_core::movable::{Aggregate, Composite, Id, Movable};
use vitrina_core::ports::{RepoError, Repository};

use crate::models::{AggregateRow, NewAggregateRow, NewNestedIdRow};
use crate::schema::{aggregates, nested_ids};
use crate::{DbConnection, DbPool, StoreError};

/// `Repository` de un tipo raíz sobre la tabla `aggregates`.
///
/// Cada escritura corre en su propia transacción: la raíz y los ids de sus
/// hijos nuevos se guardan juntos o no se guarda nada, y el valor recibido
/// solo se modifica si la transacción se confirma.
pub struct SqliteStore<A> {
  pub(crate) pool: DbPool,
  pub(crate) _aggregate: PhantomData<fn() -> A>,
}

impl<A> Clone for SqliteStore<A> {
  fn clone(&self) -> Self {
    Self { pool: self.pool.clone(), _aggregate: PhantomData }
  }
}

impl<A> SqliteStore<A> {
  fn connection(&self) -> Result<DbConnection, StoreError> {
    Ok(self.pool.get()?)
  }
}

fn decode<A: DeserializeOwned + Movable>(row: AggregateRow) -> Result<A, StoreError> {
  let mut aggregate: A = serde_json::from_str(&row.body)?;
  aggregate.set_id(Some(row.id));
  aggregate.set_position(row.position);
  Ok(aggregate)
}

fn next_nested_id(conn: &mut SqliteConnection, root: Id) -> Result<Id, StoreError> {
  let id = diesel::insert_into(nested_ids::table)
    .values(&NewNestedIdRow { root_id: root })
    .returning(nested_ids::id)
    .get_result(conn)?;
  Ok(id)
}

/// Da id a los descendientes que aún no lo tienen.
fn issue_nested<A: Composite>(
  conn: &mut SqliteConnection,
  root: Id,
  aggregate: &mut A,
) -> Result<usize, StoreError> {
  let mut issued = 0;
  let mut failure = None;

  aggregate.visit_children_mut(&mut |child: &mut dyn Movable| {
    if failure.is_some() || child.id().is_some() {
      return;
    }
    match next_nested_id(conn, root) {
      Ok(id) => {
        child.set_id(Some(id));
        issued += 1;
      }
      Err(e) => failure = Some(e),
    }
  });

  match failure {
    Some(e) => Err(e),
    None => Ok(issued),
  }
}

fn write_body<A: Aggregate + Serialize>(
  conn: &mut SqliteConnection,
  id: Id,
  aggregate: &A,
) -> Result<(), StoreError> {
  let body = serde_json::to_string(aggregate)?;
  let updated = diesel::update(
    aggregates::table.filter(aggregates::id.eq(id)).filter(aggregates::kind.eq(A::KIND)),
  )
  .set((aggregates::position.eq(aggregate.position()), aggregates::body.eq(body)))
  .execute(conn)?;

  if updated == 0 {
    return Err(StoreError::Missing { kind: A::KIND, id });
  }
  Ok(())
}

impl<A> Repository<A> for SqliteStore<A>
where
  A: Aggregate + Serialize + DeserializeOwned,
{
  fn get_all(&self) -> Result<Vec<A>, RepoError> {
    let mut conn = self.connection()?;
    let rows = aggregates::table
      .filter(aggregates::kind.eq(A::KIND))
      .order(aggregates::id.asc())
      .select(AggregateRow::as_select())
      .load(&mut conn)
      .map_err(StoreError::from)?;

    Ok(rows.into_iter().map(decode).collect::<Result<Vec<A>, _>>()?)
  }

  fn get(&self, id: Id) -> Result<Option<A>, RepoError> {
    let mut conn = self.connection()?;
    let row = aggregates::table
      .filter(aggregates::id.eq(id))
      .filter(aggregates::kind.eq(A::KIND))
      .select(AggregateRow::as_select())
      .first(&mut conn)
      .optional()
      .map_err(StoreError::from)?;

    Ok(row.map(decode).transpose()?)
  }

  fn add(&self, aggregate: &mut A) -> Result<(), RepoError> {
    let mut conn = self.connection()?;
    let mut staged = aggregate.clone();

    conn.immediate_transaction::<_, StoreError, _>(|conn| {
      let id: Id = diesel::insert_into(aggregates::table)
        .values(&NewAggregateRow { kind: A::KIND, position: staged.position(), body: "{}" })
        .returning(aggregates::id)
        .get_result(conn)?;
      staged.set_id(Some(id));
      let issued = issue_nested(conn, id, &mut staged)?;
      write_body(conn, id, &staged)?;

      debug!(kind = A::KIND, id, nested = issued, "inserted");
      Ok(())
    })?;

    *aggregate = staged;
    Ok(())
  }

  fn update(&self, aggregate: &mut A) -> Result<(), RepoError> {
    let id = aggregate.id().ok_or(RepoError::NotFound)?;
    let mut conn = self.connection()?;
    let mut staged = aggregate.clone();

    conn.immediate_transaction::<_, StoreError, _>(|conn| {
      let issued = issue_nested(conn, id, &mut staged)?;
      write_body(conn, id, &staged)?;

      debug!(kind = A::KIND, id, nested = issued, "updated");
      Ok(())
    })?;

    *aggregate = staged;
    Ok(())
  }

  fn remove(&self, aggregate: &A) -> Result<(), RepoError> {
    let id = aggregate.id().ok_or(RepoError::NotFound)?;
    let mut conn = self.connection()?;

    conn.immediate_transaction::<_, StoreError, _>(|conn| {
      let deleted = diesel::delete(
        aggregates::table.filter(aggregates::id.eq(id)).filter(aggregates::kind.eq(A::KIND)),
      )
      .execute(conn)?;
      if deleted == 0 {
        return Err(StoreError::Missing { kind: A::KIND, id });
      }
      diesel::delete(nested_ids::table.filter(nested_ids::root_id.eq(id))).execute(conn)?;

      debug!(kind = A::KIND, id, "deleted");
      Ok(())
    })?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Database, StorageConfig};
  use tempfile::{TempDir, tempdir};
  use vitrina_core::domain::{Episode, Genre, Language, Season, Show};
  use vitrina_core::entity::{self, GenreConverter};
  use vitrina_core::services::ParentFacade;
  use vitrina_core::validation::RootValidator;
  use vitrina_core::validation::rules::GenreRules;

  fn database(tmp: &TempDir) -> Database {
    Database::open(&StorageConfig::at(tmp.path().join("vitrina.db"))).unwrap()
  }

  fn genre(name: &str) -> Genre {
    Genre { id: None, name: name.into(), position: 0 }
  }

  fn episode(name: &str) -> Episode {
    Episode { id: None, number: 1, name: name.into(), length: 30, note: String::new(), position: 0 }
  }

  fn show_with_one_season() -> Show {
    Show {
      id: None,
      name: "Dark".into(),
      original_name: "Dark".into(),
      imdb_code: None,
      genre_ids: vec![],
      picture: None,
      note: String::new(),
      position: 0,
      seasons: vec![Season {
        id: None,
        number: 1,
        start_year: 2017,
        end_year: 2017,
        language: Language::De,
        subtitles: vec![Language::En],
        note: String::new(),
        position: 0,
        episodes: vec![episode("Secrets"), episode("Lies")],
      }],
    }
  }

  #[test]
  fn add_then_read_back_by_kind() {
    let tmp = tempdir().unwrap();
    let db = database(&tmp);
    let genres = db.store::<Genre>();
    let shows = db.store::<Show>();

    let mut drama = genre("Drama");
    genres.add(&mut drama).unwrap();
    let mut dark = show_with_one_season();
    shows.add(&mut dark).unwrap();

    assert!(drama.id.is_some());
    assert_eq!(genres.get(drama.id.unwrap()).unwrap(), Some(drama.clone()));
    assert_eq!(genres.get_all().unwrap(), vec![drama.clone()]);
    assert_eq!(shows.get_all().unwrap().len(), 1);
    assert_eq!(genres.get(dark.id.unwrap()).unwrap(), None);
  }

  #[test]
  fn nested_children_get_unique_ids() {
    let tmp = tempdir().unwrap();
    let db = database(&tmp);
    let shows = db.store::<Show>();

    let mut dark = show_with_one_season();
    shows.add(&mut dark).unwrap();
    let season = &dark.seasons[0];
    let first: Vec<_> =
      std::iter::once(season.id).chain(season.episodes.iter().map(|e| e.id)).collect();
    assert!(first.iter().all(Option::is_some));

    dark.seasons[0].episodes.push(episode("Past and Present"));
    shows.update(&mut dark).unwrap();

    let stored = shows.get(dark.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored, dark);
    let mut ids: Vec<_> = stored.seasons[0].episodes.iter().map(|e| e.id.unwrap()).collect();
    ids.push(stored.seasons[0].id.unwrap());
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert_eq!(stored.seasons[0].episodes[0].id, first[1]);
  }

  #[test]
  fn writes_to_missing_rows_are_not_found() {
    let tmp = tempdir().unwrap();
    let db = database(&tmp);
    let genres = db.store::<Genre>();

    let mut ghost = Genre { id: Some(42), ..genre("Ghost") };
    assert!(matches!(genres.update(&mut ghost), Err(RepoError::NotFound)));
    assert!(matches!(genres.remove(&ghost), Err(RepoError::NotFound)));
    assert!(genres.get_all().unwrap().is_empty());
  }

  #[test]
  fn remove_deletes_only_the_row() {
    let tmp = tempdir().unwrap();
    let db = database(&tmp);
    let genres = db.store::<Genre>();
    let mut a = genre("A");
    let mut b = genre("B");
    genres.add(&mut a).unwrap();
    genres.add(&mut b).unwrap();

    genres.remove(&a).unwrap();

    assert_eq!(genres.get_all().unwrap(), vec![b]);
  }

  #[test]
  fn data_survives_reopening() {
    let tmp = tempdir().unwrap();
    let mut drama = genre("Drama");
    database(&tmp).store::<Genre>().add(&mut drama).unwrap();

    let reopened = database(&tmp);

    assert_eq!(reopened.store::<Genre>().get_all().unwrap(), vec![drama]);
  }

  #[test]
  fn facade_over_sqlite_orders_and_compacts() {
    let tmp = tempdir().unwrap();
    let db = database(&tmp);
    let store = db.store::<Genre>();
    let validator = RootValidator::new(store.clone(), GenreRules);
    let facade = ParentFacade::new(GenreConverter, store.clone(), validator);

    let created: Vec<_> = ["Drama", "Comedy", "Horror"]
      .into_iter()
      .map(|name| facade.add(&entity::Genre { name: name.into(), ..Default::default() }).unwrap())
      .collect();
    for genre in &created {
      assert_eq!(genre.position, genre.id.unwrap() - 1);
    }

    facade.move_up(&created[2]).unwrap();
    facade.remove(&created[0]).unwrap();
    facade.update_positions().unwrap();

    let listed: Vec<_> =
      facade.list().unwrap().into_iter().map(|g| (g.name, g.position)).collect();
    assert_eq!(listed, vec![("Horror".to_string(), 0), ("Comedy".to_string(), 1)]);
  }
}
