use std::marker::PhantomData;

use crate::movable::Movable;
use crate::ports::{Phase, RepoError, Repository, Validator, Violation};
use crate::services::nesting::{self, ChildIndex, Nesting, find_child};
use crate::validation::checks;
use crate::validation::rules::FieldRules;

/// Validador de un tipo anidado. La existencia y los hermanos se resuelven
/// recorriendo las raíces del repositorio, que se cargan una sola vez por
/// llamada.
pub struct ChildValidator<K, R, F> {
  repository: R,
  rules: F,
  _nesting: PhantomData<K>,
}

impl<K, R, F> ChildValidator<K, R, F> {
  pub fn new(repository: R, rules: F) -> Self {
    Self { repository, rules, _nesting: PhantomData }
  }
}

impl<K, R, F> ChildValidator<K, R, F>
where
  K: Nesting,
  R: Repository<K::Root>,
{
  fn roots<'a>(&self, cache: &'a mut Option<Vec<K::Root>>) -> Result<&'a [K::Root], RepoError> {
    if cache.is_none() {
      *cache = Some(self.repository.get_all()?);
    }
    Ok(cache.as_deref().unwrap_or(&[]))
  }
}

impl<E, K, R, F> Validator<E> for ChildValidator<K, R, F>
where
  E: Movable,
  K: Nesting,
  R: Repository<K::Root>,
  F: FieldRules<E>,
{
  fn validate(&self, entity: &E, phases: &[Phase]) -> Result<Vec<Violation>, RepoError> {
    let mut violations = Vec::new();
    let mut cache = None;

    for &phase in phases {
      match phase {
        Phase::New => checks::new_id(entity, &mut violations),
        Phase::Exists => match entity.id() {
          None => violations.push(checks::id_null()),
          Some(id) => {
            let roots = self.roots(&mut cache)?;
            if find_child::<K>(roots, id).is_none() {
              violations.push(checks::not_exist(K::CHILD, id));
            }
          }
        },
        Phase::Up | Phase::Down => {
          if let (Some(id), Some(direction)) = (entity.id(), phase.direction()) {
            let roots = self.roots(&mut cache)?;
            let slot = ChildIndex::build::<K>(roots).child(id);
            let siblings = slot
              .and_then(|slot| nesting::siblings::<K>(roots, slot.parent_slot()))
              .unwrap_or(&[]);
            checks::movable(siblings, id, direction, K::CHILD, &mut violations);
          }
        }
        Phase::Deep => self.rules.check(entity, &mut violations)?,
      }
    }

    Ok(violations)
  }
}
