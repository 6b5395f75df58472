use std::marker::PhantomData;

use crate::movable::{Aggregate, Movable};
use crate::ports::{Phase, RepoError, Repository, Validator, Violation};
use crate::validation::checks;
use crate::validation::rules::FieldRules;

/// Validador de un tipo raíz: existencia y límites de movimiento contra su
/// repositorio, campos con sus `FieldRules`.
pub struct RootValidator<A, R, F> {
  repository: R,
  rules: F,
  _aggregate: PhantomData<fn() -> A>,
}

impl<A, R, F> RootValidator<A, R, F> {
  pub fn new(repository: R, rules: F) -> Self {
    Self { repository, rules, _aggregate: PhantomData }
  }
}

impl<E, A, R, F> Validator<E> for RootValidator<A, R, F>
where
  E: Movable,
  A: Aggregate,
  R: Repository<A>,
  F: FieldRules<E>,
{
  fn validate(&self, entity: &E, phases: &[Phase]) -> Result<Vec<Violation>, RepoError> {
    let mut violations = Vec::new();

    for &phase in phases {
      match phase {
        Phase::New => checks::new_id(entity, &mut violations),
        Phase::Exists => match entity.id() {
          None => violations.push(checks::id_null()),
          Some(id) => {
            if self.repository.get(id)?.is_none() {
              violations.push(checks::not_exist(A::KIND, id));
            }
          }
        },
        Phase::Up | Phase::Down => {
          if let (Some(id), Some(direction)) = (entity.id(), phase.direction()) {
            let siblings = self.repository.get_all()?;
            checks::movable(&siblings, id, direction, A::KIND, &mut violations);
          }
        }
        Phase::Deep => self.rules.check(entity, &mut violations)?,
      }
    }

    Ok(violations)
  }
}
