use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::movable::{Aggregate, Id, Movable};
use crate::ordering::{Direction, assign_on_add, duplicate, move_entity, reindex, sort_by_position};
use crate::ports::{Converter, Phase, Repository, Validator};
use crate::services::{inconsistent, validated_id};

/// Fachada de un tipo raíz (películas, juegos, géneros, series...).
///
/// Cada operación que escribe valida por completo y después muta una sola
/// vez: si alguna fase devuelve violaciones no se llama a la persistencia
/// para escribir y se devuelven todas juntas.
pub struct ParentFacade<C, R, V> {
  converter: C,
  repository: R,
  validator: V,
}

impl<C, R, V> ParentFacade<C, R, V>
where
  C: Converter,
  C::Domain: Aggregate,
  R: Repository<C::Domain>,
  V: Validator<C::Entity>,
{
  pub fn new(converter: C, repository: R, validator: V) -> Self {
    Self { converter, repository, validator }
  }

  fn kind() -> &'static str {
    <C::Domain as Aggregate>::KIND
  }

  /// Todas las entidades, ordenadas por posición.
  pub fn list(&self) -> Result<Vec<C::Entity>, CoreError> {
    let mut all = self.repository.get_all()?;
    sort_by_position(&mut all);
    debug!(kind = Self::kind(), count = all.len(), "list");
    Ok(self.converter.to_entities(&all))
  }

  pub fn get(&self, id: Option<Id>) -> Result<Option<C::Entity>, CoreError> {
    let id = id.ok_or_else(CoreError::id_null)?;
    debug!(kind = Self::kind(), id, "get");
    Ok(self.repository.get(id)?.map(|domain| self.converter.to_entity(&domain)))
  }

  /// Da de alta la entidad y la devuelve con su id y posición asignados.
  pub fn add(&self, entity: &C::Entity) -> Result<C::Entity, CoreError> {
    self.check(entity, &[Phase::New, Phase::Deep])?;

    let mut domain = self.converter.to_domain(entity);
    domain.set_id(None);
    let created = self.insert(domain)?;

    info!(kind = Self::kind(), id = ?created.id(), position = created.position(), "added");
    Ok(self.converter.to_entity(&created))
  }

  /// Reemplaza los campos; conserva id, posición y colecciones anidadas.
  pub fn update(&self, entity: &C::Entity) -> Result<(), CoreError> {
    self.check(entity, &[Phase::Exists, Phase::Deep])?;

    let mut stored = self.stored(entity)?;
    let (id, position) = (stored.id(), stored.position());
    self.converter.apply(entity, &mut stored);
    stored.set_id(id);
    stored.set_position(position);
    self.repository.update(&mut stored)?;

    info!(kind = Self::kind(), id = ?id, "updated");
    Ok(())
  }

  pub fn remove(&self, entity: &C::Entity) -> Result<(), CoreError> {
    self.check(entity, &[Phase::Exists])?;

    let stored = self.stored(entity)?;
    self.repository.remove(&stored)?;

    info!(kind = Self::kind(), id = ?stored.id(), "removed");
    Ok(())
  }

  /// Copia la entidad persistida como una nueva, que queda al final del orden
  /// de inserción (posición `id - 1`), no junto al original.
  pub fn duplicate(&self, entity: &C::Entity) -> Result<C::Entity, CoreError> {
    self.check(entity, &[Phase::Exists])?;

    let stored = self.stored(entity)?;
    let created = self.insert(duplicate(&stored))?;

    info!(kind = Self::kind(), source = ?stored.id(), id = ?created.id(), "duplicated");
    Ok(self.converter.to_entity(&created))
  }

  pub fn move_up(&self, entity: &C::Entity) -> Result<(), CoreError> {
    self.shift(entity, Direction::Up)
  }

  pub fn move_down(&self, entity: &C::Entity) -> Result<(), CoreError> {
    self.shift(entity, Direction::Down)
  }

  /// Intercambia la posición con la vecina inmediata; se escriben las dos.
  pub fn shift(&self, entity: &C::Entity, direction: Direction) -> Result<(), CoreError> {
    self.check(entity, &[Phase::Exists, direction.into()])?;

    let id = validated_id(entity, Self::kind());
    let mut all = self.repository.get_all()?;
    let Some(swap) = move_entity(&mut all, id, direction) else {
      inconsistent(Self::kind(), id);
    };
    self.repository.update(&mut all[swap.moved])?;
    self.repository.update(&mut all[swap.other])?;

    info!(kind = Self::kind(), id, %direction, other = ?all[swap.other].id(), "moved");
    Ok(())
  }

  /// Compacta las posiciones a `0..n`; solo se escriben las que cambian.
  pub fn update_positions(&self) -> Result<(), CoreError> {
    let mut all = self.repository.get_all()?;
    let changed = reindex(&mut all);
    for &index in &changed {
      self.repository.update(&mut all[index])?;
    }

    info!(kind = Self::kind(), total = all.len(), changed = changed.len(), "positions updated");
    Ok(())
  }

  /// Primera escritura con posición 0; la definitiva (`id - 1`) va en la segunda.
  fn insert(&self, mut domain: C::Domain) -> Result<C::Domain, CoreError> {
    domain.set_position(0);
    self.repository.add(&mut domain)?;
    if !assign_on_add(&mut domain) {
      inconsistent(Self::kind(), "stored without id");
    }
    self.repository.update(&mut domain)?;
    Ok(domain)
  }

  fn stored(&self, entity: &C::Entity) -> Result<C::Domain, CoreError> {
    let id = validated_id(entity, Self::kind());
    match self.repository.get(id)? {
      Some(domain) => Ok(domain),
      None => inconsistent(Self::kind(), id),
    }
  }

  fn check(&self, entity: &C::Entity, phases: &[Phase]) -> Result<(), CoreError> {
    let violations = self.validator.validate(entity, phases)?;
    if violations.is_empty() {
      return Ok(());
    }

    warn!(kind = Self::kind(), ?phases, count = violations.len(), "validation rejected");
    Err(CoreError::from_violations(violations))
  }
}
