use std::marker::PhantomData;

use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::movable::{Id, Movable};
use crate::ordering::{Direction, assign_on_add, duplicate, move_entity, reindex, sort_by_position};
use crate::ports::{Code, Converter, Phase, Repository, Validator, Violation};
use crate::services::nesting::{self, ChildIndex, ChildSlot, Nesting, ParentSlot, find_child};
use crate::services::{inconsistent, validated_id};

/// Fachada de un tipo anidado (temporadas, episodios, canciones, libros).
///
/// Los hijos no se persisten por separado: cada operación carga las raíces,
/// localiza el padre dueño, muta su colección y escribe la raíz completa.
/// Las operaciones que reciben un padre exigen además que ese padre exista
/// (validado con el validador del tipo padre).
pub struct ChildFacade<K, C, R, V, PV> {
  converter: C,
  repository: R,
  validator: V,
  parent_validator: PV,
  _nesting: PhantomData<K>,
}

impl<K, C, R, V, PV> ChildFacade<K, C, R, V, PV>
where
  K: Nesting,
  C: Converter<Domain = K::Child>,
  R: Repository<K::Root>,
  V: Validator<C::Entity>,
{
  pub fn new(converter: C, repository: R, validator: V, parent_validator: PV) -> Self {
    Self { converter, repository, validator, parent_validator, _nesting: PhantomData }
  }

  /// Busca el hijo recorriendo todos los padres. La ausencia no es un error.
  pub fn get(&self, id: Option<Id>) -> Result<Option<C::Entity>, CoreError> {
    let id = id.ok_or_else(CoreError::id_null)?;
    debug!(kind = K::CHILD, id, "get");

    let roots = self.repository.get_all()?;
    Ok(find_child::<K>(&roots, id).map(|child| self.converter.to_entity(child)))
  }

  /// Hijos de `parent`, ordenados por posición.
  pub fn find<P>(&self, parent: &P) -> Result<Vec<C::Entity>, CoreError>
  where
    P: Movable,
    PV: Validator<P>,
  {
    self.check_parent(parent)?;

    let roots = self.repository.get_all()?;
    let slot = self.parent_slot(&roots, parent);
    let mut children = nesting::siblings::<K>(&roots, slot)
      .unwrap_or_else(|| inconsistent(K::PARENT, validated_id(parent, K::PARENT)))
      .to_vec();
    sort_by_position(&mut children);

    debug!(kind = K::CHILD, parent = ?parent.id(), count = children.len(), "find");
    Ok(self.converter.to_entities(&children))
  }

  /// Añade `child` al final de la colección de `parent`; la posición queda en `id - 1`.
  pub fn add<P>(&self, parent: &P, child: &C::Entity) -> Result<C::Entity, CoreError>
  where
    P: Movable,
    PV: Validator<P>,
  {
    self.check_parent(parent)?;
    self.check(child, &[Phase::New, Phase::Deep])?;

    let roots = self.repository.get_all()?;
    let slot = self.parent_slot(&roots, parent);
    let root = take(roots, slot.root);

    let mut domain = self.converter.to_domain(child);
    domain.set_id(None);
    let created = self.append(root, slot.parent, domain)?;

    info!(kind = K::CHILD, parent = ?parent.id(), id = ?created.id(), "added");
    Ok(self.converter.to_entity(&created))
  }

  /// Reemplaza los campos del hijo dentro de su padre; conserva id, posición
  /// y sus propias colecciones anidadas.
  pub fn update(&self, child: &C::Entity) -> Result<(), CoreError> {
    self.check(child, &[Phase::Exists, Phase::Deep])?;

    let (mut root, slot) = self.locate(child)?;
    let target = child_mut::<K>(&mut root, slot);
    let (id, position) = (target.id(), target.position());
    self.converter.apply(child, target);
    target.set_id(id);
    target.set_position(position);
    self.repository.update(&mut root)?;

    info!(kind = K::CHILD, id = ?id, "updated");
    Ok(())
  }

  pub fn remove(&self, child: &C::Entity) -> Result<(), CoreError> {
    self.check(child, &[Phase::Exists])?;

    let (mut root, slot) = self.locate(child)?;
    let removed = siblings_mut::<K>(&mut root, slot.parent).remove(slot.child);
    self.repository.update(&mut root)?;

    info!(kind = K::CHILD, id = ?removed.id(), "removed");
    Ok(())
  }

  /// Copia el hijo dentro del mismo padre, al final del orden de inserción.
  pub fn duplicate(&self, child: &C::Entity) -> Result<C::Entity, CoreError> {
    self.check(child, &[Phase::Exists])?;

    let (mut root, slot) = self.locate(child)?;
    let copy = duplicate(&siblings_mut::<K>(&mut root, slot.parent)[slot.child]);
    let created = self.append(root, slot.parent, copy)?;

    info!(kind = K::CHILD, source = ?child.id(), id = ?created.id(), "duplicated");
    Ok(self.converter.to_entity(&created))
  }

  pub fn move_up(&self, child: &C::Entity) -> Result<(), CoreError> {
    self.shift(child, Direction::Up)
  }

  pub fn move_down(&self, child: &C::Entity) -> Result<(), CoreError> {
    self.shift(child, Direction::Down)
  }

  /// Intercambia posiciones con el hermano vecino y escribe la raíz una vez.
  pub fn shift(&self, child: &C::Entity, direction: Direction) -> Result<(), CoreError> {
    self.check(child, &[Phase::Exists, direction.into()])?;

    let id = validated_id(child, K::CHILD);
    let (mut root, slot) = self.locate(child)?;
    let siblings = siblings_mut::<K>(&mut root, slot.parent);
    if move_entity(siblings, id, direction).is_none() {
      inconsistent(K::CHILD, id);
    }
    self.repository.update(&mut root)?;

    info!(kind = K::CHILD, id, %direction, "moved");
    Ok(())
  }

  /// Compacta las posiciones de cada padre por separado; solo se escriben
  /// las raíces en las que algo cambió.
  pub fn update_positions(&self) -> Result<(), CoreError> {
    let mut written = 0;

    for mut root in self.repository.get_all()? {
      let parents = K::parents(&root).len();
      let mut changed = false;
      for parent in 0..parents {
        if let Some(children) = nesting::siblings_mut::<K>(&mut root, parent) {
          changed |= !reindex(children).is_empty();
        }
      }
      if changed {
        self.repository.update(&mut root)?;
        written += 1;
      }
    }

    info!(kind = K::CHILD, roots = written, "positions updated");
    Ok(())
  }

  /// Inserta `child` en el padre `parent` de `root`, persiste para obtener el
  /// id y vuelve a persistir con la posición de alta.
  fn append(
    &self,
    mut root: K::Root,
    parent: usize,
    mut child: K::Child,
  ) -> Result<K::Child, CoreError> {
    child.set_position(0);
    let siblings = siblings_mut::<K>(&mut root, parent);
    siblings.push(child);
    let at = siblings.len() - 1;

    self.repository.update(&mut root)?;

    let created = &mut siblings_mut::<K>(&mut root, parent)[at];
    if !assign_on_add(created) {
      inconsistent(K::CHILD, "stored without id");
    }
    let created = created.clone();
    self.repository.update(&mut root)?;
    Ok(created)
  }

  /// Raíz dueña del hijo (ya validado como existente) y su hueco dentro de ella.
  fn locate(&self, child: &C::Entity) -> Result<(K::Root, ChildSlot), CoreError> {
    let id = validated_id(child, K::CHILD);
    let roots = self.repository.get_all()?;
    let Some(slot) = ChildIndex::build::<K>(&roots).child(id) else {
      inconsistent(K::CHILD, id);
    };
    let root = take(roots, slot.root);
    Ok((root, slot))
  }

  fn parent_slot<P: Movable>(&self, roots: &[K::Root], parent: &P) -> ParentSlot {
    let id = validated_id(parent, K::PARENT);
    match ChildIndex::build::<K>(roots).parent(id) {
      Some(slot) => slot,
      None => inconsistent(K::PARENT, id),
    }
  }

  fn check_parent<P>(&self, parent: &P) -> Result<(), CoreError>
  where
    PV: Validator<P>,
  {
    let violations: Vec<Violation> = self
      .parent_validator
      .validate(parent, &[Phase::Exists])?
      .into_iter()
      .map(|violation| match violation.code {
        Code::ItemNotExist => Violation::new(Code::ParentNotExist, violation.message),
        _ => violation,
      })
      .collect();
    self.reject(K::PARENT, &[Phase::Exists], violations)
  }

  fn check(&self, child: &C::Entity, phases: &[Phase]) -> Result<(), CoreError> {
    let violations = self.validator.validate(child, phases)?;
    self.reject(K::CHILD, phases, violations)
  }

  fn reject(
    &self,
    kind: &str,
    phases: &[Phase],
    violations: Vec<Violation>,
  ) -> Result<(), CoreError> {
    if violations.is_empty() {
      return Ok(());
    }

    warn!(kind, ?phases, count = violations.len(), "validation rejected");
    Err(CoreError::from_violations(violations))
  }
}

/// Saca la raíz `index` del vector cargado.
fn take<T>(mut roots: Vec<T>, index: usize) -> T {
  if index >= roots.len() {
    inconsistent("root slot", index);
  }
  roots.swap_remove(index)
}

/// Colección de hijos del padre `parent` dentro de una raíz ya extraída.
#[track_caller]
fn siblings_mut<K: Nesting>(root: &mut K::Root, parent: usize) -> &mut Vec<K::Child> {
  match nesting::siblings_mut::<K>(root, parent) {
    Some(children) => children,
    None => inconsistent(K::PARENT, format_args!("at slot {parent}")),
  }
}

#[track_caller]
fn child_mut<K: Nesting>(root: &mut K::Root, slot: ChildSlot) -> &mut K::Child {
  match siblings_mut::<K>(root, slot.parent).get_mut(slot.child) {
    Some(child) => child,
    None => inconsistent(K::CHILD, format_args!("at slot {}", slot.child)),
  }
}
