use std::collections::HashMap;

use crate::movable::{Aggregate, Composite, Id, Movable};

/// Configuración de un tipo anidado: dónde viven sus padres dentro de una
/// raíz y dónde viven sus hijos dentro de cada padre.
///
/// Para las temporadas la raíz y el padre coinciden (la serie); para los
/// episodios la raíz es la serie y el padre la temporada.
pub trait Nesting {
  type Root: Aggregate;
  type Parent: Movable + 'static;
  type Child: Movable + Composite + Clone + 'static;

  /// Nombres para mensajes y logs.
  const PARENT: &'static str;
  const CHILD: &'static str;

  fn parents(root: &Self::Root) -> Vec<&Self::Parent>;
  fn parent_mut(root: &mut Self::Root, index: usize) -> Option<&mut Self::Parent>;
  fn children(parent: &Self::Parent) -> &[Self::Child];
  fn children_mut(parent: &mut Self::Parent) -> &mut Vec<Self::Child>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentSlot {
  pub root: usize,
  pub parent: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSlot {
  pub root: usize,
  pub parent: usize,
  pub child: usize,
}

impl ChildSlot {
  pub fn parent_slot(&self) -> ParentSlot {
    ParentSlot { root: self.root, parent: self.parent }
  }
}

/// Índice `id -> hueco` de padres e hijos sobre un conjunto de raíces ya
/// cargado. Vive lo que dura una operación y evita repetir el recorrido
/// completo en cada búsqueda.
#[derive(Debug, Default)]
pub struct ChildIndex {
  parents: HashMap<Id, ParentSlot>,
  children: HashMap<Id, ChildSlot>,
}

impl ChildIndex {
  pub fn build<K: Nesting>(roots: &[K::Root]) -> Self {
    let mut index = Self::default();

    for (root_at, root) in roots.iter().enumerate() {
      for (parent_at, parent) in K::parents(root).into_iter().enumerate() {
        if let Some(id) = parent.id() {
          index.parents.insert(id, ParentSlot { root: root_at, parent: parent_at });
        }
        for (child_at, child) in K::children(parent).iter().enumerate() {
          if let Some(id) = child.id() {
            let slot = ChildSlot { root: root_at, parent: parent_at, child: child_at };
            index.children.insert(id, slot);
          }
        }
      }
    }

    index
  }

  pub fn parent(&self, id: Id) -> Option<ParentSlot> {
    self.parents.get(&id).copied()
  }

  pub fn child(&self, id: Id) -> Option<ChildSlot> {
    self.children.get(&id).copied()
  }
}

/// Recorrido lineal de todas las raíces, padres e hijos hasta dar con `id`.
pub fn find_child<K: Nesting>(roots: &[K::Root], id: Id) -> Option<&K::Child> {
  roots
    .iter()
    .flat_map(|root| K::parents(root))
    .flat_map(|parent| K::children(parent))
    .find(|child| child.id() == Some(id))
}

/// Hijos del padre situado en `slot`.
pub fn siblings<K: Nesting>(roots: &[K::Root], slot: ParentSlot) -> Option<&[K::Child]> {
  let root = roots.get(slot.root)?;
  K::parents(root).into_iter().nth(slot.parent).map(K::children)
}

pub fn siblings_mut<K: Nesting>(root: &mut K::Root, parent: usize) -> Option<&mut Vec<K::Child>> {
  K::parent_mut(root, parent).map(K::children_mut)
}
