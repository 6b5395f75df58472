use std::cmp::Ordering;

use crate::movable::{Id, Movable};

/// Posición de alta para una entidad cuyo id generado es `id`.
///
/// El orden de inserción coincide así con el orden posicional sin tener que
/// consultar la posición máxima.
pub fn position_for(id: Id) -> i32 {
  id - 1
}

/// Fija `position = id - 1`. Devuelve `false` si la entidad todavía no tiene id.
pub fn assign_on_add<M: Movable + ?Sized>(entity: &mut M) -> bool {
  match entity.id() {
    Some(id) => {
      entity.set_position(position_for(id));
      true
    }
    None => false,
  }
}

/// Orden canónico: posición ascendente y, en caso de empate, id ascendente.
pub fn compare<M: Movable>(left: &M, right: &M) -> Ordering {
  left.position().cmp(&right.position()).then_with(|| left.id().cmp(&right.id()))
}

pub fn sort_by_position<M: Movable>(items: &mut [M]) {
  items.sort_by(compare);
}

/// Índices de `items` en orden canónico, sin mover los elementos.
pub(crate) fn sorted_indexes<M: Movable>(items: &[M]) -> Vec<usize> {
  let mut order: Vec<usize> = (0..items.len()).collect();
  order.sort_by(|&a, &b| compare(&items[a], &items[b]));
  order
}

/// Reasigna posiciones compactas `0..n` respetando el orden actual.
///
/// Los elementos no cambian de sitio dentro del slice; solo cambia su
/// `position`. Devuelve los índices cuya posición cambió.
pub fn reindex<M: Movable>(siblings: &mut [M]) -> Vec<usize> {
  let mut changed = Vec::new();

  for (position, index) in sorted_indexes(siblings).into_iter().enumerate() {
    let position = position as i32;
    let item = &mut siblings[index];
    if item.position() != position {
      item.set_position(position);
      changed.push(index);
    }
  }

  changed
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Genre;

  fn genre(id: Option<Id>, position: i32) -> Genre {
    Genre { id, name: format!("genre-{position}"), position }
  }

  fn positions(items: &[Genre]) -> Vec<i32> {
    items.iter().map(|g| g.position).collect()
  }

  #[test]
  fn assign_on_add_uses_generated_id() {
    let mut g = genre(Some(7), 100);
    assert!(assign_on_add(&mut g));
    assert_eq!(g.position, 6);

    let mut unsaved = genre(None, 3);
    assert!(!assign_on_add(&mut unsaved));
    assert_eq!(unsaved.position, 3);
  }

  #[test]
  fn reindex_closes_gaps_without_reordering_storage() {
    let mut items = vec![genre(Some(1), 9), genre(Some(2), 2), genre(Some(3), 5)];

    let changed = reindex(&mut items);

    assert_eq!(positions(&items), vec![2, 0, 1]);
    assert_eq!(changed.len(), 3);
  }

  #[test]
  fn reindex_breaks_ties_by_id() {
    let mut items = vec![genre(Some(4), 1), genre(Some(2), 1), genre(None, 1)];

    reindex(&mut items);

    assert_eq!(positions(&items), vec![2, 1, 0]);
  }

  #[test]
  fn reindex_is_idempotent() {
    let mut items = vec![genre(Some(1), 40), genre(Some(2), -3), genre(Some(3), 7)];

    reindex(&mut items);
    let once = items.clone();
    let changed = reindex(&mut items);

    assert_eq!(items, once);
    assert!(changed.is_empty());
    let mut sorted = positions(&items);
    sorted.sort();
    assert_eq!(sorted, vec![0, 1, 2]);
  }

  #[test]
  fn reindex_of_empty_set_is_noop() {
    let mut items: Vec<Genre> = Vec::new();
    assert!(reindex(&mut items).is_empty());
  }
}
