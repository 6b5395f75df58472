use std::fmt;

use serde::{Deserialize, Serialize};

use crate::movable::{Id, Movable};
use crate::ordering::position::sorted_indexes;

/// Sentido de un movimiento dentro de la lista ordenada de hermanos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
  Up,
  Down,
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Direction::Up => f.write_str("up"),
      Direction::Down => f.write_str("down"),
    }
  }
}

/// Resultado de un movimiento: índices (dentro del slice original) de las dos
/// entidades cuyas posiciones se intercambiaron.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
  pub moved: usize,
  pub other: usize,
}

/// Busca la entidad `id` y su vecina en el sentido pedido.
fn neighbours<M: Movable>(siblings: &[M], id: Id, direction: Direction) -> Option<(usize, usize)> {
  let order = sorted_indexes(siblings);
  let at = order.iter().position(|&index| siblings[index].id() == Some(id))?;
  let next = match direction {
    Direction::Up => at.checked_sub(1)?,
    Direction::Down => at + 1,
  };
  Some((order[at], *order.get(next)?))
}

/// `true` si `id` está entre los hermanos y no es el primero (Up) ni el último (Down).
pub fn can_move<M: Movable>(siblings: &[M], id: Id, direction: Direction) -> bool {
  neighbours(siblings, id, direction).is_some()
}

/// Intercambia la posición de `id` con la de su vecina inmediata.
///
/// Solo cambian esas dos posiciones y el multiconjunto de posiciones se
/// conserva. Los límites los rechaza la validación antes de llegar aquí; si
/// aun así se pide un movimiento imposible, devuelve `None` sin tocar nada.
pub fn move_entity<M: Movable>(siblings: &mut [M], id: Id, direction: Direction) -> Option<Swap> {
  let (moved, other) = neighbours(siblings, id, direction)?;

  let moved_position = siblings[moved].position();
  let other_position = siblings[other].position();
  siblings[moved].set_position(other_position);
  siblings[other].set_position(moved_position);

  Some(Swap { moved, other })
}
