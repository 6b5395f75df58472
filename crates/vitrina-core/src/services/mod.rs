pub mod child_facade;
pub mod kinds;
pub mod nesting;
pub mod parent_facade;

pub use child_facade::ChildFacade;
pub use kinds::{CategoryBooks, MusicSongs, SeasonEpisodes, ShowSeasons};
pub use nesting::{ChildIndex, ChildSlot, Nesting, ParentSlot};
pub use parent_facade::ParentFacade;

use std::fmt;

use crate::movable::{Id, Movable};

/// Fallo de consistencia interna: algo que la validación acaba de confirmar
/// no aparece al recorrer los datos. No es un error de usuario y no se
/// devuelve como valor.
#[track_caller]
pub(crate) fn inconsistent(kind: &str, id: impl fmt::Display) -> ! {
  tracing::error!(kind, %id, "internal consistency failure");
  panic!("unknown {kind} {id}")
}

/// Id de una entidad que ya pasó la fase `Exists`.
#[track_caller]
pub(crate) fn validated_id<M: Movable + ?Sized>(entity: &M, kind: &str) -> Id {
  match entity.id() {
    Some(id) => id,
    None => inconsistent(kind, "without id"),
  }
}
