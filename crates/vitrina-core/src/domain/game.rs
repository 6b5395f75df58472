use serde::{Deserialize, Serialize};

use crate::movable::{Aggregate, Composite, Id, impl_movable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
  pub id: Option<Id>,
  pub name: String,
  pub wiki: Option<String>,
  /// Número de discos o soportes.
  pub media_count: i32,
  pub has_crack: bool,
  pub has_serial_key: bool,
  pub note: String,
  pub position: i32,
}

impl_movable!(Game);

impl Composite for Game {}

impl Aggregate for Game {
  const KIND: &'static str = "game";
}
