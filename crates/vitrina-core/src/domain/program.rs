use serde::{Deserialize, Serialize};

use crate::movable::{Aggregate, Composite, Id, impl_movable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
  pub id: Option<Id>,
  pub name: String,
  pub wiki: Option<String>,
  pub media_count: i32,
  pub has_crack: bool,
  pub has_serial_key: bool,
  pub note: String,
  pub position: i32,
}

impl_movable!(Program);

impl Composite for Program {}

impl Aggregate for Program {
  const KIND: &'static str = "program";
}
