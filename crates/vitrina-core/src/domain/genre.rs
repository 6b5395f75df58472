use serde::{Deserialize, Serialize};

use crate::movable::{Aggregate, Composite, Id, impl_movable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
  pub id: Option<Id>,
  pub name: String,
  pub position: i32,
}

impl_movable!(Genre);

impl Composite for Genre {}

impl Aggregate for Genre {
  const KIND: &'static str = "genre";
}
