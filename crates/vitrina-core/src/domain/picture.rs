use serde::{Deserialize, Serialize};

use crate::movable::{Aggregate, Composite, Id, impl_movable};

/// Imagen (portada, póster) referenciada desde películas y series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
  pub id: Option<Id>,
  /// Bytes de la imagen tal como se subieron.
  pub content: Vec<u8>,
  pub position: i32,
}

impl_movable!(Picture);

impl Composite for Picture {}

impl Aggregate for Picture {
  const KIND: &'static str = "picture";
}
