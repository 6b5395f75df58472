use serde::{Deserialize, Serialize};

use crate::movable::{Aggregate, Composite, Id, Movable, impl_movable};

/// Un álbum (o colección) de música con sus canciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
  pub id: Option<Id>,
  pub name: String,
  pub wiki: Option<String>,
  pub media_count: i32,
  pub note: String,
  pub position: i32,
  pub songs: Vec<Song>,
}

/// Canción dentro de un `Music`; su posición solo es única entre hermanas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  pub id: Option<Id>,
  pub name: String,
  /// Duración en segundos.
  pub length: i32,
  pub note: String,
  pub position: i32,
}

impl_movable!(Music, Song);

impl Composite for Music {
  fn visit_children_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Movable)) {
    for song in &mut self.songs {
      visit(song);
    }
  }
}

impl Composite for Song {}

impl Aggregate for Music {
  const KIND: &'static str = "music";
}
