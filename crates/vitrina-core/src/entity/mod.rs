//! Forma externa de cada tipo del catálogo: lo que reciben y devuelven las
//! fachadas. Nunca incluye colecciones anidadas; los hijos se consultan con
//! su propia fachada.
//!
//! Cada módulo trae también el `Converter` que traduce entre esta forma y la
//! de [`crate::domain`].

pub mod book;
pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod picture;
pub mod program;
pub mod show;

pub use crate::domain::Language;
pub use book::{Book, BookCategory, BookCategoryConverter, BookConverter};
pub use game::{Game, GameConverter};
pub use genre::{Genre, GenreConverter};
pub use movie::{Movie, MovieConverter};
pub use music::{Music, MusicConverter, Song, SongConverter};
pub use picture::{Picture, PictureConverter};
pub use program::{Program, ProgramConverter};
pub use show::{Episode, EpisodeConverter, Season, SeasonConverter, Show, ShowConverter};

/// Nota opcional hacia fuera, cadena (posiblemente vacía) hacia dentro.
pub(crate) fn note_to_domain(note: &Option<String>) -> String {
  note.as_deref().map(str::trim).unwrap_or_default().to_string()
}

pub(crate) fn note_to_entity(note: &str) -> Option<String> {
  if note.is_empty() { None } else { Some(note.to_string()) }
}
