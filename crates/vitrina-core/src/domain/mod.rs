//! Forma interna (persistida) de cada tipo del catálogo.
//!
//! Las raíces de agregado poseen sus colecciones anidadas: una `Show` guarda
//! sus `Season`, y cada `Season` sus `Episode`.

pub mod book;
pub mod game;
pub mod genre;
pub mod language;
pub mod movie;
pub mod music;
pub mod picture;
pub mod program;
pub mod show;

pub use book::{Book, BookCategory};
pub use game::Game;
pub use genre::Genre;
pub use language::Language;
pub use movie::Movie;
pub use music::{Music, Song};
pub use picture::Picture;
pub use program::Program;
pub use show::{Episode, Season, Show};
