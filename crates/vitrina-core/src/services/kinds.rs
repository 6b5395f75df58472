//! Configuración de cada tipo anidado del catálogo.

use crate::domain::{Book, BookCategory, Episode, Music, Season, Show, Song};
use crate::services::nesting::Nesting;

/// Temporadas dentro de una serie.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowSeasons;

impl Nesting for ShowSeasons {
  type Root = Show;
  type Parent = Show;
  type Child = Season;

  const PARENT: &'static str = "show";
  const CHILD: &'static str = "season";

  fn parents(root: &Show) -> Vec<&Show> {
    vec![root]
  }

  fn parent_mut(root: &mut Show, index: usize) -> Option<&mut Show> {
    (index == 0).then_some(root)
  }

  fn children(parent: &Show) -> &[Season] {
    &parent.seasons
  }

  fn children_mut(parent: &mut Show) -> &mut Vec<Season> {
    &mut parent.seasons
  }
}

/// Episodios dentro de una temporada; la raíz que se persiste es la serie.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonEpisodes;

impl Nesting for SeasonEpisodes {
  type Root = Show;
  type Parent = Season;
  type Child = Episode;

  const PARENT: &'static str = "season";
  const CHILD: &'static str = "episode";

  fn parents(root: &Show) -> Vec<&Season> {
    root.seasons.iter().collect()
  }

  fn parent_mut(root: &mut Show, index: usize) -> Option<&mut Season> {
    root.seasons.get_mut(index)
  }

  fn children(parent: &Season) -> &[Episode] {
    &parent.episodes
  }

  fn children_mut(parent: &mut Season) -> &mut Vec<Episode> {
    &mut parent.episodes
  }
}

/// Canciones dentro de un álbum.
#[derive(Debug, Clone, Copy, Default)]
pub struct MusicSongs;

impl Nesting for MusicSongs {
  type Root = Music;
  type Parent = Music;
  type Child = Song;

  const PARENT: &'static str = "music";
  const CHILD: &'static str = "song";

  fn parents(root: &Music) -> Vec<&Music> {
    vec![root]
  }

  fn parent_mut(root: &mut Music, index: usize) -> Option<&mut Music> {
    (index == 0).then_some(root)
  }

  fn children(parent: &Music) -> &[Song] {
    &parent.songs
  }

  fn children_mut(parent: &mut Music) -> &mut Vec<Song> {
    &mut parent.songs
  }
}

/// Libros dentro de una categoría.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryBooks;

impl Nesting for CategoryBooks {
  type Root = BookCategory;
  type Parent = BookCategory;
  type Child = Book;

  const PARENT: &'static str = "book category";
  const CHILD: &'static str = "book";

  fn parents(root: &BookCategory) -> Vec<&BookCategory> {
    vec![root]
  }

  fn parent_mut(root: &mut BookCategory, index: usize) -> Option<&mut BookCategory> {
    (index == 0).then_some(root)
  }

  fn children(parent: &BookCategory) -> &[Book] {
    &parent.books
  }

  fn children_mut(parent: &mut BookCategory) -> &mut Vec<Book> {
    &mut parent.books
  }
}
