use crate::domain;
use crate::entity::{
  Book, BookCategory, Episode, Game, Genre, Movie, Music, Picture, Program, Season, Show, Song,
};
use crate::ports::{Code, RepoError, Repository, Violation};
use crate::validation::checks;

pub const MIN_YEAR: i32 = 1930;
pub const MAX_YEAR: i32 = 2100;
pub const MAX_IMDB_CODE: i32 = 9_999_999;

/// Reglas de campos de un tipo (fase `Deep`). Solo devuelve `Err` si falla
/// la persistencia al comprobar referencias.
pub trait FieldRules<E> {
  fn check(&self, entity: &E, violations: &mut Vec<Violation>) -> Result<(), RepoError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenreRules;

impl FieldRules<Genre> for GenreRules {
  fn check(&self, genre: &Genre, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&genre.name, "Name", out);
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PictureRules;

impl FieldRules<Picture> for PictureRules {
  fn check(&self, picture: &Picture, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty_list(&picture.content, "Content", out);
    Ok(())
  }
}

/// Películas: además de los campos, los géneros y el póster deben existir.
#[derive(Debug, Clone)]
pub struct MovieRules<G, P> {
  genres: G,
  pictures: P,
}

impl<G, P> MovieRules<G, P> {
  pub fn new(genres: G, pictures: P) -> Self {
    Self { genres, pictures }
  }
}

impl<G, P> FieldRules<Movie> for MovieRules<G, P>
where
  G: Repository<domain::Genre>,
  P: Repository<domain::Picture>,
{
  fn check(&self, movie: &Movie, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&movie.name, "Name", out);
    checks::not_empty(&movie.original_name, "Original name", out);
    checks::in_range(movie.year, MIN_YEAR..=MAX_YEAR, "Year", out);
    checks::positive(movie.length, "Length", out);
    checks::optional_in_range(movie.imdb_code, 1..=MAX_IMDB_CODE, "IMDB code", out);
    checks::references(&self.genres, movie.genre_ids.iter().copied(), "Genre", out)?;
    checks::references(&self.pictures, movie.picture, "Picture", out)
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameRules;

impl FieldRules<Game> for GameRules {
  fn check(&self, game: &Game, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&game.name, "Name", out);
    checks::positive(game.media_count, "Count of media", out);
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramRules;

impl FieldRules<Program> for ProgramRules {
  fn check(&self, program: &Program, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&program.name, "Name", out);
    checks::positive(program.media_count, "Count of media", out);
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MusicRules;

impl FieldRules<Music> for MusicRules {
  fn check(&self, music: &Music, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&music.name, "Name", out);
    checks::positive(music.media_count, "Count of media", out);
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SongRules;

impl FieldRules<Song> for SongRules {
  fn check(&self, song: &Song, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&song.name, "Name", out);
    checks::not_negative(song.length, "Length", out);
    Ok(())
  }
}

#[derive(Debug, Clone)]
pub struct ShowRules<G, P> {
  genres: G,
  pictures: P,
}

impl<G, P> ShowRules<G, P> {
  pub fn new(genres: G, pictures: P) -> Self {
    Self { genres, pictures }
  }
}

impl<G, P> FieldRules<Show> for ShowRules<G, P>
where
  G: Repository<domain::Genre>,
  P: Repository<domain::Picture>,
{
  fn check(&self, show: &Show, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&show.name, "Name", out);
    checks::not_empty(&show.original_name, "Original name", out);
    checks::optional_in_range(show.imdb_code, 1..=MAX_IMDB_CODE, "IMDB code", out);
    checks::references(&self.genres, show.genre_ids.iter().copied(), "Genre", out)?;
    checks::references(&self.pictures, show.picture, "Picture", out)
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonRules;

impl FieldRules<Season> for SeasonRules {
  fn check(&self, season: &Season, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::positive(season.number, "Number of season", out);
    checks::in_range(season.start_year, MIN_YEAR..=MAX_YEAR, "Starting year", out);
    checks::in_range(season.end_year, MIN_YEAR..=MAX_YEAR, "Ending year", out);
    if season.start_year > season.end_year {
      out.push(Violation::new(
        Code::FieldOutOfRange,
        "Starting year mustn't be greater than ending year.",
      ));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EpisodeRules;

impl FieldRules<Episode> for EpisodeRules {
  fn check(&self, episode: &Episode, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::positive(episode.number, "Number of episode", out);
    checks::not_empty(&episode.name, "Name", out);
    checks::not_negative(episode.length, "Length", out);
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookCategoryRules;

impl FieldRules<BookCategory> for BookCategoryRules {
  fn check(&self, category: &BookCategory, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&category.name, "Name", out);
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookRules;

impl FieldRules<Book> for BookRules {
  fn check(&self, book: &Book, out: &mut Vec<Violation>) -> Result<(), RepoError> {
    checks::not_empty(&book.author, "Author", out);
    checks::not_empty(&book.title, "Title", out);
    checks::not_empty_list(&book.languages, "Languages", out);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Language;
  use crate::testing::MemoryRepository;

  fn codes<E, F: FieldRules<E>>(rules: &F, entity: &E) -> Vec<Code> {
    let mut out = Vec::new();
    rules.check(entity, &mut out).unwrap();
    out.into_iter().map(|v| v.code).collect()
  }

  fn movie() -> Movie {
    Movie {
      name: "Alien".into(),
      original_name: "Alien".into(),
      year: 1979,
      length: 117,
      language: Language::En,
      imdb_code: Some(78748),
      ..Movie::default()
    }
  }

  #[test]
  fn movie_references_must_exist() {
    let genres = MemoryRepository::seeded(vec![domain::Genre {
      id: Some(1),
      name: "Sci-fi".into(),
      position: 0,
    }]);
    let pictures = MemoryRepository::<domain::Picture>::default();
    let rules = MovieRules::new(genres, pictures);

    assert!(codes(&rules, &Movie { genre_ids: vec![1], ..movie() }).is_empty());
    assert_eq!(
      codes(&rules, &Movie { genre_ids: vec![1, 2], picture: Some(5), ..movie() }),
      vec![Code::ReferenceNotExist, Code::ReferenceNotExist]
    );
  }

  #[test]
  fn movie_fields_are_checked_together() {
    let rules = MovieRules::new(
      MemoryRepository::<domain::Genre>::default(),
      MemoryRepository::<domain::Picture>::default(),
    );
    let bad = Movie {
      name: String::new(),
      year: 1900,
      length: 0,
      imdb_code: Some(10_000_000),
      ..movie()
    };

    assert_eq!(
      codes(&rules, &bad),
      vec![
        Code::FieldEmpty,
        Code::FieldOutOfRange,
        Code::FieldNotPositive,
        Code::FieldOutOfRange
      ]
    );
  }

  #[test]
  fn season_years_must_be_ordered() {
    let season = Season { number: 1, start_year: 2010, end_year: 2009, ..Season::default() };
    assert_eq!(codes(&SeasonRules, &season), vec![Code::FieldOutOfRange]);

    let season = Season { end_year: 2010, ..season };
    assert!(codes(&SeasonRules, &season).is_empty());
  }

  #[test]
  fn lengths_of_children_may_be_zero() {
    let song = Song { name: "Intro".into(), ..Song::default() };
    assert!(codes(&SongRules, &song).is_empty());

    let episode = Episode { number: 1, name: "Pilot".into(), length: -1, ..Episode::default() };
    assert_eq!(codes(&EpisodeRules, &episode), vec![Code::FieldNegative]);
  }

  #[test]
  fn books_need_author_title_and_language() {
    let book = Book { author: "Čapek".into(), title: "R.U.R.".into(), ..Book::default() };
    assert_eq!(codes(&BookRules, &book), vec![Code::FieldEmpty]);

    let book = Book { languages: vec![Language::Cz], ..book };
    assert!(codes(&BookRules, &book).is_empty());
  }
}
