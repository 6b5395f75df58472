//! Cableado de fachadas: un almacén SQLite, un validador y un conversor por tipo.

use serde::Serialize;
use serde::de::DeserializeOwned;
use vitrina_core::domain;
use vitrina_core::entity::{
  BookCategoryConverter, BookConverter, EpisodeConverter, GameConverter, GenreConverter,
  MovieConverter, MusicConverter, PictureConverter, ProgramConverter, SeasonConverter,
  ShowConverter, SongConverter,
};
use vitrina_core::movable::Aggregate;
use vitrina_core::ports::Converter;
use vitrina_core::services::{
  CategoryBooks, ChildFacade, MusicSongs, ParentFacade, SeasonEpisodes, ShowSeasons,
};
use vitrina_core::validation::rules::{
  BookCategoryRules, BookRules, EpisodeRules, GameRules, GenreRules, MovieRules, MusicRules,
  PictureRules, ProgramRules, SeasonRules, ShowRules, SongRules,
};
use vitrina_core::validation::{ChildValidator, FieldRules, RootValidator};
use vitrina_storage::{Database, SqliteStore};

type Store<A> = SqliteStore<A>;
type Root<C, F> = ParentFacade<
  C,
  Store<<C as Converter>::Domain>,
  RootValidator<<C as Converter>::Domain, Store<<C as Converter>::Domain>, F>,
>;
type InShow<K, F> = ChildValidator<K, Store<domain::Show>, F>;
type MediaRules = ShowRules<Store<domain::Genre>, Store<domain::Picture>>;

pub type Genres = Root<GenreConverter, GenreRules>;
pub type Pictures = Root<PictureConverter, PictureRules>;
pub type Movies = Root<MovieConverter, MovieRules<Store<domain::Genre>, Store<domain::Picture>>>;
pub type Games = Root<GameConverter, GameRules>;
pub type Programs = Root<ProgramConverter, ProgramRules>;
pub type Music = Root<MusicConverter, MusicRules>;
pub type BookCategories = Root<BookCategoryConverter, BookCategoryRules>;
pub type Shows = Root<ShowConverter, MediaRules>;

pub type Seasons = ChildFacade<
  ShowSeasons,
  SeasonConverter,
  Store<domain::Show>,
  InShow<ShowSeasons, SeasonRules>,
  RootValidator<domain::Show, Store<domain::Show>, MediaRules>,
>;
pub type Episodes = ChildFacade<
  SeasonEpisodes,
  EpisodeConverter,
  Store<domain::Show>,
  InShow<SeasonEpisodes, EpisodeRules>,
  InShow<ShowSeasons, SeasonRules>,
>;
pub type Songs = ChildFacade<
  MusicSongs,
  SongConverter,
  Store<domain::Music>,
  ChildValidator<MusicSongs, Store<domain::Music>, SongRules>,
  RootValidator<domain::Music, Store<domain::Music>, MusicRules>,
>;
pub type Books = ChildFacade<
  CategoryBooks,
  BookConverter,
  Store<domain::BookCategory>,
  ChildValidator<CategoryBooks, Store<domain::BookCategory>, BookRules>,
  RootValidator<domain::BookCategory, Store<domain::BookCategory>, BookCategoryRules>,
>;

/// Todas las fachadas del catálogo sobre una misma base de datos.
pub struct Catalog {
  pub genres: Genres,
  pub pictures: Pictures,
  pub movies: Movies,
  pub games: Games,
  pub programs: Programs,
  pub music: Music,
  pub songs: Songs,
  pub shows: Shows,
  pub seasons: Seasons,
  pub episodes: Episodes,
  pub book_categories: BookCategories,
  pub books: Books,
}

fn root<C, F>(db: &Database, converter: C, rules: F) -> Root<C, F>
where
  C: Converter,
  C::Domain: Aggregate + Serialize + DeserializeOwned,
  F: FieldRules<C::Entity>,
{
  let store = db.store::<C::Domain>();
  let validator = RootValidator::new(store.clone(), rules);
  ParentFacade::new(converter, store, validator)
}

fn media_rules(db: &Database) -> MediaRules {
  ShowRules::new(db.store(), db.store())
}

impl Catalog {
  pub fn new(db: &Database) -> Self {
    let shows = db.store::<domain::Show>();
    let music = db.store::<domain::Music>();
    let categories = db.store::<domain::BookCategory>();

    Catalog {
      genres: root(db, GenreConverter, GenreRules),
      pictures: root(db, PictureConverter, PictureRules),
      movies: root(db, MovieConverter, MovieRules::new(db.store(), db.store())),
      games: root(db, GameConverter, GameRules),
      programs: root(db, ProgramConverter, ProgramRules),
      music: root(db, MusicConverter, MusicRules),
      songs: ChildFacade::new(
        SongConverter,
        music.clone(),
        ChildValidator::new(music.clone(), SongRules),
        RootValidator::new(music, MusicRules),
      ),
      shows: root(db, ShowConverter, media_rules(db)),
      seasons: ChildFacade::new(
        SeasonConverter,
        shows.clone(),
        ChildValidator::new(shows.clone(), SeasonRules),
        RootValidator::new(shows.clone(), media_rules(db)),
      ),
      episodes: ChildFacade::new(
        EpisodeConverter,
        shows.clone(),
        ChildValidator::new(shows.clone(), EpisodeRules),
        ChildValidator::new(shows, SeasonRules),
      ),
      book_categories: root(db, BookCategoryConverter, BookCategoryRules),
      books: ChildFacade::new(
        BookConverter,
        categories.clone(),
        ChildValidator::new(categories.clone(), BookRules),
        RootValidator::new(categories, BookCategoryRules),
      ),
    }
  }
}
