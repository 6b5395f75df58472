use serde::{Deserialize, Serialize};

use crate::domain::{self, Language};
use crate::entity::{note_to_domain, note_to_entity};
use crate::movable::{Id, impl_movable};
use crate::ports::Converter;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookCategory {
  pub id: Option<Id>,
  pub name: String,
  pub note: Option<String>,
  pub position: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
  pub id: Option<Id>,
  pub author: String,
  pub title: String,
  pub languages: Vec<Language>,
  pub note: Option<String>,
  pub position: i32,
}

impl_movable!(BookCategory, Book);

#[derive(Debug, Clone, Copy, Default)]
pub struct BookCategoryConverter;

impl Converter for BookCategoryConverter {
  type Entity = BookCategory;
  type Domain = domain::BookCategory;

  fn to_entity(&self, domain: &domain::BookCategory) -> BookCategory {
    BookCategory {
      id: domain.id,
      name: domain.name.clone(),
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &BookCategory) -> domain::BookCategory {
    domain::BookCategory {
      id: entity.id,
      name: entity.name.clone(),
      note: note_to_domain(&entity.note),
      position: entity.position,
      books: Vec::new(),
    }
  }

  fn apply(&self, entity: &BookCategory, domain: &mut domain::BookCategory) {
    let books = std::mem::take(&mut domain.books);
    *domain = self.to_domain(entity);
    domain.books = books;
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookConverter;

impl Converter for BookConverter {
  type Entity = Book;
  type Domain = domain::Book;

  fn to_entity(&self, domain: &domain::Book) -> Book {
    Book {
      id: domain.id,
      author: domain.author.clone(),
      title: domain.title.clone(),
      languages: domain.languages.clone(),
      note: note_to_entity(&domain.note),
      position: domain.position,
    }
  }

  fn to_domain(&self, entity: &Book) -> domain::Book {
    domain::Book {
      id: entity.id,
      author: entity.author.clone(),
      title: entity.title.clone(),
      languages: entity.languages.clone(),
      note: note_to_domain(&entity.note),
      position: entity.position,
    }
  }
}
