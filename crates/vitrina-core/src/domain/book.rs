use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::movable::{Aggregate, Composite, Id, Movable, impl_movable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCategory {
  pub id: Option<Id>,
  pub name: String,
  pub note: String,
  pub position: i32,
  pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
  pub id: Option<Id>,
  pub author: String,
  pub title: String,
  pub languages: Vec<Language>,
  pub note: String,
  pub position: i32,
}

impl_movable!(BookCategory, Book);

impl Composite for BookCategory {
  fn visit_children_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Movable)) {
    for book in &mut self.books {
      visit(book);
    }
  }
}

impl Composite for Book {}

impl Aggregate for BookCategory {
  const KIND: &'static str = "book_category";
}
