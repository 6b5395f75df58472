//! Dobles de prueba compartidos por los tests del crate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::movable::{Aggregate, Composite, Id, Movable};
use crate::ports::{Phase, RepoError, Repository, Validator, Violation};

struct State<A> {
  items: Vec<A>,
  next_id: Id,
  reads: usize,
  writes: usize,
}

impl<A> State<A> {
  fn issue(&mut self) -> Id {
    let id = self.next_id;
    self.next_id += 1;
    id
  }
}

/// Repositorio en memoria. Los clones comparten estado, así que el test puede
/// quedarse uno para inspeccionar lo que la fachada escribió.
///
/// Raíces e hijos comparten una sola secuencia de ids, que arranca después
/// del mayor id sembrado.
pub struct MemoryRepository<A> {
  state: Rc<RefCell<State<A>>>,
}

impl<A> Clone for MemoryRepository<A> {
  fn clone(&self) -> Self {
    Self { state: Rc::clone(&self.state) }
  }
}

impl<A> Default for MemoryRepository<A> {
  fn default() -> Self {
    let state = State { items: Vec::new(), next_id: 1, reads: 0, writes: 0 };
    Self { state: Rc::new(RefCell::new(state)) }
  }
}

impl<A: Aggregate> MemoryRepository<A> {
  pub fn seeded(mut items: Vec<A>) -> Self {
    let mut max = 0;
    for item in &mut items {
      max = max.max(item.id().unwrap_or(0));
      item.visit_children_mut(&mut |child: &mut dyn Movable| {
        max = max.max(child.id().unwrap_or(0));
      });
    }
    let state = State { items, next_id: max + 1, reads: 0, writes: 0 };
    Self { state: Rc::new(RefCell::new(state)) }
  }

  /// Estado actual de una raíz, sin contar como lectura.
  pub fn snapshot(&self, id: Id) -> Option<A> {
    self.state.borrow().items.iter().find(|item| item.id() == Some(id)).cloned()
  }

  pub fn reads(&self) -> usize {
    self.state.borrow().reads
  }

  pub fn writes(&self) -> usize {
    self.state.borrow().writes
  }
}

fn assign_nested<A: Aggregate>(state: &mut State<A>, aggregate: &mut A) {
  aggregate.visit_children_mut(&mut |child: &mut dyn Movable| {
    if child.id().is_none() {
      child.set_id(Some(state.issue()));
    }
  });
}

impl<A: Aggregate> Repository<A> for MemoryRepository<A> {
  fn get_all(&self) -> Result<Vec<A>, RepoError> {
    let mut state = self.state.borrow_mut();
    state.reads += 1;
    Ok(state.items.clone())
  }

  fn get(&self, id: Id) -> Result<Option<A>, RepoError> {
    let mut state = self.state.borrow_mut();
    state.reads += 1;
    Ok(state.items.iter().find(|item| item.id() == Some(id)).cloned())
  }

  fn add(&self, aggregate: &mut A) -> Result<(), RepoError> {
    let mut state = self.state.borrow_mut();
    state.writes += 1;
    let id = state.issue();
    aggregate.set_id(Some(id));
    assign_nested(&mut *state, aggregate);
    state.items.push(aggregate.clone());
    Ok(())
  }

  fn update(&self, aggregate: &mut A) -> Result<(), RepoError> {
    let mut state = self.state.borrow_mut();
    let at = state
      .items
      .iter()
      .position(|item| item.id().is_some() && item.id() == aggregate.id())
      .ok_or(RepoError::NotFound)?;
    state.writes += 1;
    assign_nested(&mut *state, aggregate);
    state.items[at] = aggregate.clone();
    Ok(())
  }

  fn remove(&self, aggregate: &A) -> Result<(), RepoError> {
    let mut state = self.state.borrow_mut();
    state.writes += 1;
    state.items.retain(|item| item.id() != aggregate.id());
    Ok(())
  }
}

/// Validador que responde siempre lo mismo y cuenta las llamadas.
#[derive(Clone, Default)]
pub struct ScriptedValidator {
  verdict: Vec<Violation>,
  calls: Rc<Cell<usize>>,
}

impl ScriptedValidator {
  pub fn accepting() -> Self {
    Self::default()
  }

  pub fn rejecting(violation: Violation) -> Self {
    Self { verdict: vec![violation], ..Self::default() }
  }

  pub fn calls(&self) -> usize {
    self.calls.get()
  }
}

impl<E> Validator<E> for ScriptedValidator {
  fn validate(&self, _entity: &E, _phases: &[Phase]) -> Result<Vec<Violation>, RepoError> {
    self.calls.set(self.calls.get() + 1);
    Ok(self.verdict.clone())
  }
}

pub mod fixtures {
  use crate::domain::{Episode, Language, Season, Show};

  /// `shows` series con `seasons` temporadas y `episodes` episodios cada una.
  /// Las series llevan ids `1..=shows`; temporadas y episodios siguen a
  /// partir de ahí, sin repetirse. Las posiciones coinciden con el índice.
  pub fn shows(shows: usize, seasons: usize, episodes: usize) -> Vec<Show> {
    let mut next = shows as i32;
    let mut result = Vec::with_capacity(shows);

    for s in 0..shows {
      let mut show = Show {
        id: Some(s as i32 + 1),
        name: format!("Show {}", s + 1),
        original_name: format!("Original {}", s + 1),
        imdb_code: None,
        genre_ids: Vec::new(),
        picture: None,
        note: String::new(),
        position: s as i32,
        seasons: Vec::with_capacity(seasons),
      };

      for j in 0..seasons {
        next += 1;
        let mut season = Season {
          id: Some(next),
          number: j as i32 + 1,
          start_year: 2000 + j as i32,
          end_year: 2000 + j as i32,
          language: Language::En,
          subtitles: vec![Language::Cz],
          note: String::new(),
          position: j as i32,
          episodes: Vec::with_capacity(episodes),
        };
        for e in 0..episodes {
          next += 1;
          season.episodes.push(Episode {
            id: Some(next),
            number: e as i32 + 1,
            name: format!("S{}E{}", j + 1, e + 1),
            length: 45,
            note: String::new(),
            position: e as i32,
          });
        }
        show.seasons.push(season);
      }

      result.push(show);
    }

    result
  }
}
