use crate::movable::{Aggregate, Id};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("storage error: {0}")]
  Storage(String),
  #[error("serialization error: {0}")]
  Serialization(String),
}

/// Port de persistencia para un tipo de raíz de agregado.
///
/// Los hijos anidados nunca se persisten por separado: cualquier cambio en
/// ellos se guarda escribiendo la raíz completa. Cada llamada que escribe una
/// raíz debe ser atómica (todo o nada).
pub trait Repository<A: Aggregate> {
  fn get_all(&self) -> Result<Vec<A>, RepoError>;
  fn get(&self, id: Id) -> Result<Option<A>, RepoError>;

  /// Inserta una raíz nueva y le asigna id, igual que a los descendientes
  /// que todavía no lo tengan.
  fn add(&self, aggregate: &mut A) -> Result<(), RepoError>;

  /// Reemplaza la raíz completa. Los descendientes nuevos (sin id) reciben uno.
  fn update(&self, aggregate: &mut A) -> Result<(), RepoError>;

  fn remove(&self, aggregate: &A) -> Result<(), RepoError>;
}
