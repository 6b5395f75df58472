// crates/vitrina-core/src/errors.rs
use std::fmt;

use thiserror::Error;

use crate::ports::repository::RepoError;
use crate::ports::validator::{Code, Violation};

/// Lista de violaciones con formato legible para logs y mensajes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl fmt::Display for Violations {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, violation) in self.0.iter().enumerate() {
      if index > 0 {
        f.write_str("; ")?;
      }
      fmt::Display::fmt(violation, f)?;
    }
    Ok(())
  }
}

/// Error de las fachadas del catálogo.
///
/// Las capas superiores (CLI, HTTP, etc.) deberían mapear `NotFound` a su señal
/// de "no existe" y `Invalid` a un error de entrada, mostrando cada violación.
#[derive(Debug, Error)]
pub enum CoreError {
  /// Falta un argumento obligatorio; no se llegó a validar ni a persistir nada.
  #[error("invalid argument: {0}")]
  Argument(Violation),

  #[error("validation failed: {0}")]
  Invalid(Violations),

  #[error("not found: {0}")]
  NotFound(Violations),

  #[error("repository error: {0}")]
  Repository(#[from] RepoError),
}

impl CoreError {
  pub fn id_null() -> Self {
    CoreError::Argument(Violation::new(Code::IdNull, "ID mustn't be null."))
  }

  /// Clasifica una lista no vacía de violaciones.
  pub fn from_violations(violations: Vec<Violation>) -> Self {
    if violations.iter().any(|v| v.code.is_not_found()) {
      CoreError::NotFound(Violations(violations))
    } else {
      CoreError::Invalid(Violations(violations))
    }
  }

  pub fn violations(&self) -> &[Violation] {
    match self {
      CoreError::Argument(violation) => std::slice::from_ref(violation),
      CoreError::Invalid(violations) | CoreError::NotFound(violations) => &violations.0,
      CoreError::Repository(_) => &[],
    }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, CoreError::NotFound(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn existence_failures_are_classified_as_not_found() {
    let err = CoreError::from_violations(vec![
      Violation::new(Code::FieldEmpty, "Name mustn't be empty."),
      Violation::new(Code::ItemNotExist, "Movie doesn't exist."),
    ]);
    assert!(err.is_not_found());
    assert_eq!(err.violations().len(), 2);
    assert_eq!(
      err.to_string(),
      "not found: [FIELD_EMPTY] Name mustn't be empty.; [ITEM_NOT_EXIST] Movie doesn't exist."
    );

    let err = CoreError::from_violations(vec![Violation::new(Code::NotMovable, "x")]);
    assert!(matches!(err, CoreError::Invalid(_)));
  }
}
