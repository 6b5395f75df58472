use std::fmt;

use serde::Serialize;

use crate::ordering::Direction;
use crate::ports::repository::RepoError;

/// Fases de validación que una operación puede exigir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
  /// La entidad es nueva: no debe traer id.
  New,
  /// La entidad debe tener id y existir en la persistencia.
  Exists,
  /// Debe poder subir una posición.
  Up,
  /// Debe poder bajar una posición.
  Down,
  /// Reglas de campos y referencias.
  Deep,
}

impl Phase {
  /// Sentido asociado a las fases de movimiento.
  pub fn direction(&self) -> Option<Direction> {
    match self {
      Phase::Up => Some(Direction::Up),
      Phase::Down => Some(Direction::Down),
      _ => None,
    }
  }
}

impl From<Direction> for Phase {
  fn from(direction: Direction) -> Self {
    match direction {
      Direction::Up => Phase::Up,
      Direction::Down => Phase::Down,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Code {
  IdNull,
  IdNotNull,
  ItemNotExist,
  ParentNotExist,
  NotMovable,
  FieldEmpty,
  FieldNotPositive,
  FieldNegative,
  FieldOutOfRange,
  ReferenceNotExist,
}

impl Code {
  pub fn as_str(&self) -> &'static str {
    match self {
      Code::IdNull => "ID_NULL",
      Code::IdNotNull => "ID_NOT_NULL",
      Code::ItemNotExist => "ITEM_NOT_EXIST",
      Code::ParentNotExist => "PARENT_NOT_EXIST",
      Code::NotMovable => "NOT_MOVABLE",
      Code::FieldEmpty => "FIELD_EMPTY",
      Code::FieldNotPositive => "FIELD_NOT_POSITIVE",
      Code::FieldNegative => "FIELD_NEGATIVE",
      Code::FieldOutOfRange => "FIELD_OUT_OF_RANGE",
      Code::ReferenceNotExist => "REFERENCE_NOT_EXIST",
    }
  }

  /// Fallos de existencia, que la capa externa traduce a "no encontrado".
  pub fn is_not_found(&self) -> bool {
    matches!(self, Code::ItemNotExist | Code::ParentNotExist)
  }
}

impl fmt::Display for Code {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Un problema concreto detectado por un validador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
  pub code: Code,
  pub message: String,
}

impl Violation {
  pub fn new(code: Code, message: impl Into<String>) -> Self {
    Self { code, message: message.into() }
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] {}", self.code, self.message)
  }
}

/// Port de validación de un tipo de entidad.
///
/// Devuelve todas las violaciones de todas las fases pedidas; la lista vacía
/// significa éxito. Solo falla con `Err` si la persistencia que consulta falla.
pub trait Validator<E> {
  fn validate(&self, entity: &E, phases: &[Phase]) -> Result<Vec<Violation>, RepoError>;
}
