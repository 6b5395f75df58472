use std::ops::RangeInclusive;

use crate::movable::{Aggregate, Id, Movable};
use crate::ordering::{Direction, can_move};
use crate::ports::{Code, RepoError, Repository, Violation};

pub fn id_null() -> Violation {
  Violation::new(Code::IdNull, "ID mustn't be null.")
}

pub fn new_id<M: Movable + ?Sized>(entity: &M, out: &mut Vec<Violation>) {
  if entity.id().is_some() {
    out.push(Violation::new(Code::IdNotNull, "ID must be null."));
  }
}

pub fn not_exist(kind: &str, id: Id) -> Violation {
  Violation::new(Code::ItemNotExist, format!("{kind} {id} doesn't exist."))
}

/// Rechaza mover el primero hacia arriba o el último hacia abajo. Si `id` no
/// está entre los hermanos no dice nada: eso lo informa la fase `Exists`.
pub fn movable<M: Movable>(
  siblings: &[M],
  id: Id,
  direction: Direction,
  kind: &str,
  out: &mut Vec<Violation>,
) {
  let present = siblings.iter().any(|sibling| sibling.id() == Some(id));
  if present && !can_move(siblings, id, direction) {
    out.push(Violation::new(Code::NotMovable, format!("{kind} {id} can't be moved {direction}.")));
  }
}

pub fn not_empty(value: &str, field: &str, out: &mut Vec<Violation>) {
  if value.trim().is_empty() {
    out.push(Violation::new(Code::FieldEmpty, format!("{field} mustn't be empty.")));
  }
}

pub fn not_empty_list<T>(values: &[T], field: &str, out: &mut Vec<Violation>) {
  if values.is_empty() {
    out.push(Violation::new(Code::FieldEmpty, format!("{field} mustn't be empty.")));
  }
}

pub fn positive(value: i32, field: &str, out: &mut Vec<Violation>) {
  if value <= 0 {
    out.push(Violation::new(Code::FieldNotPositive, format!("{field} must be positive number.")));
  }
}

pub fn not_negative(value: i32, field: &str, out: &mut Vec<Violation>) {
  if value < 0 {
    out.push(Violation::new(Code::FieldNegative, format!("{field} mustn't be negative number.")));
  }
}

pub fn in_range(value: i32, range: RangeInclusive<i32>, field: &str, out: &mut Vec<Violation>) {
  if !range.contains(&value) {
    out.push(Violation::new(
      Code::FieldOutOfRange,
      format!("{field} must be between {} and {}.", range.start(), range.end()),
    ));
  }
}

pub fn optional_in_range(
  value: Option<i32>,
  range: RangeInclusive<i32>,
  field: &str,
  out: &mut Vec<Violation>,
) {
  if let Some(value) = value {
    in_range(value, range, field, out);
  }
}

/// Cada id de `ids` debe existir en `repository`.
pub fn references<A, R>(
  repository: &R,
  ids: impl IntoIterator<Item = Id>,
  field: &str,
  out: &mut Vec<Violation>,
) -> Result<(), RepoError>
where
  A: Aggregate,
  R: Repository<A>,
{
  for id in ids {
    if repository.get(id)?.is_none() {
      out.push(Violation::new(Code::ReferenceNotExist, format!("{field} {id} doesn't exist.")));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn codes(out: &[Violation]) -> Vec<Code> {
    out.iter().map(|v| v.code).collect()
  }

  #[test]
  fn field_checks_report_each_problem() {
    let mut out = Vec::new();
    not_empty("   ", "Name", &mut out);
    positive(0, "Length", &mut out);
    not_negative(-1, "Length", &mut out);
    in_range(1920, 1930..=2100, "Year", &mut out);
    optional_in_range(None, 1..=10, "IMDB code", &mut out);
    not_empty_list::<u8>(&[], "Content", &mut out);

    assert_eq!(
      codes(&out),
      vec![
        Code::FieldEmpty,
        Code::FieldNotPositive,
        Code::FieldNegative,
        Code::FieldOutOfRange,
        Code::FieldEmpty
      ]
    );
    assert_eq!(out[3].message, "Year must be between 1930 and 2100.");
  }

  #[test]
  fn valid_values_pass() {
    let mut out = Vec::new();
    not_empty("Alien", "Name", &mut out);
    positive(1, "Length", &mut out);
    not_negative(0, "Length", &mut out);
    in_range(2100, 1930..=2100, "Year", &mut out);
    optional_in_range(Some(5), 1..=10, "IMDB code", &mut out);
    assert!(out.is_empty());
  }
}
