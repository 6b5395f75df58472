pub mod domain;
pub mod entity;
pub mod errors;
pub mod movable;
pub mod ordering;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::CoreError;
pub use movable::{Aggregate, Composite, Id, Movable};
