//! Algoritmos de orden compartidos por todos los tipos del catálogo:
//! asignación de posición, reindexado, intercambio arriba/abajo y duplicado.

pub mod duplicate;
pub mod position;
pub mod swap;

pub use duplicate::duplicate;
pub use position::{assign_on_add, position_for, reindex, sort_by_position};
pub use swap::{Direction, Swap, can_move, move_entity};
