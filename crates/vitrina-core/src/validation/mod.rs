//! Validadores genéricos por fases y reglas de campos de cada tipo.
//!
//! `RootValidator` y `ChildValidator` resuelven las fases estructurales
//! (`New`, `Exists`, `Up`, `Down`) consultando la persistencia, y delegan la
//! fase `Deep` en un [`FieldRules`] propio de cada tipo.

pub mod checks;
mod child;
mod root;
pub mod rules;

pub use child::ChildValidator;
pub use root::RootValidator;
pub use rules::FieldRules;
