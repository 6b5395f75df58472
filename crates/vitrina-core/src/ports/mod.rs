pub mod converter;
pub mod repository;
pub mod validator;

pub use converter::Converter;
pub use repository::{RepoError, Repository};
pub use validator::{Code, Phase, Validator, Violation};
