pub mod error;

pub use error::{DocError, Result, ValidationError, ValidationErrorKind};
