#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod model;
mod proptests;
pub mod schema;
pub mod validate;

// Re-exports for convenience
pub use error::ValidationError;
pub use model::{DATE_FMT, FieldMap, LotCollection, LotRecord, parse_date};
pub use schema::Field;
pub use validate::{replace_all, validate_new, validate_new_at};
