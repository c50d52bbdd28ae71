#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;

// Re-exports for convenience
pub use error::{Error, Result};
pub use store::{Store, export_csv};
