#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod error;
pub mod routes;

// Re-exports for convenience
pub use error::{Error, Result};
pub use routes::router;
