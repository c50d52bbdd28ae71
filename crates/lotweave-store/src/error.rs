//! Error types for lotweave-store.
//!
//! Only the save path produces errors. Loads recover to an empty collection
//! instead, so the caller always has a collection to render.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while persisting the lot collection.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The filesystem rejected the write (permissions, disk full, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Exported CSV bytes were not valid UTF-8.
    #[error("exported CSV was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
