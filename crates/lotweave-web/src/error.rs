//! Error types for lotweave-web.
//!
//! Validation failures are the user's to fix and come back as 422 with the
//! message list the form shows; storage failures on save are the only 500.
//! Nothing here is fatal to the process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use lotweave_core::ValidationError;

/// Result type alias for handler bodies.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a request handler can surface.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The submission was rejected by the validator.
    #[error("validation failed ({} error(s))", .0.len())]
    Validation(Vec<ValidationError>),

    /// The store refused the write.
    #[error("storage error: {0}")]
    Store(#[from] lotweave_store::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "errors": messages })),
                )
                    .into_response()
            }
            Error::Store(err) => {
                tracing::error!(%err, "save failed, collection not persisted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lotweave_core::Field;

    #[test]
    fn test_validation_error_counts_in_display() {
        let err = Error::Validation(vec![
            ValidationError::MissingField {
                field: Field::Jobber,
            },
            ValidationError::MissingField { field: Field::Belt },
        ]);
        assert_eq!(err.to_string(), "validation failed (2 error(s))");
    }
}
