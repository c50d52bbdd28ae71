//! Validation error types.

use thiserror::Error;

use crate::schema::Field;

/// A reason the validator refused to admit a submission.
///
/// These are user-facing: the `Display` text is the message shown next to
/// the form. A rejected submission carries one or more of them; the record
/// is never partially admitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// A required field was left empty or absent.
    #[error("missing required field: {field}")]
    MissingField {
        /// The empty column.
        field: Field,
    },

    /// The submitted lot number already exists in the collection.
    #[error("LOT NUMBER must be unique: {lot_number} already exists")]
    DuplicateKey {
        /// The offending key.
        lot_number: String,
    },

    /// A date field did not parse as `YYYY-MM-DD`.
    #[error("invalid date for {field}: {value:?} (expected YYYY-MM-DD)")]
    BadDate {
        /// The date column.
        field: Field,
        /// The raw value as submitted.
        value: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_column() {
        let err = ValidationError::MissingField {
            field: Field::Jobber,
        };
        assert_eq!(err.to_string(), "missing required field: JOBBER");
    }

    #[test]
    fn test_duplicate_key_names_the_lot() {
        let err = ValidationError::DuplicateKey {
            lot_number: "L100".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "LOT NUMBER must be unique: L100 already exists"
        );
    }

    #[test]
    fn test_bad_date_shows_raw_value() {
        let err = ValidationError::BadDate {
            field: Field::FabDate,
            value: "12/31/2024".to_string(),
        };
        assert!(err.to_string().contains("FAB. DATE"));
        assert!(err.to_string().contains("12/31/2024"));
    }
}
