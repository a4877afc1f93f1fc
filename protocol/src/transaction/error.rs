//! Construction-time errors for the transaction model.
//!
//! Every validating constructor in [`super`] returns a
//! [`ConstructionError`] on bad input. Nothing here is recoverable by the
//! library itself; the caller gets the error and decides what to show.

use thiserror::Error;

/// A field value was rejected while building a transaction or operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A required string field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A field that must be `>= 0` was negative.
    #[error("{field} must be >= 0, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A field that must be `> 0` was zero or negative.
    #[error("{field} must be > 0, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A string field exceeded its maximum byte length.
    #[error("{field} is {len} bytes long, the limit is {max}")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Actual length in bytes.
        len: usize,
        /// Maximum allowed length in bytes.
        max: usize,
    },

    /// The transaction carries more operations than the ledger accepts.
    #[error("transaction has {count} operations, the limit is {max}")]
    TooManyOperations {
        /// Number of operations supplied.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// The canonical encoding would reach the transaction size limit.
    #[error("transaction encodes to {size} bytes, it must stay below {max}")]
    TooLarge {
        /// Encoded size in bytes.
        size: usize,
        /// The size limit; valid encodings are strictly smaller.
        max: usize,
    },
}

// Small checks shared by every constructor in the model.

pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConstructionError> {
    if value.is_empty() {
        return Err(ConstructionError::EmptyField { field });
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: i64) -> Result<(), ConstructionError> {
    if value < 0 {
        return Err(ConstructionError::Negative { field, value });
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: i64) -> Result<(), ConstructionError> {
    if value <= 0 {
        return Err(ConstructionError::NotPositive { field, value });
    }
    Ok(())
}

pub(crate) fn require_max_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ConstructionError> {
    if value.len() > max {
        return Err(ConstructionError::TooLong {
            field,
            len: value.len(),
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_field() {
        let err = require_non_empty("source_address", "").unwrap_err();
        assert_eq!(err.to_string(), "source_address must not be empty");

        let err = require_non_negative("amount", -1).unwrap_err();
        assert_eq!(err.to_string(), "amount must be >= 0, got -1");
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(require_positive("amount", 1).is_ok());
        assert_eq!(
            require_positive("amount", 0),
            Err(ConstructionError::NotPositive {
                field: "amount",
                value: 0
            })
        );
    }

    #[test]
    fn max_len_counts_bytes_not_chars() {
        // "é" is two bytes in UTF-8.
        assert!(require_max_len("code", "éé", 4).is_ok());
        assert!(matches!(
            require_max_len("code", "ééé", 4),
            Err(ConstructionError::TooLong { len: 6, max: 4, .. })
        ));
    }
}
