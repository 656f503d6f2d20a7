//! Error types for credit card validation.
//!
//! Only input-shape problems are errors. A number of acceptable length whose
//! checksum fails is still a successful validation with `is_valid == false`.

use thiserror::Error;

/// Errors that can occur during credit card validation.
///
/// Both variants are local, recoverable conditions meant to be reported back
/// to whoever supplied the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input contained no digits at all (empty, blank, or separators only).
    #[error("card number contains no digits")]
    EmptyInput,

    /// The number of digits is outside the accepted range.
    #[error("card number must have {minimum} to {maximum} digits, got {length}")]
    OutOfRangeLength {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum accepted digit count (13).
        minimum: usize,
        /// The maximum accepted digit count (19).
        maximum: usize,
    },
}

impl ValidationError {
    /// Stable machine-readable name of the error condition.
    ///
    /// Used as the `error` field by the HTTP and WASM surfaces.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::OutOfRangeLength { .. } => "OutOfRangeLength",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::EmptyInput.to_string(),
            "card number contains no digits"
        );

        assert_eq!(
            ValidationError::OutOfRangeLength {
                length: 3,
                minimum: 13,
                maximum: 19
            }
            .to_string(),
            "card number must have 13 to 19 digits, got 3"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ValidationError::EmptyInput.kind(), "EmptyInput");
        assert_eq!(
            ValidationError::OutOfRangeLength {
                length: 20,
                minimum: 13,
                maximum: 19
            }
            .kind(),
            "OutOfRangeLength"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidationError>();
    }
}
