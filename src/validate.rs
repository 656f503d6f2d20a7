//! Main validation orchestration for credit card numbers.
//!
//! Normalizes once, then feeds the same digits to the Luhn check, the network
//! classifier and the formatter.

use std::fmt;
use zeroize::Zeroize;

use crate::error::ValidationError;
use crate::format::format_digits;
use crate::luhn;
use crate::network::{classify, CardNetwork};
use crate::normalize::{normalize, NormalizedDigits, MAX_CARD_DIGITS, MIN_CARD_DIGITS};

/// Outcome of validating a card number of acceptable length.
///
/// Built fresh per call and never mutated afterwards. `formatted` contains the
/// full number, so `Debug` and `Display` show a masked form instead, and the
/// string is zeroed on drop.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationResult {
    is_valid: bool,
    card_type: CardNetwork,
    formatted: String,
}

impl ValidationResult {
    /// Whether the Luhn checksum passed.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The network detected from the prefix.
    #[inline]
    pub const fn card_type(&self) -> CardNetwork {
        self.card_type
    }

    /// The grouped digits, e.g. `4111 1111 1111 1111`.
    ///
    /// # Security Warning
    ///
    /// This is the full card number. Use [`masked`](Self::masked) for logs.
    #[inline]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The number masked down to its last 4 digits.
    pub fn masked(&self) -> String {
        crate::mask::mask_string(&self.formatted)
    }
}

impl fmt::Debug for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationResult")
            .field("is_valid", &self.is_valid)
            .field("card_type", &self.card_type)
            .field("formatted", &self.masked())
            .finish()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_valid { "valid" } else { "invalid" };
        write!(f, "{} {} ({})", self.card_type, self.masked(), status)
    }
}

impl Drop for ValidationResult {
    fn drop(&mut self) {
        self.formatted.zeroize();
    }
}

/// Validates a raw card number string.
///
/// Non-digit characters are ignored. Fails only when no digits are left or
/// their count is outside `13..=19`; a bad checksum is reported through
/// [`ValidationResult::is_valid`].
///
/// # Example
///
/// ```
/// use cardcheck::{validate_card, CardNetwork, ValidationError};
///
/// let result = validate_card("4111 1111 1111 1111").unwrap();
/// assert!(result.is_valid());
/// assert_eq!(result.card_type(), CardNetwork::Visa);
/// assert_eq!(result.formatted(), "4111 1111 1111 1111");
///
/// let result = validate_card("4111111111111112").unwrap();
/// assert!(!result.is_valid());
///
/// assert_eq!(validate_card("   ").unwrap_err(), ValidationError::EmptyInput);
/// ```
pub fn validate_card(input: &str) -> Result<ValidationResult, ValidationError> {
    validate_normalized(&normalize(input))
}

/// Validates digits that were already normalized.
pub fn validate_normalized(digits: &NormalizedDigits) -> Result<ValidationResult, ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if !digits.is_card_length() {
        return Err(ValidationError::OutOfRangeLength {
            length: digits.len(),
            minimum: MIN_CARD_DIGITS,
            maximum: MAX_CARD_DIGITS,
        });
    }

    let result = ValidationResult {
        is_valid: luhn::validate(digits),
        card_type: classify(digits),
        formatted: format_digits(digits),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        network = %result.card_type,
        length = digits.len(),
        valid = result.is_valid,
        "validated card number"
    );

    Ok(result)
}

/// Quick yes/no: acceptable length and passing checksum.
///
/// # Example
///
/// ```
/// use cardcheck::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// assert!(!is_valid("123"));
/// ```
#[inline]
pub fn is_valid(input: &str) -> bool {
    validate_card(input).map(|r| r.is_valid()).unwrap_or(false)
}

/// Checks only the Luhn checksum of whatever digits the input holds.
///
/// No length bounds apply.
///
/// # Example
///
/// ```
/// use cardcheck::passes_luhn;
///
/// assert!(passes_luhn("4111111111111111"));
/// assert!(passes_luhn("59"));
/// assert!(!passes_luhn(""));
/// ```
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    luhn::passes_ascii(normalize(input).as_bytes())
}
