//! Fuzz target for card validation.
//!
//! validate_card must never panic, and its outcome must agree with the
//! digit count and the plain checksum.

#![no_main]

use cardcheck::{is_valid, normalize, passes_luhn, validate_card, ValidationError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = normalize(data);

    match validate_card(data) {
        Ok(result) => {
            assert!(digits.is_card_length());
            assert_eq!(result.is_valid(), passes_luhn(data));
            assert_eq!(result.is_valid(), is_valid(data));
        }
        Err(ValidationError::EmptyInput) => assert!(digits.is_empty()),
        Err(ValidationError::OutOfRangeLength { length, .. }) => {
            assert_eq!(length, digits.len());
            assert!(!is_valid(data));
        }
    }
});
