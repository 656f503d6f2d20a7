//! Luhn algorithm implementation for credit card validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! Doubling parity is anchored to the rightmost digit: position 0 (the check
//! digit) is never doubled, position 1 is, and so on leftwards.

use crate::normalize::NormalizedDigits;

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a normalized card number.
///
/// Returns `false` straight away if the length is outside `13..=19`,
/// otherwise runs the checksum.
///
/// # Example
///
/// ```
/// use cardcheck::{luhn, normalize::normalize};
///
/// assert!(luhn::validate(&normalize("4111 1111 1111 1111")));
/// assert!(!luhn::validate(&normalize("4111 1111 1111 1112")));
/// // Checksum is fine but too short to be a card
/// assert!(!luhn::validate(&normalize("18")));
/// ```
pub fn validate(digits: &NormalizedDigits) -> bool {
    if !digits.is_card_length() {
        return false;
    }
    passes_ascii(digits.as_bytes())
}

/// Runs the checksum straight over ASCII digit bytes (`b'0'..=b'9'`).
///
/// Reads the bytes in place so no unwiped copy of the number is made.
#[inline]
pub(crate) fn passes_ascii(ascii: &[u8]) -> bool {
    if ascii.is_empty() {
        return false;
    }
    luhn_sum(ascii.iter().map(|&b| b - b'0')) % 10 == 0
}

/// Runs the raw checksum over digit values (0-9), with no length bounds.
///
/// An empty slice does not pass.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::passes;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(passes(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!passes(&invalid));
/// ```
#[inline]
pub fn passes(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    luhn_sum(digits.iter().copied())
}

fn luhn_sum(digits: impl DoubleEndedIterator<Item = u8>) -> u32 {
    digits
        .rev()
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, returns the digit that makes the
/// full number pass. Every existing digit shifts one position left once the
/// check digit is appended, so the rightmost one here gets doubled.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn test_valid_cards() {
        // Visa test cards
        assert!(passes(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(passes(&[4, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8, 1]));

        // Mastercard test card
        assert!(passes(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]));

        // Amex test card
        assert!(passes(&[3, 7, 1, 4, 4, 9, 6, 3, 5, 3, 9, 8, 4, 3, 1]));

        // Discover test card
        assert!(passes(&[6, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 7]));

        // Diners Club
        assert!(passes(&[3, 0, 5, 6, 9, 3, 0, 9, 0, 2, 5, 9, 0, 4]));
    }

    #[test]
    fn test_invalid_cards() {
        assert!(!passes(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        assert!(!passes(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_validate_enforces_length() {
        // "0000000000000" passes the checksum at any length
        assert!(!validate(&normalize("000000000000"))); // 12
        assert!(validate(&normalize("0000000000000"))); // 13
        assert!(validate(&normalize("0000000000000000000"))); // 19
        assert!(!validate(&normalize("00000000000000000000"))); // 20
        assert!(!validate(&normalize("")));
    }

    #[test]
    fn test_validate_ignores_separators() {
        assert!(validate(&normalize("4111-1111-1111-1111")));
        assert!(!validate(&normalize("4111-1111-1111-1112")));
    }

    #[test]
    fn test_parity_anchored_right() {
        // 59 -> 5 doubled = 10 -> 1, plus 9 = 10
        assert!(passes(&[5, 9]));
        // Leading zeros shift nothing
        assert!(passes(&[0, 0, 5, 9]));
        assert_eq!(compute_checksum(&[5, 9]), 10);
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(generate_check_digit(&partial), 1);

        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 4);

        let partial = [3, 7, 1, 4, 4, 9, 6, 3, 5, 3, 9, 8, 4, 3];
        assert_eq!(generate_check_digit(&partial), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(!passes(&[]));
    }

    #[test]
    fn test_single_digit() {
        assert!(passes(&[0]));
        assert!(!passes(&[1]));
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }

    #[test]
    fn test_ascii_checksum_matches_values() {
        for card in ["4111111111111111", "4111111111111112", "371449635398431", "59", "0"] {
            let digits = normalize(card);
            assert_eq!(passes_ascii(digits.as_bytes()), passes(&digits.values()), "{}", card);
        }
        assert!(!passes_ascii(b""));
    }
}
