//! Digit normalization for raw card number input.
//!
//! Everything downstream (checksum, network detection, grouping) works on the
//! normalized digit string, never on what the user typed.

use std::fmt;
use zeroize::Zeroize;

/// Minimum number of digits accepted as a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits accepted as a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// A string made only of the ASCII digits `0`-`9`.
///
/// The only way to build one is [`normalize`], so the invariant holds for
/// every value. The buffer is zeroed when dropped and `Debug` output is masked.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct NormalizedDigits {
    digits: String,
}

impl NormalizedDigits {
    /// Returns the digits as a string slice.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the digits as ASCII bytes (`b'0'..=b'9'`).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.digits.as_bytes()
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if there are no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if the digit count lies within
    /// [`MIN_CARD_DIGITS`]..=[`MAX_CARD_DIGITS`].
    #[inline]
    pub fn is_card_length(&self) -> bool {
        (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&self.len())
    }

    /// Returns the numeric digit values (0-9), left to right.
    ///
    /// The returned vector is a plain copy and is not wiped on drop.
    pub fn values(&self) -> Vec<u8> {
        self.digits.bytes().map(|b| b - b'0').collect()
    }
}

impl fmt::Debug for NormalizedDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedDigits")
            .field("digits", &crate::mask::mask_digits(self))
            .field("length", &self.len())
            .finish()
    }
}

impl Drop for NormalizedDigits {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

/// Strips every character that is not an ASCII decimal digit.
///
/// Order is preserved. Empty or digit-free input yields empty digits; this
/// function never fails.
///
/// # Example
///
/// ```
/// use cardcheck::normalize::normalize;
///
/// assert_eq!(normalize("4111-1111 1111.1111").as_str(), "4111111111111111");
/// assert!(normalize("  - ").is_empty());
/// ```
pub fn normalize(input: &str) -> NormalizedDigits {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    NormalizedDigits { digits }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_separators() {
        assert_eq!(normalize("4111 1111 1111 1111").as_str(), "4111111111111111");
        assert_eq!(normalize("4111-1111-1111-1111").as_str(), "4111111111111111");
        assert_eq!(normalize(" 4111\t1111\n").as_str(), "41111111");
    }

    #[test]
    fn test_strips_arbitrary_characters() {
        assert_eq!(normalize("card: 4a1b1c1").as_str(), "4111");
        assert_eq!(normalize("(371) 449-635").as_str(), "371449635");
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("abc-def").is_empty());
    }

    #[test]
    fn test_non_ascii_digits_are_dropped() {
        // Arabic-Indic and full-width digits are not card digits
        assert_eq!(normalize("٤١١١").as_str(), "");
        assert_eq!(normalize("４1").as_str(), "1");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("4111-1111 1111 1111");
        let twice = normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_values() {
        assert_eq!(normalize("40-19").values(), vec![4, 0, 1, 9]);
    }

    #[test]
    fn test_card_length_bounds() {
        assert!(!normalize("411111111111").is_card_length()); // 12
        assert!(normalize("4111111111111").is_card_length()); // 13
        assert!(normalize("4111111111111111111").is_card_length()); // 19
        assert!(!normalize("41111111111111111111").is_card_length()); // 20
    }

    #[test]
    fn test_debug_is_masked() {
        let digits = normalize("4111111111111111");
        let debug = format!("{:?}", digits);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("1111"));
    }
}
