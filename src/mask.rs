//! PCI-DSS style masking for display and logging.
//!
//! PCI-DSS allows displaying the first 6 and last 4 digits at most; the
//! helpers here show only the last 4. Never display or log the full number.

use crate::normalize::{normalize, NormalizedDigits};

/// Masks digits, showing only the last 4.
///
/// Format: `****-****-****-1234`. Four digits or fewer are masked entirely.
///
/// # Example
///
/// ```
/// use cardcheck::mask::mask_digits;
/// use cardcheck::normalize::normalize;
///
/// assert_eq!(mask_digits(&normalize("4111 1111 1111 1111")), "****-****-****-1111");
/// assert_eq!(mask_digits(&normalize("123")), "***");
/// ```
pub fn mask_digits(digits: &NormalizedDigits) -> String {
    let s = digits.as_str();
    let len = s.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + len / 4);

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }
    result.push('-');
    result.push_str(&s[masked_count..]);
    result
}

/// Masks a raw card number string.
///
/// Non-digit characters are stripped before masking.
#[inline]
pub fn mask_string(input: &str) -> String {
    mask_digits(&normalize(input))
}

/// Extracts the last 4 digits from raw input.
///
/// Returns an empty string if there are fewer than 4 digits.
pub fn last_four(input: &str) -> String {
    let digits = normalize(input);
    let s = digits.as_str();
    if s.len() >= 4 {
        s[s.len() - 4..].to_string()
    } else {
        String::new()
    }
}

/// Constant-time comparison of two byte slices.
///
/// Runs in the same time regardless of where the slices differ. Use it when
/// comparing card numbers or tokens.
///
/// # Example
///
/// ```
/// use cardcheck::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"4111111111111111", b"4111111111111111"));
/// assert!(!constant_time_eq(b"4111111111111111", b"4111111111111112"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}
