//! Card number formatting utilities.
//!
//! Grouping is computed on the normalized digits, so whatever separators the
//! input carried have no effect on the output.
//!
//! # Format Conventions
//!
//! - **American Express** (prefix 34/37): `XXXX XXXXXX XXXXX`
//! - **Everything else**: groups of 4 with the remainder at the end
//!
//! # Example
//!
//! ```
//! use cardcheck::format::{format_card_number, format_with_separator};
//! use cardcheck::normalize::normalize;
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_card_number("371449635398431"), "3714 496353 98431");
//! assert_eq!(
//!     format_with_separator(&normalize("4111111111111111"), "-"),
//!     "4111-1111-1111-1111"
//! );
//! ```

use crate::network::has_amex_prefix;
use crate::normalize::{normalize, NormalizedDigits};

/// American Express group sizes.
const AMEX_GROUPS: [usize; 3] = [4, 6, 5];

/// Standard group size.
const BLOCK: usize = 4;

/// Formats normalized digits with single-space separators.
///
/// Partial input is grouped as far as it goes, left to right.
///
/// # Example
///
/// ```
/// use cardcheck::format::format_digits;
/// use cardcheck::normalize::normalize;
///
/// assert_eq!(format_digits(&normalize("3714496")), "3714 496");
/// assert_eq!(format_digits(&normalize("4222222222222")), "4222 2222 2222 2");
/// ```
pub fn format_digits(digits: &NormalizedDigits) -> String {
    format_with_separator(digits, " ")
}

/// Formats normalized digits with a custom separator.
pub fn format_with_separator(digits: &NormalizedDigits, separator: &str) -> String {
    let groups = split_digits(digits);
    groups.join(separator)
}

/// Normalizes raw input, then formats it with single spaces.
///
/// # Example
///
/// ```
/// use cardcheck::format::format_card_number;
///
/// assert_eq!(format_card_number("4111-1111-1111-1111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("  "), "");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_digits(&normalize(input))
}

/// Splits raw input into its display groups.
///
/// # Example
///
/// ```
/// use cardcheck::format::split_into_groups;
///
/// assert_eq!(split_into_groups("4111111111111111"), vec!["4111", "1111", "1111", "1111"]);
/// assert_eq!(split_into_groups("371449635398431"), vec!["3714", "496353", "98431"]);
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    split_digits(&normalize(input))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use cardcheck::format::strip_formatting;
///
/// assert_eq!(strip_formatting("3714 496353 98431"), "371449635398431");
/// ```
pub fn strip_formatting(input: &str) -> String {
    normalize(input).as_str().to_string()
}

/// Borrowing split of the digit string into display groups.
fn split_digits(digits: &NormalizedDigits) -> Vec<&str> {
    let s = digits.as_str();
    let sizes = group_sizes(digits.as_bytes(), s.len());

    let mut groups = Vec::with_capacity(sizes.len());
    let mut pos = 0;
    for size in sizes {
        let end = (pos + size).min(s.len());
        groups.push(&s[pos..end]);
        pos = end;
    }
    groups
}

/// Returns the group sizes covering exactly `length` digits.
///
/// Amex-prefixed input takes the 4-6-5 pattern, truncated for partial input.
/// Digits past the fifteenth stay together as one trailing group so that the
/// output always round-trips.
fn group_sizes(ascii: &[u8], length: usize) -> Vec<usize> {
    let prefix: Vec<u8> = ascii.iter().take(2).map(|b| b - b'0').collect();

    if has_amex_prefix(&prefix) {
        let mut sizes = Vec::with_capacity(AMEX_GROUPS.len() + 1);
        let mut remaining = length;
        for size in AMEX_GROUPS {
            if remaining == 0 {
                break;
            }
            let take = size.min(remaining);
            sizes.push(take);
            remaining -= take;
        }
        if remaining > 0 {
            sizes.push(remaining);
        }
        return sizes;
    }

    let mut sizes = vec![BLOCK; length / BLOCK];
    if length % BLOCK > 0 {
        sizes.push(length % BLOCK);
    }
    sizes
}
