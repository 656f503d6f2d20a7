//! Test card number generation.
//!
//! Generated numbers pass the Luhn check and classify as the requested
//! network. They are not connected to real accounts; use them for testing only.
//!
//! # Example
//!
//! ```
//! use cardcheck::generate::generate_card_deterministic;
//! use cardcheck::{validate_card, CardNetwork};
//!
//! let number = generate_card_deterministic(CardNetwork::Visa);
//! let result = validate_card(&number).unwrap();
//! assert!(result.is_valid());
//! assert_eq!(result.card_type(), CardNetwork::Visa);
//! ```

use crate::luhn;
use crate::network::CardNetwork;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the prefix used when generating cards for a network.
pub const fn prefix_for(network: CardNetwork) -> &'static str {
    match network {
        CardNetwork::Visa => "4",
        CardNetwork::Mastercard => "51",
        CardNetwork::AmericanExpress => "34",
        CardNetwork::Discover => "6011",
        CardNetwork::Jcb => "35",
        CardNetwork::DinersClub => "36",
        CardNetwork::Unknown => "9",
    }
}

/// Returns the usual card length for a network.
pub const fn default_length(network: CardNetwork) -> usize {
    match network {
        CardNetwork::AmericanExpress => 15,
        CardNetwork::DinersClub => 14,
        _ => 16,
    }
}

/// Generates a valid card number for a network, without randomness.
///
/// The body is zero-filled, so the same network always gives the same number.
pub fn generate_card_deterministic(network: CardNetwork) -> String {
    complete(prefix_digits(prefix_for(network)), default_length(network), || 0)
}

/// Generates a zero-filled valid card number with a custom prefix.
///
/// Non-digit characters in the prefix are ignored. Returns `None` if the
/// prefix leaves no room for the check digit.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card_deterministic_with_prefix;
///
/// let card = generate_card_deterministic_with_prefix("411111", 16).unwrap();
/// assert!(card.starts_with("411111"));
/// assert!(cardcheck::is_valid(&card));
///
/// assert!(generate_card_deterministic_with_prefix("4111", 4).is_none());
/// ```
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> Option<String> {
    let digits = prefix_digits(prefix);
    if digits.len() >= length {
        return None;
    }
    Some(complete(digits, length, || 0))
}

/// Generates a random valid card number for a network.
#[cfg(feature = "generate")]
pub fn generate_card(network: CardNetwork) -> String {
    let mut rng = rand::thread_rng();
    complete(prefix_digits(prefix_for(network)), default_length(network), || {
        rng.gen_range(0..10)
    })
}

/// Generates a random valid card number with the given prefix and length,
/// drawing from the provided RNG.
///
/// Useful with a seeded RNG for reproducible fixtures. Returns `None` if the
/// prefix leaves no room for the check digit.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> Option<String> {
    let digits = prefix_digits(prefix);
    if digits.len() >= length {
        return None;
    }
    Some(complete(digits, length, || rng.gen_range(0..10)))
}

/// Generates several random card numbers for a network.
#[cfg(feature = "generate")]
pub fn generate_cards(network: CardNetwork, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_card(network)).collect()
}

fn prefix_digits(prefix: &str) -> Vec<u8> {
    prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Pads `digits` to `length - 1` from `fill`, then appends the check digit.
fn complete(mut digits: Vec<u8>, length: usize, mut fill: impl FnMut() -> u8) -> String {
    while digits.len() + 1 < length {
        digits.push(fill());
    }
    digits.push(luhn::generate_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::classify;
    use crate::normalize::normalize;
    use crate::{is_valid, passes_luhn};

    #[test]
    fn test_deterministic_all_networks() {
        for network in CardNetwork::ALL {
            let card = generate_card_deterministic(network);
            assert_eq!(card.len(), default_length(network));
            assert!(is_valid(&card), "{:?} card {} should be valid", network, card);
            assert_eq!(classify(&normalize(&card)), network);
        }
    }

    #[test]
    fn test_deterministic_is_reproducible() {
        assert_eq!(
            generate_card_deterministic(CardNetwork::Discover),
            generate_card_deterministic(CardNetwork::Discover)
        );
    }

    #[test]
    fn test_deterministic_amex() {
        let card = generate_card_deterministic(CardNetwork::AmericanExpress);
        assert!(card.starts_with("34"));
        assert_eq!(card.len(), 15);
    }

    #[test]
    fn test_with_prefix() {
        let card = generate_card_deterministic_with_prefix("1234-56", 16).unwrap();
        assert!(card.starts_with("123456"));
        assert_eq!(card.len(), 16);
        assert!(passes_luhn(&card));
    }

    #[test]
    fn test_prefix_too_long() {
        assert!(generate_card_deterministic_with_prefix("4111111111111111", 16).is_none());
        assert!(generate_card_deterministic_with_prefix("", 0).is_none());
    }

    #[cfg(feature = "generate")]
    mod random_tests {
        use super::*;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        #[test]
        fn test_generate_card_all_networks() {
            for network in CardNetwork::ALL {
                let card = generate_card(network);
                assert!(is_valid(&card));
                assert_eq!(classify(&normalize(&card)), network);
            }
        }

        #[test]
        fn test_generate_cards_multiple() {
            let cards = generate_cards(CardNetwork::Mastercard, 10);
            assert_eq!(cards.len(), 10);
            assert!(cards.iter().all(|c| is_valid(c)));
        }

        #[test]
        fn test_seeded_rng_is_reproducible() {
            let a = generate_card_with_rng("4", 16, &mut StdRng::seed_from_u64(7)).unwrap();
            let b = generate_card_with_rng("4", 16, &mut StdRng::seed_from_u64(7)).unwrap();
            assert_eq!(a, b);
            assert!(is_valid(&a));
        }
    }
}
