//! Card network classification using prefix matching.
//!
//! The prefix table below is the contract: patterns overlap, so they are tried
//! in a fixed order and the first match wins. Length and checksum play no part,
//! which means partial input can already be classified while it is typed.

use crate::normalize::NormalizedDigits;
use std::fmt;
use std::str::FromStr;

/// Card networks recognised by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardNetwork {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55, 22-27
    Mastercard,
    /// American Express - prefix 34, 37
    AmericanExpress,
    /// Discover - prefix 6011, 65
    Discover,
    /// JCB - prefix 35
    #[cfg_attr(feature = "serde", serde(rename = "JCB"))]
    Jcb,
    /// Diners Club - prefix 300-305, 36, 38
    DinersClub,
    /// No prefix rule matched.
    Unknown,
}

impl CardNetwork {
    /// Every network, in classification precedence order.
    pub const ALL: [CardNetwork; 7] = [
        Self::Visa,
        Self::Mastercard,
        Self::AmericanExpress,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
        Self::Unknown,
    ];

    /// Stable identifier used on the wire and in `Display`.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "AmericanExpress",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "DinersClub",
            Self::Unknown => "Unknown",
        }
    }

    /// Human-readable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unrecognised network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card network: {0}")]
pub struct ParseNetworkError(pub String);

impl FromStr for CardNetwork {
    type Err = ParseNetworkError;

    /// Accepts the wire identifier, the display name, and common short forms,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "americanexpress" | "american express" | "amex" => Ok(Self::AmericanExpress),
            "discover" => Ok(Self::Discover),
            "jcb" => Ok(Self::Jcb),
            "dinersclub" | "diners club" | "diners" => Ok(Self::DinersClub),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

/// Classifies normalized digits.
///
/// # Example
///
/// ```
/// use cardcheck::network::{classify, CardNetwork};
/// use cardcheck::normalize::normalize;
///
/// assert_eq!(classify(&normalize("4111 1111 1111 1111")), CardNetwork::Visa);
/// assert_eq!(classify(&normalize("3714")), CardNetwork::AmericanExpress);
/// assert_eq!(classify(&normalize("")), CardNetwork::Unknown);
/// ```
#[inline]
pub fn classify(digits: &NormalizedDigits) -> CardNetwork {
    // No rule looks past the fourth digit
    let ascii = digits.as_bytes();
    let mut prefix = [0u8; 4];
    for (slot, b) in prefix.iter_mut().zip(ascii) {
        *slot = b - b'0';
    }
    classify_digits(&prefix[..ascii.len().min(prefix.len())])
}

/// Classifies a slice of digit values (0-9).
#[inline]
pub fn classify_digits(digits: &[u8]) -> CardNetwork {
    match digits {
        [4, ..] => CardNetwork::Visa,

        [5, 1..=5, ..] | [2, 2..=7, ..] => CardNetwork::Mastercard,

        [3, 4 | 7, ..] => CardNetwork::AmericanExpress,

        [6, 0, 1, 1, ..] | [6, 5, ..] => CardNetwork::Discover,

        [3, 5, ..] => CardNetwork::Jcb,

        [3, 0, 0..=5, ..] | [3, 6 | 8, ..] => CardNetwork::DinersClub,

        _ => CardNetwork::Unknown,
    }
}

/// Returns true if the digits start with an American Express prefix (34 or 37).
///
/// The formatter keys its 4-6-5 grouping off this.
#[inline]
pub fn has_amex_prefix(digits: &[u8]) -> bool {
    matches!(digits, [3, 4 | 7, ..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn net(s: &str) -> CardNetwork {
        classify(&normalize(s))
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(net("4111111111111111"), CardNetwork::Visa);
        assert_eq!(net("4222222222222"), CardNetwork::Visa);
        assert_eq!(net("4"), CardNetwork::Visa);
    }

    #[test]
    fn test_mastercard_detection() {
        for prefix in ["51", "52", "53", "54", "55", "22", "23", "24", "25", "26", "27"] {
            assert_eq!(net(prefix), CardNetwork::Mastercard, "prefix {}", prefix);
        }
        assert_eq!(net("50"), CardNetwork::Unknown);
        assert_eq!(net("56"), CardNetwork::Unknown);
        assert_eq!(net("21"), CardNetwork::Unknown);
        assert_eq!(net("28"), CardNetwork::Unknown);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(net("340000000000009"), CardNetwork::AmericanExpress);
        assert_eq!(net("371449635398431"), CardNetwork::AmericanExpress);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(net("6011111111111117"), CardNetwork::Discover);
        assert_eq!(net("6011000000000000"), CardNetwork::Discover);
        assert_eq!(net("6500000000000000"), CardNetwork::Discover);
        // 644-649 is not in the table
        assert_eq!(net("6445644564456445"), CardNetwork::Unknown);
        assert_eq!(net("6012"), CardNetwork::Unknown);
        assert_eq!(net("601"), CardNetwork::Unknown);
    }

    #[test]
    fn test_jcb_detection() {
        assert_eq!(net("3530111333300000"), CardNetwork::Jcb);
        // Any 35 prefix, not only 3528-3589
        assert_eq!(net("3500"), CardNetwork::Jcb);
    }

    #[test]
    fn test_diners_club_detection() {
        for prefix in ["300", "301", "302", "303", "304", "305", "36", "38"] {
            assert_eq!(net(prefix), CardNetwork::DinersClub, "prefix {}", prefix);
        }
        assert_eq!(net("306"), CardNetwork::Unknown);
        assert_eq!(net("309"), CardNetwork::Unknown);
        assert_eq!(net("30"), CardNetwork::Unknown);
        assert_eq!(net("39"), CardNetwork::Unknown);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(net(""), CardNetwork::Unknown);
        assert_eq!(net("0000000000000000"), CardNetwork::Unknown);
        assert_eq!(net("1234567890123456"), CardNetwork::Unknown);
        assert_eq!(net("9"), CardNetwork::Unknown);
        assert_eq!(net("3"), CardNetwork::Unknown);
        assert_eq!(net("6"), CardNetwork::Unknown);
    }

    #[test]
    fn test_amex_prefix() {
        assert!(has_amex_prefix(&[3, 4]));
        assert!(has_amex_prefix(&[3, 7, 1]));
        assert!(!has_amex_prefix(&[3]));
        assert!(!has_amex_prefix(&[3, 5]));
    }

    #[test]
    fn test_ids_and_parse() {
        for network in CardNetwork::ALL {
            assert_eq!(network.id().parse::<CardNetwork>(), Ok(network));
            assert_eq!(network.name().parse::<CardNetwork>(), Ok(network));
        }
        assert_eq!("amex".parse::<CardNetwork>(), Ok(CardNetwork::AmericanExpress));
        assert!("maestro".parse::<CardNetwork>().is_err());
        assert_eq!(CardNetwork::Jcb.to_string(), "JCB");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&CardNetwork::Jcb).unwrap(), "\"JCB\"");
        assert_eq!(
            serde_json::to_string(&CardNetwork::AmericanExpress).unwrap(),
            "\"AmericanExpress\""
        );
    }

    #[test]
    fn test_classify_short_and_long_input() {
        for input in ["", "3", "30", "305", "6011", "601", "65", "2720", "4111111111111111111"] {
            let digits = normalize(input);
            assert_eq!(classify(&digits), classify_digits(&digits.values()), "{:?}", input);
        }
        assert_eq!(classify(&normalize("601")), CardNetwork::Unknown);
        assert_eq!(classify(&normalize("6011")), CardNetwork::Discover);
        assert_eq!(classify(&normalize("305")), CardNetwork::DinersClub);
    }
}
