//! # cardcheck
//!
//! Credit card number checker: strips input down to its digits, runs the Luhn
//! checksum, detects the card network from the prefix and groups the digits
//! for display.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{validate_card, CardNetwork, ValidationError};
//!
//! let result = validate_card("4111 1111 1111 1111").unwrap();
//! assert!(result.is_valid());
//! assert_eq!(result.card_type(), CardNetwork::Visa);
//! assert_eq!(result.formatted(), "4111 1111 1111 1111");
//!
//! // Safe for logging - never exposes the full number
//! println!("Card: {}", result.masked()); // "****-****-****-1111"
//!
//! // A failing checksum is a result, not an error
//! assert!(!validate_card("4111111111111112").unwrap().is_valid());
//!
//! // Input that cannot be a card number is an error
//! assert_eq!(validate_card("").unwrap_err(), ValidationError::EmptyInput);
//! assert!(matches!(
//!     validate_card("123"),
//!     Err(ValidationError::OutOfRangeLength { length: 3, .. })
//! ));
//! ```
//!
//! ## Card Formatting
//!
//! ```rust
//! use cardcheck::format;
//!
//! assert_eq!(format::format_card_number("4111111111111111"), "4111 1111 1111 1111");
//!
//! // Amex uses 4-6-5 grouping, also while typing
//! assert_eq!(format::format_card_number("371449635398431"), "3714 496353 98431");
//! assert_eq!(format::format_card_number("3714496"), "3714 496");
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use cardcheck::batch::{validate_batch, BatchSummary};
//!
//! let cards = ["4111111111111111", "6011111111111117", "123"];
//! let summary = BatchSummary::from_results(&validate_batch(&cards));
//! assert_eq!(summary.valid, 2);
//! assert_eq!(summary.errors, 1);
//! ```
//!
//! ## Supported Networks
//!
//! Tried in this order, first match wins:
//!
//! | Network | Prefix |
//! |---------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55, 22-27 |
//! | American Express | 34, 37 |
//! | Discover | 6011, 65 |
//! | JCB | 35 |
//! | Diners Club | 300-305, 36, 38 |
//!
//! Anything else is `Unknown`.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for results and networks |
//! | `generate` | Random test card generation |
//! | `parallel` | Rayon-based batch validation |
//! | `tracing` | Debug events from `validate_card` |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//! | `wasm` | WebAssembly bindings |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod error;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod network;
pub mod normalize;
pub mod stream;
pub mod validate;

#[cfg(feature = "wasm")]
#[allow(missing_docs)]
mod wasm;

pub use error::ValidationError;
pub use network::CardNetwork;
pub use normalize::{normalize, NormalizedDigits, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use validate::{is_valid, passes_luhn, validate_card, validate_normalized, ValidationResult};
