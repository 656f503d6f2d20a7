//! WebAssembly bindings for the browser-side card checker.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { validate_card, format_card } from 'cardcheck';
//!
//! await init();
//!
//! const report = validate_card("4111 1111 1111 1111");
//! if (report.error) {
//!     console.log(`Rejected: ${report.error}`);
//! } else {
//!     console.log(report.valid, report.card_type, report.formatted);
//! }
//!
//! // Live grouping while the user types
//! input.value = format_card(input.value);
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::network::CardNetwork;

/// Validation outcome handed to JavaScript.
///
/// `error` is set (to `"EmptyInput"` or `"OutOfRangeLength"`) when the input
/// was rejected; the other fields are then empty.
#[wasm_bindgen]
pub struct CardReport {
    valid: bool,
    card_type: Option<String>,
    formatted: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

#[wasm_bindgen]
impl CardReport {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn card_type(&self) -> Option<String> {
        self.card_type.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn formatted(&self) -> Option<String> {
        self.formatted.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

/// Validates a card number.
///
/// # Example
/// ```javascript
/// const report = validate_card("371449635398431");
/// console.log(report.card_type);  // "AmericanExpress"
/// console.log(report.formatted);  // "3714 496353 98431"
/// ```
#[wasm_bindgen]
pub fn validate_card(card_number: &str) -> CardReport {
    match crate::validate_card(card_number) {
        Ok(result) => CardReport {
            valid: result.is_valid(),
            card_type: Some(result.card_type().id().to_string()),
            formatted: Some(result.formatted().to_string()),
            error: None,
            message: None,
        },
        Err(e) => CardReport {
            valid: false,
            card_type: None,
            formatted: None,
            error: Some(e.kind().to_string()),
            message: Some(e.to_string()),
        },
    }
}

/// Quick check: acceptable length and passing checksum.
#[wasm_bindgen]
pub fn is_valid(card_number: &str) -> bool {
    crate::is_valid(card_number)
}

/// Detects the network from a (partial) card number.
///
/// # Example
/// ```javascript
/// detect_network("4111");  // "Visa"
/// ```
#[wasm_bindgen]
pub fn detect_network(card_number: &str) -> String {
    crate::network::classify(&crate::normalize::normalize(card_number))
        .id()
        .to_string()
}

/// Groups the digits of a (partial) card number with spaces.
#[wasm_bindgen]
pub fn format_card(card_number: &str) -> String {
    crate::format::format_card_number(card_number)
}

/// Strips everything but digits.
#[wasm_bindgen]
pub fn strip_formatting(card_number: &str) -> String {
    crate::format::strip_formatting(card_number)
}

/// Masks a card number, showing only the last 4 digits.
#[wasm_bindgen]
pub fn mask_card(card_number: &str) -> String {
    crate::mask::mask_string(card_number)
}

/// Generates a valid test card number for a network name.
///
/// # Example
/// ```javascript
/// generate_test_card("amex");  // "340000000000009"
/// ```
#[wasm_bindgen]
pub fn generate_test_card(network: &str) -> Result<String, JsValue> {
    let network: CardNetwork = network
        .parse()
        .map_err(|e: crate::network::ParseNetworkError| JsValue::from_str(&e.to_string()))?;
    Ok(crate::generate::generate_card_deterministic(network))
}

/// Validates an array of card numbers; non-string entries are skipped.
#[wasm_bindgen]
pub fn validate_batch(card_numbers: js_sys::Array) -> js_sys::Array {
    let results = js_sys::Array::new();

    for card in card_numbers.iter() {
        if let Some(card_str) = card.as_string() {
            results.push(&JsValue::from(validate_card(&card_str)));
        }
    }

    results
}
