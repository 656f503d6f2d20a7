//! Basic credit card validation example.
//!
//! Run with: `cargo run --example basic`

use cardcheck::{is_valid, validate_card, ValidationError};

fn main() {
    println!("=== Basic Credit Card Validation ===\n");

    // Example 1: Validate a Visa card
    let visa_number = "4111-1111-1111-1111";
    println!("Validating: {}", visa_number);

    match validate_card(visa_number) {
        Ok(result) => {
            println!("  Valid: {}", if result.is_valid() { "yes" } else { "no" });
            println!("  Network: {}", result.card_type().name());
            println!("  Formatted: {}", result.formatted());
            println!("  Masked: {}", result.masked());
        }
        Err(e) => {
            println!("  Rejected: {}", e);
        }
    }
    println!();

    // Example 2: Quick boolean check
    let test_cards = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "Mastercard"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("3566002020360505", "JCB"),
        ("30569309025904", "Diners Club"),
        ("4111111111111112", "Visa, bad checksum"),
    ];

    println!("Quick validation checks:");
    for (number, description) in test_cards {
        println!(
            "  {:<20} {:<20} {}",
            number,
            description,
            if is_valid(number) { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 3: A failing checksum is not an error
    println!("Checksum failures still classify and format:");
    if let Ok(result) = validate_card("4111 1111 1111 1112") {
        println!("  {:?}", result);
    }
    println!();

    // Example 4: Input that cannot be a card number
    println!("Error handling examples:");

    let error_cases = [
        ("", "Empty input"),
        ("  - -  ", "Separators only"),
        ("411111111", "Too short"),
        ("41111111111111111111", "Too long"),
    ];

    for (number, description) in error_cases {
        match validate_card(number) {
            Ok(_) => println!("  {}: unexpectedly accepted", description),
            Err(e) => {
                let detail = match e {
                    ValidationError::EmptyInput => "no digits".to_string(),
                    ValidationError::OutOfRangeLength {
                        length,
                        minimum,
                        maximum,
                    } => format!("{} digits, need {}-{}", length, minimum, maximum),
                };
                println!("  {:<16} {:<18} {}", description, e.kind(), detail);
            }
        }
    }
}
