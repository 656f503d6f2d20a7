//! Card number display grouping.
//!
//! Run with: `cargo run --example formatting`

use cardcheck::{format, mask, normalize};

fn main() {
    println!("=== Card Formatting ===\n");

    let cards = [
        ("4111111111111111", "Visa (4-4-4-4)"),
        ("371449635398431", "Amex (4-6-5)"),
        ("30569309025904", "Diners 14 digits (4-4-4-2)"),
        ("4222222222222", "Visa 13 digits (4-4-4-1)"),
    ];

    for (card, description) in cards {
        println!("  {:<28} {}", description, format::format_card_number(card));
    }
    println!();

    // Custom separators
    let digits = normalize("4111 1111 1111 1111");
    println!("Separators:");
    for sep in [" ", "-", ".", ""] {
        println!("  {:?}: {}", sep, format::format_with_separator(&digits, sep));
    }
    println!();

    // Live formatting while a user types
    println!("As-you-type (Amex):");
    let amex = "371449635398431";
    for end in [2, 4, 5, 10, 11, 15] {
        println!("  {:<16} -> {}", &amex[..end], format::format_card_number(&amex[..end]));
    }
    println!();

    println!("Groups: {:?}", format::split_into_groups(amex));
    println!("Stripped: {}", format::strip_formatting("3714 496353 98431"));
    println!();

    println!("Masking:");
    for (card, _) in cards {
        println!("  {:<18} {}", card, mask::mask_string(card));
    }
    println!("  last four: {}", mask::last_four("4111-1111-1111-1111"));
}
