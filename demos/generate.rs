//! Test card number generation.
//!
//! Run with: `cargo run --example generate --features generate`

use cardcheck::generate::{
    default_length, generate_card, generate_card_deterministic,
    generate_card_deterministic_with_prefix, generate_card_with_rng, generate_cards, prefix_for,
};
use cardcheck::{format, validate_card, CardNetwork};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("=== Test Card Generation ===\n");
    println!("Generated numbers pass Luhn but belong to no real account.\n");

    println!("Deterministic (zero-filled):");
    for network in CardNetwork::ALL {
        let card = generate_card_deterministic(network);
        println!(
            "  {:<18} prefix {:<5} len {:<3} {}",
            network.name(),
            prefix_for(network),
            default_length(network),
            format::format_card_number(&card)
        );
    }
    println!();

    println!("Random:");
    for network in CardNetwork::ALL {
        let card = generate_card(network);
        let detected = validate_card(&card).map(|r| r.card_type());
        println!("  {:<18} {:<20} detected {:?}", network.name(), card, detected);
    }
    println!();

    println!("Five Mastercards:");
    for card in generate_cards(CardNetwork::Mastercard, 5) {
        println!("  {}", card);
    }
    println!();

    // Seeded RNG gives reproducible fixtures
    let mut rng = StdRng::seed_from_u64(42);
    println!("Seeded, custom prefix:");
    for _ in 0..3 {
        if let Some(card) = generate_card_with_rng("222100", 16, &mut rng) {
            println!("  {}", card);
        }
    }
    println!();

    match generate_card_deterministic_with_prefix("4111111111111111111", 19) {
        Some(card) => println!("19 digits: {}", card),
        None => println!("prefix too long for 19 digits"),
    }
}
