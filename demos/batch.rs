//! Batch and streaming validation.
//!
//! Run with: `cargo run --example batch`

use cardcheck::batch::{count_valid, validate_batch, BatchSummary};
use cardcheck::stream::ValidateExt;
use cardcheck::CardNetwork;

fn main() {
    println!("=== Batch Validation ===\n");

    let cards = [
        "4111111111111111",
        "5555555555554444",
        "378282246310005",
        "6011111111111117",
        "3530111333300000",
        "30569309025904",
        "4111111111111112",
        "123",
        "",
    ];

    let results = validate_batch(&cards);
    for (card, result) in cards.iter().zip(&results) {
        match result {
            Ok(r) => println!(
                "  {:<20} {:<16} {}",
                r.masked(),
                r.card_type().name(),
                if r.is_valid() { "valid" } else { "invalid" }
            ),
            Err(e) => println!("  {:<20} error: {}", format!("{:?}", card), e),
        }
    }
    println!();

    let summary = BatchSummary::from_results(&results);
    println!("Summary:");
    println!("  total:   {}", summary.total);
    println!("  valid:   {}", summary.valid);
    println!("  invalid: {}", summary.invalid);
    println!("  errors:  {}", summary.errors);
    for (network, count) in &summary.by_network {
        println!("  {:<16} {}", network, count);
    }
    println!("  Visa count: {}", summary.count_for(CardNetwork::Visa));
    println!();

    let (valid, invalid) = count_valid(&cards);
    println!("count_valid: {} valid, {} not", valid, invalid);
    println!();

    // Streaming keeps memory flat for large inputs
    println!("=== Streaming ===\n");
    let input = "4111111111111111\n4111111111111112\n371449635398431\nnot a card\n";

    for (line, result) in input.lines().indexed() {
        match result {
            Ok(r) => println!("  line {}: {} {}", line + 1, r.card_type().id(), r.is_valid()),
            Err(e) => println!("  line {}: {}", line + 1, e.kind()),
        }
    }

    let passing: Vec<_> = input.lines().valid_only().map(|r| r.masked()).collect();
    println!("  passing: {:?}", passing);
}
