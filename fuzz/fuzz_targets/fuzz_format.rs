//! Fuzz target for display grouping.

#![no_main]

use cardcheck::{format, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let digits = normalize(data);

    let _ = format::format_with_separator(&digits, "-");
    let _ = format::format_with_separator(&digits, "");
    let _ = format::split_into_groups(data);

    let formatted = format::format_card_number(data);
    assert_eq!(format::strip_formatting(&formatted), digits.as_str());
    assert!(!formatted.starts_with(' ') && !formatted.ends_with(' '));
    assert!(!formatted.contains("  "));
});
