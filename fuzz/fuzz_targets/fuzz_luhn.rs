//! Fuzz target for the Luhn checksum.

#![no_main]

use cardcheck::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let _ = luhn::passes(&digits);

    if !digits.is_empty() && digits.len() <= 64 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "check digit out of range");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::passes(&with_check), "appending the check digit must pass");
    }
});
