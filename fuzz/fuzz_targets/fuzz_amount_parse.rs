//! Fuzz target: base-unit amount parsing
//!
//! Feeds arbitrary strings to parse_display() to ensure:
//! 1. No panics on any input
//! 2. Accepted amounts round-trip through format_base_units exactly
//!
//! Run: cargo +nightly fuzz run fuzz_amount_parse -- -max_len=64

#![no_main]
use libfuzzer_sys::fuzz_target;

use foresight_core::units::{format_base_units, parse_display};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(amount) = parse_display(s) {
            // Whatever we accept must re-render to something we accept
            // again, landing on the same base-unit value.
            let rendered = format_base_units(amount);
            assert_eq!(
                parse_display(&rendered),
                Ok(amount),
                "format/parse must be stable for accepted input: {:?}",
                s
            );
        }
    }
});
