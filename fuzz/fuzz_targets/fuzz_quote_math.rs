//! Fuzz target: CPMM display math
//!
//! Feeds arbitrary finite reserves/amounts to market_price() and
//! quote_trade() to ensure:
//! 1. No panics for any numeric input
//! 2. Prices stay within [0, 1] and sum to 1 for funded pools
//! 3. Quotes are non-negative and finite
//!
//! Run: cargo +nightly fuzz run fuzz_quote_math

#![no_main]
use libfuzzer_sys::fuzz_target;

use foresight_core::amm::{format_shares, market_price, quote_trade};

fuzz_target!(|input: (f64, f64)| {
    let (a, b) = input;

    // The engine's contract covers non-negative finite reserves; NaN,
    // negative, and astronomically large inputs are caller violations,
    // so constrain to the domain (1e15 tokens dwarfs any real pool).
    if !a.is_finite() || !b.is_finite() || a < 0.0 || b < 0.0 || a > 1e15 || b > 1e15 {
        return;
    }

    let price = market_price(a, b);
    assert!(price.yes_price >= 0.0 && price.yes_price <= 1.0);
    assert!(price.no_price >= 0.0 && price.no_price <= 1.0);
    if a + b > 0.0 {
        assert!((price.yes_price + price.no_price - 1.0).abs() < 1e-6);
    }

    let shares = quote_trade(a, b);
    assert!(shares >= 0.0);
    assert!(shares.is_finite());

    // Rendering must never panic either.
    let _ = format_shares(shares);
});
