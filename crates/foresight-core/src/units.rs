// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// UNITS — settlement-asset base-unit conversions
//
// All on-chain amounts are integers with 18 decimal fractional digits.
// Exact rendering/parsing uses u128 string math (no f64 precision loss
// for large balances); the f64 conversion exists only to feed the
// display-domain quoting engine.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 1 settlement token = 10^18 base units.
pub const BASE_UNITS_PER_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Fractional digits carried by the settlement asset.
pub const TOKEN_DECIMALS: u32 = 18;

/// Render a base-unit amount as an exact decimal string, trailing zeros
/// trimmed ("1.5", not "1.500000000000000000"; whole amounts render with
/// no fractional part at all).
pub fn format_base_units(amount: u128) -> String {
    let whole = amount / BASE_UNITS_PER_TOKEN;
    let frac = amount % BASE_UNITS_PER_TOKEN;

    if frac == 0 {
        return whole.to_string();
    }

    let mut frac_str = format!("{:018}", frac);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{}.{}", whole, frac_str)
}

/// Parse a human-readable decimal amount ("12.5") into base units with
/// checked arithmetic. Rejects empty input, malformed digits, more than
/// 18 fractional digits, and amounts that overflow u128.
pub fn parse_display(s: &str) -> Result<u128, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty amount".to_string());
    }

    let (whole_str, frac_str) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };

    // u128::from_str tolerates a leading '+'; amounts must be bare digits.
    if !whole_str.bytes().all(|b| b.is_ascii_digit())
        || !frac_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(format!("invalid amount '{}'", s));
    }

    if frac_str.len() as u32 > TOKEN_DECIMALS {
        return Err(format!(
            "amount '{}' has more than {} fractional digits",
            s, TOKEN_DECIMALS
        ));
    }

    // An all-fractional amount like ".5" is fine; "" whole parses as 0.
    let whole: u128 = if whole_str.is_empty() {
        0
    } else {
        whole_str
            .parse()
            .map_err(|_| format!("invalid amount '{}'", s))?
    };

    let frac: u128 = if frac_str.is_empty() {
        0
    } else {
        let padded = format!("{:0<18}", frac_str);
        padded.parse().map_err(|_| format!("invalid amount '{}'", s))?
    };

    whole
        .checked_mul(BASE_UNITS_PER_TOKEN)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| format!("amount '{}' overflows", s))
}

/// Lossy conversion into the display-math domain used by the quoting
/// engine. Fine for pricing previews, never for exact balances.
pub fn to_display(amount: u128) -> f64 {
    amount as f64 / BASE_UNITS_PER_TOKEN as f64
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_amount() {
        assert_eq!(format_base_units(5 * BASE_UNITS_PER_TOKEN), "5");
        assert_eq!(format_base_units(0), "0");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(
            format_base_units(BASE_UNITS_PER_TOKEN + BASE_UNITS_PER_TOKEN / 2),
            "1.5"
        );
    }

    #[test]
    fn test_format_smallest_unit() {
        assert_eq!(format_base_units(1), "0.000000000000000001");
    }

    #[test]
    fn test_format_large_balance_is_exact() {
        // Beyond f64's 2^53 integer precision — string math must stay exact.
        let amount = 123_456_789 * BASE_UNITS_PER_TOKEN + 1;
        assert_eq!(format_base_units(amount), "123456789.000000000000000001");
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_display("12").unwrap(), 12 * BASE_UNITS_PER_TOKEN);
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(
            parse_display("1.5").unwrap(),
            BASE_UNITS_PER_TOKEN + BASE_UNITS_PER_TOKEN / 2
        );
        assert_eq!(parse_display("0.000000000000000001").unwrap(), 1);
        assert_eq!(parse_display(".5").unwrap(), BASE_UNITS_PER_TOKEN / 2);
    }

    #[test]
    fn test_parse_round_trips_format() {
        for amount in [0u128, 1, 7, BASE_UNITS_PER_TOKEN, 42 * BASE_UNITS_PER_TOKEN + 9] {
            assert_eq!(parse_display(&format_base_units(amount)).unwrap(), amount);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_display("").is_err());
        assert!(parse_display("abc").is_err());
        assert!(parse_display("1.2.3").is_err());
        assert!(parse_display("-5").is_err());
    }

    #[test]
    fn test_parse_rejects_signed_amounts() {
        // u128::from_str would happily take a leading '+'; amounts must
        // be bare digits in both parts.
        assert!(parse_display("+3").is_err());
        assert!(parse_display("1.+5").is_err());
        assert!(parse_display("1.+").is_err());
        assert!(parse_display("+1.5").is_err());
    }

    #[test]
    fn test_parse_rejects_too_many_decimals() {
        assert!(parse_display("1.0000000000000000001").is_err());
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let huge = u128::MAX.to_string();
        assert!(parse_display(&huge).is_err());
    }

    #[test]
    fn test_to_display() {
        assert_eq!(to_display(0), 0.0);
        assert!((to_display(BASE_UNITS_PER_TOKEN / 2) - 0.5).abs() < 1e-12);
        assert!((to_display(100 * BASE_UNITS_PER_TOKEN) - 100.0).abs() < 1e-9);
    }
}
