// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DISPLAY-ONLY MATH: This module mirrors the on-chain CPMM formulas for
// UI previews. It uses f64 and is NOT the authoritative trade outcome —
// the contract's own execution is. Never feed these results back into a
// transaction as an exact expectation.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

/// Share estimates are rounded to 6 fractional digits for display.
const SHARE_DISPLAY_DECIMALS: i32 = 6;

/// Implied probability of each outcome under the constant-product pricing
/// convention. Both values lie in [0, 1] and sum to 1 (except the defined
/// zero-liquidity fallback, which is exactly (0.5, 0.5)).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricePair {
    pub yes_price: f64,
    pub no_price: f64,
}

/// Implied market price of each outcome from the current pool reserves.
///
/// An outcome's price is proportional to the *opposite* pool's reserve:
/// `yes_price = no / (yes + no)`, `no_price = yes / (yes + no)`. This is
/// the convention the whole display layer is built on — reproduce it, do
/// not re-derive it.
///
/// An uninitialized or fully drained pool (`yes + no == 0`) prices both
/// outcomes at 0.5 rather than dividing by zero.
pub fn market_price(yes_reserve: f64, no_reserve: f64) -> PricePair {
    let total = yes_reserve + no_reserve;

    if total == 0.0 {
        return PricePair {
            yes_price: 0.5,
            no_price: 0.5,
        };
    }

    PricePair {
        yes_price: no_reserve / total,
        no_price: yes_reserve / total,
    }
}

/// Estimate the outcome shares a trade would receive.
///
/// `pool_reserve` is the reserve of the side being bought. The formula
/// assumes both pools sit at that same value at quote time (`x == y`, so
/// `k = pool_reserve²`):
///
/// ```text
/// new_pool   = pool + trade
/// other_pool = pool² / new_pool
/// shares     = |other_pool − pool|
/// ```
///
/// Once the pools have genuinely diverged this under/overestimates the
/// shares relative to the contract's two-reserve execution. That is a
/// known limitation of the reference pricing and is preserved on purpose;
/// generalizing it here would make previews disagree with every other
/// client of the platform.
///
/// Degenerate inputs (`pool_reserve <= 0` or `trade_amount <= 0`) quote
/// zero shares; this function never fails.
pub fn quote_trade(pool_reserve: f64, trade_amount: f64) -> f64 {
    if pool_reserve <= 0.0 || trade_amount <= 0.0 {
        return 0.0;
    }

    let new_pool = pool_reserve + trade_amount;
    let other_pool = (pool_reserve * pool_reserve) / new_pool;
    let shares = (other_pool - pool_reserve).abs();

    round_shares(shares)
}

/// Render a share amount the way the trade form shows it: fixed six
/// fractional digits.
pub fn format_shares(shares: f64) -> String {
    format!("{:.1$}", shares, SHARE_DISPLAY_DECIMALS as usize)
}

/// Round to the display precision (6 fractional digits).
fn round_shares(shares: f64) -> f64 {
    let scale = 10f64.powi(SHARE_DISPLAY_DECIMALS);
    (shares * scale).round() / scale
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
