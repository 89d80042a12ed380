// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FORESIGHT - CLIENT CORE MODULE
//
// Client-side primitives for the Foresight prediction-market platform:
// market snapshot model, CPMM display pricing, and the bytes32 question
// codec. The authoritative market state machine (pool accounting,
// settlement, Active → Resolved/Cancelled transitions) lives in the
// on-chain contracts; everything in this crate is read-side mirroring
// for display, never consensus math.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use serde::{Deserialize, Serialize};

pub mod amm;
pub mod question;
pub mod units;

/// Fallback settlement-token symbol, used when token metadata is
/// unavailable. Fixed configuration value, never mutated at runtime.
pub const SETTLEMENT_TOKEN_SYMBOL: &str = "PMT";
/// Fallback settlement-token display name.
pub const SETTLEMENT_TOKEN_NAME: &str = "Prediction Market Token";

/// Market lifecycle state as stored on-chain.
/// Discriminants match the contract's enum: 0=Active, 1=Cancelled, 2=Resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketState {
    Active,
    Cancelled,
    Resolved,
}

impl MarketState {
    /// Decode the raw on-chain discriminant. Unknown values yield `None`
    /// rather than a guess — a contract upgrade adding states must not be
    /// silently misdisplayed.
    pub fn from_u8(raw: u8) -> Option<MarketState> {
        match raw {
            0 => Some(MarketState::Active),
            1 => Some(MarketState::Cancelled),
            2 => Some(MarketState::Resolved),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketState::Active => "Active",
            MarketState::Cancelled => "Cancelled",
            MarketState::Resolved => "Resolved",
        }
    }
}

/// Read-side snapshot of a single market contract.
///
/// All asset amounts are settlement-token base units (18 decimals, see
/// [`units`]). The snapshot is a point-in-time copy: the contract owns and
/// mutates the real state, the client only ever re-fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub address: String,
    /// Decoded question text (already run through the question codec).
    pub question: String,
    pub settlement_token: String,
    /// Unix seconds after which the market can be resolved.
    pub resolve_timestamp: u64,
    pub state: MarketState,
    /// Only meaningful when `state == Resolved`.
    pub resolution_outcome: bool,
    /// YES-side pool reserve, base units.
    pub yes_pool: u128,
    /// NO-side pool reserve, base units.
    pub no_pool: u128,
    /// Trading fee in basis points (0–10000).
    pub fee_bps: u32,
    pub fee_recipient: String,
    pub total_yes_positions: u128,
    pub total_no_positions: u128,
}

impl MarketSnapshot {
    /// Total volume proxy: sum of both pool reserves, base units.
    pub fn total_volume(&self) -> u128 {
        self.yes_pool.saturating_add(self.no_pool)
    }

    /// Implied outcome prices from the current reserves.
    pub fn price(&self) -> amm::PricePair {
        amm::market_price(
            units::to_display(self.yes_pool),
            units::to_display(self.no_pool),
        )
    }

    pub fn is_resolved(&self) -> bool {
        self.state == MarketState::Resolved
    }

    /// Pool reserve for the side being traded, display domain.
    pub fn side_pool_display(&self, side: TradeSide) -> f64 {
        match side {
            TradeSide::Yes => units::to_display(self.yes_pool),
            TradeSide::No => units::to_display(self.no_pool),
        }
    }
}

/// Which outcome a trade buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Yes,
    No,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Yes => "YES",
            TradeSide::No => "NO",
        }
    }
}

/// Receipt of a confirmed trade transaction.
///
/// Produced by the (external) write path after the transaction has been
/// mined. Its existence means the trade succeeded; nothing that happens
/// afterwards can change that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeReceipt {
    pub tx_hash: String,
    pub market: String,
    pub side: TradeSide,
    /// Settlement asset spent, base units.
    pub amount_in: u128,
}

/// A confirmed trade plus the best-effort state re-fetch that follows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub receipt: TradeReceipt,
    /// `None` when the post-trade re-fetch failed; the trade itself is
    /// still a success and prior on-screen state stays valid.
    pub refreshed: Option<MarketSnapshot>,
}

impl TradeReceipt {
    /// Merge a confirmed trade with the result of the follow-up re-fetch.
    ///
    /// The re-fetch is best-effort display plumbing: a failure is reported
    /// as a diagnostic and swallowed. It must never downgrade the trade
    /// success it follows.
    pub fn with_refresh(self, refresh: Result<MarketSnapshot, String>) -> TradeOutcome {
        match refresh {
            Ok(snapshot) => TradeOutcome {
                receipt: self,
                refreshed: Some(snapshot),
            },
            Err(e) => {
                eprintln!(
                    "⚠️ Post-trade refresh failed for market {} (trade {} confirmed): {}",
                    self.market, self.tx_hash, e
                );
                TradeOutcome {
                    receipt: self,
                    refreshed: None,
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> MarketSnapshot {
        MarketSnapshot {
            address: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            question: "Will BTC close above 100k this year?".to_string(),
            settlement_token: "0xtoken".to_string(),
            resolve_timestamp: 1_767_225_600,
            state: MarketState::Active,
            resolution_outcome: false,
            yes_pool: 100 * units::BASE_UNITS_PER_TOKEN,
            no_pool: 300 * units::BASE_UNITS_PER_TOKEN,
            fee_bps: 30,
            fee_recipient: "0xfee".to_string(),
            total_yes_positions: 0,
            total_no_positions: 0,
        }
    }

    #[test]
    fn test_market_state_from_u8() {
        assert_eq!(MarketState::from_u8(0), Some(MarketState::Active));
        assert_eq!(MarketState::from_u8(1), Some(MarketState::Cancelled));
        assert_eq!(MarketState::from_u8(2), Some(MarketState::Resolved));
        assert_eq!(MarketState::from_u8(3), None);
        assert_eq!(MarketState::from_u8(255), None);
    }

    #[test]
    fn test_total_volume_sums_pools() {
        let snap = sample_snapshot();
        assert_eq!(snap.total_volume(), 400 * units::BASE_UNITS_PER_TOKEN);
    }

    #[test]
    fn test_total_volume_saturates() {
        let mut snap = sample_snapshot();
        snap.yes_pool = u128::MAX;
        snap.no_pool = u128::MAX;
        assert_eq!(snap.total_volume(), u128::MAX);
    }

    #[test]
    fn test_snapshot_price_uses_opposite_reserve() {
        let snap = sample_snapshot();
        let price = snap.price();
        // yes_pool=100, no_pool=300 → yes_price = 300/400 = 0.75
        assert!((price.yes_price - 0.75).abs() < 1e-12);
        assert!((price.no_price - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snap = sample_snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: MarketSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.address, snap.address);
        assert_eq!(back.yes_pool, snap.yes_pool);
        assert_eq!(back.state, MarketState::Active);
    }

    #[test]
    fn test_refresh_success_carries_snapshot() {
        let receipt = TradeReceipt {
            tx_hash: "0xabc".to_string(),
            market: "0xmarket".to_string(),
            side: TradeSide::Yes,
            amount_in: units::BASE_UNITS_PER_TOKEN,
        };
        let outcome = receipt.with_refresh(Ok(sample_snapshot()));
        assert!(outcome.refreshed.is_some());
        assert_eq!(outcome.receipt.tx_hash, "0xabc");
    }

    #[test]
    fn test_failed_refresh_never_downgrades_trade() {
        let receipt = TradeReceipt {
            tx_hash: "0xdef".to_string(),
            market: "0xmarket".to_string(),
            side: TradeSide::No,
            amount_in: units::BASE_UNITS_PER_TOKEN,
        };
        let outcome = receipt.with_refresh(Err("gateway timeout".to_string()));
        // Trade receipt survives intact; only the snapshot is missing.
        assert!(outcome.refreshed.is_none());
        assert_eq!(outcome.receipt.tx_hash, "0xdef");
        assert_eq!(outcome.receipt.side, TradeSide::No);
    }
}
