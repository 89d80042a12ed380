// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// INTEGRATION TESTS — full client display pipeline
//
// Exercises the path a market takes from creation request to rendered
// card: question encoding → (simulated) on-chain storage → decode →
// implied pricing → trade quoting → post-trade refresh merge.
// Run: cargo test --test integration_test
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use foresight_core::amm::{format_shares, market_price, quote_trade};
use foresight_core::question::{decode_question, encode_question};
use foresight_core::units::{format_base_units, parse_display, to_display, BASE_UNITS_PER_TOKEN};
use foresight_core::{MarketSnapshot, MarketState, TradeReceipt, TradeSide};

const MARKET_ADDRESS: &str = "0x9f8e7d6c5b4a39281706f5e4d3c2b1a098765432";

fn chain_market(question: &str, yes_pool: u128, no_pool: u128) -> MarketSnapshot {
    // Simulate the round trip through contract storage: the creation
    // request stores the encoded question, readers decode it back.
    let stored = encode_question(question);
    MarketSnapshot {
        address: MARKET_ADDRESS.to_string(),
        question: decode_question(&stored, MARKET_ADDRESS),
        settlement_token: "0x00000000000000000000000000000000000000aa".to_string(),
        resolve_timestamp: 1_780_000_000,
        state: MarketState::Active,
        resolution_outcome: false,
        yes_pool,
        no_pool,
        fee_bps: 30,
        fee_recipient: "0x00000000000000000000000000000000000000fe".to_string(),
        total_yes_positions: 0,
        total_no_positions: 0,
    }
}

#[test]
fn market_card_pipeline_displays_faithfully() {
    let snap = chain_market(
        "Will BTC close above 100k?",
        100 * BASE_UNITS_PER_TOKEN,
        300 * BASE_UNITS_PER_TOKEN,
    );

    // The question survived the bytes32 round trip.
    assert_eq!(snap.question, "Will BTC close above 100k?");

    // Implied prices follow the opposite-reserve convention.
    let price = snap.price();
    assert!((price.yes_price - 0.75).abs() < 1e-9);
    assert!((price.no_price - 0.25).abs() < 1e-9);

    // Volume renders exactly.
    assert_eq!(format_base_units(snap.total_volume()), "400");
}

#[test]
fn corrupted_question_degrades_to_label_not_error() {
    let snap = chain_market("deadbeef", BASE_UNITS_PER_TOKEN, BASE_UNITS_PER_TOKEN);
    // Hash-looking content is replaced by the synthesized label built
    // from the market address.
    assert_eq!(snap.question, "Market Question (0x9f8e7d...)");
    // ...and the rest of the card still works.
    assert!((snap.price().yes_price - 0.5).abs() < 1e-9);
}

#[test]
fn trade_form_quote_matches_reference_vector() {
    let snap = chain_market(
        "Will it rain tomorrow?",
        100 * BASE_UNITS_PER_TOKEN,
        100 * BASE_UNITS_PER_TOKEN,
    );

    // User types "10" into the trade-amount field.
    let amount = parse_display("10").unwrap();
    let pool = snap.side_pool_display(TradeSide::Yes);
    let shares = quote_trade(pool, to_display(amount));

    assert_eq!(format_shares(shares), "9.090909");
}

#[test]
fn fresh_market_shows_even_odds() {
    let snap = chain_market("Will anyone trade this?", 0, 0);
    let price = snap.price();
    assert_eq!(price.yes_price, 0.5);
    assert_eq!(price.no_price, 0.5);
}

#[test]
fn post_trade_refresh_failure_keeps_trade_success() {
    let receipt = TradeReceipt {
        tx_hash: "0xaaaa".to_string(),
        market: MARKET_ADDRESS.to_string(),
        side: TradeSide::Yes,
        amount_in: 10 * BASE_UNITS_PER_TOKEN,
    };

    // Gateway falls over right after the trade confirms.
    let outcome = receipt.with_refresh(Err("connection reset".to_string()));
    assert_eq!(outcome.receipt.tx_hash, "0xaaaa");
    assert!(outcome.refreshed.is_none());

    // Next refresh succeeds and the updated pools arrive.
    let refreshed = chain_market(
        "Will it rain tomorrow?",
        110 * BASE_UNITS_PER_TOKEN,
        91 * BASE_UNITS_PER_TOKEN,
    );
    let receipt2 = TradeReceipt {
        tx_hash: "0xbbbb".to_string(),
        market: MARKET_ADDRESS.to_string(),
        side: TradeSide::Yes,
        amount_in: 10 * BASE_UNITS_PER_TOKEN,
    };
    let outcome2 = receipt2.with_refresh(Ok(refreshed));
    assert!(outcome2.refreshed.is_some());
    assert_eq!(
        outcome2.refreshed.unwrap().yes_pool,
        110 * BASE_UNITS_PER_TOKEN
    );
}

#[test]
fn snapshot_survives_json_round_trip() {
    let snap = chain_market(
        "Will ETH flip BTC?",
        7 * BASE_UNITS_PER_TOKEN,
        13 * BASE_UNITS_PER_TOKEN,
    );
    let json = serde_json::to_string(&snap).unwrap();
    let back: MarketSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.question, "Will ETH flip BTC?");
    assert_eq!(back.no_pool, 13 * BASE_UNITS_PER_TOKEN);
    assert_eq!(back.state, MarketState::Active);
}
