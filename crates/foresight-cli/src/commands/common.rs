//! Shared gateway plumbing: JSON → `MarketSnapshot` parsing and the
//! read-only HTTP fetch helpers every market command goes through.

use foresight_core::{question, MarketSnapshot, MarketState};

/// Fetch the list of market addresses from the gateway.
pub async fn fetch_market_addresses(rpc: &str) -> Result<Vec<String>, String> {
    let url = format!("{}/markets", rpc);
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("network error: {}", e))?;

    if !resp.status().is_success() {
        return Err(format!("gateway returned HTTP {}", resp.status()));
    }

    let data: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| format!("invalid gateway response: {}", e))?;

    let addresses = data["markets"]
        .as_array()
        .ok_or_else(|| "gateway response missing 'markets' array".to_string())?
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();

    Ok(addresses)
}

/// Fetch and parse one market snapshot.
pub async fn fetch_market(rpc: &str, address: &str) -> Result<MarketSnapshot, String> {
    let url = format!("{}/market/{}", rpc, address);
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("network error: {}", e))?;

    if !resp.status().is_success() {
        return Err(format!("market not found: HTTP {}", resp.status()));
    }

    let data: serde_json::Value = resp
        .json()
        .await
        .map_err(|e| format!("invalid gateway response: {}", e))?;

    parse_market(&data)
}

/// Parse a gateway market object into a snapshot.
///
/// The raw bytes32 question arrives as hex and runs through the codec
/// with the market address as fallback hint; base-unit amounts arrive as
/// decimal strings (they exceed u64, so JSON numbers are not trusted for
/// them, though small numeric values are accepted).
pub fn parse_market(data: &serde_json::Value) -> Result<MarketSnapshot, String> {
    let address = data["address"]
        .as_str()
        .ok_or_else(|| "market object missing 'address'".to_string())?
        .to_string();

    let question_hex = data["question"]
        .as_str()
        .ok_or_else(|| "market object missing 'question'".to_string())?;
    let question = question::decode_question_hex(question_hex, &address);

    let raw_state = data["state"]
        .as_u64()
        .ok_or_else(|| "market object missing 'state'".to_string())?;
    let state = u8::try_from(raw_state)
        .ok()
        .and_then(MarketState::from_u8)
        .ok_or_else(|| format!("unknown market state {}", raw_state))?;

    Ok(MarketSnapshot {
        question,
        settlement_token: json_str(data, "settlement_token"),
        resolve_timestamp: data["resolve_timestamp"].as_u64().unwrap_or(0),
        state,
        resolution_outcome: data["resolution_outcome"].as_bool().unwrap_or(false),
        yes_pool: json_u128(&data["yes_pool"])
            .ok_or_else(|| "market object missing 'yes_pool'".to_string())?,
        no_pool: json_u128(&data["no_pool"])
            .ok_or_else(|| "market object missing 'no_pool'".to_string())?,
        fee_bps: data["fee_bps"].as_u64().unwrap_or(0) as u32,
        fee_recipient: json_str(data, "fee_recipient"),
        total_yes_positions: json_u128(&data["total_yes_positions"]).unwrap_or(0),
        total_no_positions: json_u128(&data["total_no_positions"]).unwrap_or(0),
        address,
    })
}

/// Base-unit amounts come over the wire as decimal strings (u128 range);
/// plain JSON numbers are accepted for convenience.
pub fn json_u128(value: &serde_json::Value) -> Option<u128> {
    if let Some(s) = value.as_str() {
        return s.parse().ok();
    }
    value.as_u64().map(u128::from)
}

fn json_str(data: &serde_json::Value, key: &str) -> String {
    data[key].as_str().unwrap_or("N/A").to_string()
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
