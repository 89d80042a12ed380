use crate::commands::common::json_u128;
use crate::{print_error, print_info};
use colored::*;
use foresight_core::{units, SETTLEMENT_TOKEN_NAME, SETTLEMENT_TOKEN_SYMBOL};

/// Handle settlement-token subcommands.
pub async fn handle(
    action: crate::TokenCommands,
    rpc: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        crate::TokenCommands::Balance { holder } => balance(rpc, &holder).await,
        crate::TokenCommands::Allowance { owner, spender } => {
            allowance(rpc, &owner, &spender).await
        }
    }
    Ok(())
}

async fn balance(rpc: &str, holder: &str) {
    print_info(&format!("Fetching {} balance...", SETTLEMENT_TOKEN_NAME));

    let url = format!("{}/token/balance/{}", rpc, holder);
    // A failed read degrades to 0, it never aborts the display.
    let amount = fetch_amount(&url, "balance").await.unwrap_or(0);

    println!();
    println!("{} {}", "Holder:".bold(), holder.green());
    println!(
        "{} {} {}",
        "Balance:".bold(),
        units::format_base_units(amount).cyan().bold(),
        SETTLEMENT_TOKEN_SYMBOL,
    );
}

async fn allowance(rpc: &str, owner: &str, spender: &str) {
    let url = format!("{}/token/allowance/{}/{}", rpc, owner, spender);
    let amount = fetch_amount(&url, "allowance").await.unwrap_or(0);

    println!();
    println!("{} {}", "Owner:".bold(), owner.green());
    println!("{} {}", "Spender:".bold(), spender.green());
    println!(
        "{} {} {}",
        "Allowance:".bold(),
        units::format_base_units(amount).cyan().bold(),
        SETTLEMENT_TOKEN_SYMBOL,
    );
}

async fn fetch_amount(url: &str, field: &str) -> Option<u128> {
    let resp = match reqwest::get(url).await {
        Ok(resp) => resp,
        Err(e) => {
            print_error(&format!("network error: {}", e));
            return None;
        }
    };

    if !resp.status().is_success() {
        print_error(&format!("gateway returned HTTP {}", resp.status()));
        return None;
    }

    let data: serde_json::Value = match resp.json().await {
        Ok(data) => data,
        Err(e) => {
            print_error(&format!("invalid gateway response: {}", e));
            return None;
        }
    };

    json_u128(&data[field])
}
