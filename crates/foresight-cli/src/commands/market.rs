use crate::commands::common::{fetch_market, fetch_market_addresses};
use crate::{print_error, print_info};
use colored::*;
use foresight_core::{amm, units, MarketSnapshot, MarketState, TradeSide};

/// Handle market subcommands.
pub async fn handle(
    action: crate::MarketCommands,
    rpc: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        crate::MarketCommands::List => list_markets(rpc).await,
        crate::MarketCommands::Info { address } => market_info(rpc, &address).await,
        crate::MarketCommands::Price { address } => market_price(rpc, &address).await,
        crate::MarketCommands::Quote {
            address,
            side,
            amount,
        } => market_quote(rpc, &address, &side, &amount).await,
    }
}

async fn list_markets(rpc: &str) -> Result<(), Box<dyn std::error::Error>> {
    print_info("Fetching markets...");

    let addresses = match fetch_market_addresses(rpc).await {
        Ok(addresses) => addresses,
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    };

    println!("{}", format!("Markets ({})", addresses.len()).cyan().bold());
    println!("{}", "─".repeat(70));

    if addresses.is_empty() {
        println!("  {}", "No markets found".dimmed());
        return Ok(());
    }

    for address in &addresses {
        // One bad market must not blank the whole listing.
        match fetch_market(rpc, address).await {
            Ok(snap) => print_market_row(&snap),
            Err(e) => {
                println!(
                    "  {} {}",
                    short_address(address).yellow(),
                    format!("(unavailable: {})", e).dimmed()
                );
            }
        }
    }

    Ok(())
}

fn print_market_row(snap: &MarketSnapshot) {
    let price = snap.price();
    println!(
        "  {} {} | {} {} | YES {:.2} / NO {:.2} | Vol: {} {}",
        short_address(&snap.address).yellow(),
        snap.question.white().bold(),
        "State:".dimmed(),
        state_colored(snap.state),
        price.yes_price,
        price.no_price,
        units::format_base_units(snap.total_volume()).cyan(),
        foresight_core::SETTLEMENT_TOKEN_SYMBOL,
    );
}

async fn market_info(rpc: &str, address: &str) -> Result<(), Box<dyn std::error::Error>> {
    print_info(&format!("Fetching market {}...", address));

    let snap = match fetch_market(rpc, address).await {
        Ok(snap) => snap,
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    };

    let price = snap.price();

    println!();
    println!("{} {}", "Question:".bold(), snap.question.white().bold());
    println!("{} {}", "Address:".bold(), snap.address.green());
    println!("{} {}", "State:".bold(), state_colored(snap.state));
    if snap.is_resolved() {
        let outcome = if snap.resolution_outcome { "YES" } else { "NO" };
        println!("{} {}", "Outcome:".bold(), outcome.cyan().bold());
    }
    println!(
        "{} YES {:.4} / NO {:.4}",
        "Implied price:".bold(),
        price.yes_price,
        price.no_price
    );
    println!(
        "{} {} / {} {}",
        "Pools (YES/NO):".bold(),
        units::format_base_units(snap.yes_pool).cyan(),
        units::format_base_units(snap.no_pool).cyan(),
        foresight_core::SETTLEMENT_TOKEN_SYMBOL,
    );
    println!(
        "{} {} {}",
        "Volume:".bold(),
        units::format_base_units(snap.total_volume()).cyan().bold(),
        foresight_core::SETTLEMENT_TOKEN_SYMBOL,
    );
    println!(
        "{} {} bps → {}",
        "Fee:".bold(),
        snap.fee_bps,
        snap.fee_recipient
    );
    println!("{} {}", "Resolves at:".bold(), snap.resolve_timestamp);
    println!("{} {}", "Settlement token:".bold(), snap.settlement_token);

    Ok(())
}

async fn market_price(rpc: &str, address: &str) -> Result<(), Box<dyn std::error::Error>> {
    let snap = match fetch_market(rpc, address).await {
        Ok(snap) => snap,
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    };

    let price = snap.price();
    println!("{} {}", "Market:".bold(), snap.question.white().bold());
    println!(
        "{} {:.4}  {} {:.4}",
        "YES:".bold().green(),
        price.yes_price,
        "NO:".bold().red(),
        price.no_price
    );

    Ok(())
}

async fn market_quote(
    rpc: &str,
    address: &str,
    side: &str,
    amount: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let side = match parse_side(side) {
        Some(side) => side,
        None => {
            print_error(&format!("invalid side '{}': expected yes or no", side));
            return Ok(());
        }
    };

    let amount_units = match units::parse_display(amount) {
        Ok(v) => v,
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    };

    let snap = match fetch_market(rpc, address).await {
        Ok(snap) => snap,
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    };

    if snap.state != MarketState::Active {
        print_error(&format!(
            "market is {} — trading is closed",
            snap.state.as_str()
        ));
        return Ok(());
    }

    let pool = snap.side_pool_display(side);
    let trade = units::to_display(amount_units);
    let shares = amm::quote_trade(pool, trade);

    println!();
    println!("{} {}", "Market:".bold(), snap.question.white().bold());
    println!(
        "{} {} {} for {} {}",
        "Trade:".bold(),
        "buy".green(),
        side.as_str().cyan().bold(),
        units::format_base_units(amount_units).cyan(),
        foresight_core::SETTLEMENT_TOKEN_SYMBOL,
    );
    println!(
        "{} {} {} shares",
        "Estimate:".bold(),
        amm::format_shares(shares).cyan().bold(),
        side.as_str()
    );
    println!("{} {} bps (applied on-chain)", "Market fee:".bold(), snap.fee_bps);
    println!(
        "{}",
        "(display estimate only — the contract's execution is authoritative)".dimmed()
    );

    Ok(())
}

fn parse_side(side: &str) -> Option<TradeSide> {
    match side.to_ascii_lowercase().as_str() {
        "yes" => Some(TradeSide::Yes),
        "no" => Some(TradeSide::No),
        _ => None,
    }
}

fn state_colored(state: MarketState) -> ColoredString {
    match state {
        MarketState::Active => state.as_str().green(),
        MarketState::Cancelled => state.as_str().red(),
        MarketState::Resolved => state.as_str().blue(),
    }
}

fn short_address(address: &str) -> &str {
    // Cut on a char boundary; a byte-index slice panics on multi-byte
    // addresses coming back from the gateway.
    match address.char_indices().nth(16) {
        Some((idx, _)) => &address[..idx],
        None => address,
    }
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
