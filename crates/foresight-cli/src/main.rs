// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// FORESIGHT CLI - Prediction-Market Browser & Quoting Tool
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use clap::{Parser, Subcommand};
use colored::*;

mod commands;

#[derive(Parser)]
#[command(name = "foresight")]
#[command(about = "Foresight CLI - Browse & Quote Prediction Markets", long_about = None)]
#[command(version)]
struct Cli {
    /// Gateway endpoint URL (reads FORESIGHT_RPC_URL env var, or defaults
    /// to http://localhost:3030)
    #[arg(
        short,
        long,
        env = "FORESIGHT_RPC_URL",
        default_value = "http://localhost:3030"
    )]
    rpc: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and quote markets
    Market {
        #[command(subcommand)]
        action: MarketCommands,
    },

    /// Settlement token queries
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },

    /// Question encode/decode utilities (offline)
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },

    /// Compute implied prices from raw reserves (offline)
    Price {
        /// YES pool reserve (display units)
        #[arg(long)]
        yes: f64,

        /// NO pool reserve (display units)
        #[arg(long)]
        no: f64,
    },

    /// Estimate shares for a trade from a raw reserve (offline)
    Quote {
        /// Same-side pool reserve (display units)
        #[arg(long)]
        pool: f64,

        /// Trade amount (display units)
        #[arg(long)]
        amount: f64,
    },
}

#[derive(Subcommand)]
enum MarketCommands {
    /// List all markets
    List,

    /// Show full market details
    Info {
        /// Market contract address
        address: String,
    },

    /// Show implied YES/NO prices for a market
    Price {
        /// Market contract address
        address: String,
    },

    /// Estimate shares received for a trade
    Quote {
        /// Market contract address
        address: String,

        /// Which side to buy: yes | no
        #[arg(long)]
        side: String,

        /// Amount of settlement asset to spend (display units, e.g. "10" or "2.5")
        #[arg(long)]
        amount: String,
    },
}

#[derive(Subcommand)]
enum TokenCommands {
    /// Query settlement token balance for a holder
    Balance {
        /// Holder address
        holder: String,
    },

    /// Query settlement token allowance
    Allowance {
        /// Owner address
        #[arg(short, long)]
        owner: String,

        /// Spender address (usually a market contract)
        #[arg(short, long)]
        spender: String,
    },
}

#[derive(Subcommand)]
enum QuestionCommands {
    /// Encode a question into its 32-byte on-chain form (hex)
    Encode {
        /// Question text
        text: String,
    },

    /// Decode a 32-byte question slot (hex, 0x-prefix optional)
    Decode {
        /// 64 hex chars of question data
        hex: String,

        /// Fallback hint (e.g. the market address) for corrupted slots
        #[arg(long, default_value = "unknown")]
        hint: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    print_banner();

    match cli.command {
        Commands::Market { action } => commands::market::handle(action, &cli.rpc).await?,
        Commands::Token { action } => commands::token::handle(action, &cli.rpc).await?,
        Commands::Question { action } => commands::question::handle(action)?,
        Commands::Price { yes, no } => {
            let price = foresight_core::amm::market_price(yes, no);
            println!(
                "{} {:.4}  {} {:.4}",
                "YES:".bold().green(),
                price.yes_price,
                "NO:".bold().red(),
                price.no_price
            );
        }
        Commands::Quote { pool, amount } => {
            let shares = foresight_core::amm::quote_trade(pool, amount);
            println!(
                "{} {}",
                "Estimated shares:".bold(),
                foresight_core::amm::format_shares(shares).cyan().bold()
            );
            println!(
                "{}",
                "(display estimate only — the contract's execution is authoritative)".dimmed()
            );
        }
    }

    Ok(())
}

fn print_banner() {
    println!(
        "{}",
        "╔═══════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║        FORESIGHT - Prediction Markets         ║"
            .cyan()
            .bold()
    );
    println!(
        "{}",
        "║      Browse | Price | Quote | Decode          ║".cyan()
    );
    println!(
        "{}",
        "╚═══════════════════════════════════════════════╝".cyan()
    );
    println!();
}

// Colored output helpers shared by all commands
fn print_success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

fn print_info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

// ─────────────────────────────────────────────────────────────────
// UNIT TESTS
// ─────────────────────────────────────────────────────────────────
