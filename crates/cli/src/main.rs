//! Cosmic Delivery CLI - Price items from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Quote delivery of a pizza to Mars with an express agency
//! cosmic-cli quote pizza --planet mars --agency express
//!
//! # Reproducible quote from the formula, no network
//! cosmic-cli quote pizza --planet mars --agency express --seed 42
//!
//! # Compare prices across planets
//! cosmic-cli compare laptop
//!
//! # List planet exclusives
//! cosmic-cli catalog --exclusive
//! ```
//!
//! # Commands
//!
//! - `quote` - Cosmic price with fee breakdown
//! - `compare` - Prices across Mars, Venus, Jupiter, Saturn, and Neptune
//! - `catalog` - Seeded catalog listing

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cosmic-cli")]
#[command(author, version, about = "Cosmic Delivery CLI tools")]
struct Cli {
    /// Never call the text generator, even if `OPENAI_API_KEY` is set
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote delivery of an item to a destination
    Quote {
        /// Free-text item description
        item: String,

        /// Destination planet
        #[arg(short, long, default_value = "Mars")]
        planet: String,

        /// Delivery agency tier (express, premium, budget, luxury)
        #[arg(short, long, default_value = "express")]
        agency: String,

        /// Seed the fallback formula for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compare delivery prices across planets
    Compare {
        /// Free-text item description
        item: String,

        /// Seed the fallback formula for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the seeded catalog
    Catalog {
        /// List planet exclusives instead of standard products
        #[arg(short, long)]
        exclusive: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before tracing so RUST_LOG can come from it
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Quote {
            item,
            planet,
            agency,
            seed,
        } => {
            let source = commands::PriceSource::select(seed, cli.offline)?;
            commands::quote::run(&source, &item, &planet, &agency).await;
        }
        Commands::Compare { item, seed } => {
            let source = commands::PriceSource::select(seed, cli.offline)?;
            commands::compare::run(&source, &item).await;
        }
        Commands::Catalog { exclusive } => commands::catalog::list(exclusive),
    }
    Ok(())
}
