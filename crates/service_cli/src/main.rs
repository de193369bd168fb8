//! Volsig CLI - Command Line Operations for Volatility Analysis
//!
//! This is the operational entry point for the volsig analysis library.
//!
//! # Commands
//!
//! - `volsig analyze --market <file> --prices <file> --options <file>` - Analyse listed contracts
//! - `volsig demo` - Run the built-in demonstration scenario
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-P-S architecture, this crate
//! orchestrates the adapter and analysis layers behind a unified
//! command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Volsig Volatility Analysis CLI
#[derive(Parser)]
#[command(name = "volsig")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "volsig.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse option contracts against a market snapshot and price history
    Analyze {
        /// Path to the market snapshot CSV
        #[arg(short, long)]
        market: String,

        /// Path to the historical price CSV
        #[arg(short, long)]
        prices: String,

        /// Path to the option contract CSV
        #[arg(short, long)]
        options: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run the built-in volatility mispricing demonstration
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; --verbose lowers the default filter
    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Analyze {
            market,
            prices,
            options,
            format,
        } => commands::analyze::run(&market, &prices, &options, &format, &cli.config),
        Commands::Demo => commands::demo::run(),
    }
}
