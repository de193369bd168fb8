//! Analyse command implementation
//!
//! Loads the market snapshot, price history, and option contracts from
//! CSV files, runs the volatility spread analysis over the batch, and
//! prints the results in the requested format.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use adapter_csv::{load_market_snapshot, load_option_contracts, load_price_series};
use vol_core::types::OptionContract;
use vol_models::{EstimateStatus, ImpliedVolConfig, ImpliedVolSolver, RealizedVolEstimator, VolEstimate};
use vol_strategy::{SignalThresholds, VolAnalysis, VolSpreadStrategy};

use crate::config::AnalysisConfig;
use crate::{CliError, Result};

/// Run the analyse command
pub fn run(
    market: &str,
    prices: &str,
    options: &str,
    format: &str,
    config_path: &str,
) -> Result<()> {
    info!("Starting analysis...");
    info!("  Market file: {}", market);
    info!("  Price file: {}", prices);
    info!("  Option file: {}", options);
    info!("  Output format: {}", format);

    for path in [market, prices, options] {
        if !Path::new(path).exists() {
            return Err(CliError::FileNotFound(path.to_string()));
        }
    }

    let config = AnalysisConfig::load_if_present(Path::new(config_path))?;
    let strategy = build_strategy(&config)?;

    let market = load_market_snapshot(market)?;
    let history = load_price_series(prices)?;
    let contracts = load_option_contracts(options)?;

    info!(
        "Loaded {} contracts against spot {} with {} historical closes",
        contracts.len(),
        market.spot_price(),
        history.len()
    );

    let results = strategy.analyze_batch(&contracts, &market, &history);

    match format {
        "json" => print_json(&contracts, &results)?,
        "table" => print_table(&contracts, &results),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Analysis complete");
    Ok(())
}

/// Builds the spread strategy described by the configuration.
fn build_strategy(config: &AnalysisConfig) -> Result<VolSpreadStrategy> {
    let solver = ImpliedVolSolver::new(ImpliedVolConfig {
        lower_bound: config.vol_lower_bound,
        upper_bound: config.vol_upper_bound,
        tolerance: config.solver_tolerance,
        max_iterations: config.max_iterations,
        ..ImpliedVolConfig::default()
    })?;
    let estimator = RealizedVolEstimator::new(config.periods_per_year)?;
    let thresholds = SignalThresholds {
        buy: config.buy_threshold,
        sell: config.sell_threshold,
    };

    Ok(VolSpreadStrategy::new(solver, estimator, thresholds)?)
}

#[derive(Serialize)]
struct AnalysisRow<'a> {
    contract: &'a OptionContract,
    analysis: &'a VolAnalysis,
}

fn print_json(contracts: &[OptionContract], results: &[VolAnalysis]) -> Result<()> {
    let rows: Vec<AnalysisRow<'_>> = contracts
        .iter()
        .zip(results.iter())
        .map(|(contract, analysis)| AnalysisRow { contract, analysis })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_table(contracts: &[OptionContract], results: &[VolAnalysis]) {
    println!("\n┌──────────┬─────────┬───────┬──────────┬───────────┬───────────┬───────────┬──────────┐");
    println!(
        "│ {:<8} │ {:<7} │ {:<5} │ {:<8} │ {:<9} │ {:<9} │ {:<9} │ {:<8} │",
        "Strike", "Expiry", "Type", "Price", "IV", "RV", "Spread", "Signal"
    );
    println!("├──────────┼─────────┼───────┼──────────┼───────────┼───────────┼───────────┼──────────┤");

    for (contract, analysis) in contracts.iter().zip(results.iter()) {
        println!(
            "│ {:<8.2} │ {:<7.2} │ {:<5} │ {:<8.2} │ {:<9} │ {:<9} │ {:<9} │ {:<8} │",
            contract.strike_price(),
            contract.time_to_expiration(),
            contract.kind(),
            contract.market_price(),
            format_vol(&analysis.implied),
            format_vol(&analysis.realized),
            format!("{:+.2}%", analysis.spread * 100.0),
            analysis.signal
        );
    }

    println!("└──────────┴─────────┴───────┴──────────┴───────────┴───────────┴───────────┴──────────┘");

    let statuses = results
        .iter()
        .flat_map(|analysis| [analysis.implied.status(), analysis.realized.status()]);
    let mut any_best_effort = false;
    let mut any_missing = false;
    for status in statuses {
        match status {
            EstimateStatus::NotConverged => any_best_effort = true,
            EstimateStatus::UndefinedPrice | EstimateStatus::InsufficientData => {
                any_missing = true
            }
            EstimateStatus::Converged => {}
        }
    }

    if any_best_effort {
        println!("  * solver budget exhausted; last bisection midpoint shown");
    }
    if any_missing {
        println!("  n/a: no usable estimate; the spread treats it as zero");
    }
}

fn format_vol(estimate: &VolEstimate) -> String {
    match estimate.status() {
        EstimateStatus::Converged => format!("{:.2}%", estimate.value() * 100.0),
        EstimateStatus::NotConverged => format!("{:.2}%*", estimate.value() * 100.0),
        EstimateStatus::UndefinedPrice | EstimateStatus::InsufficientData => "n/a".to_string(),
    }
}
