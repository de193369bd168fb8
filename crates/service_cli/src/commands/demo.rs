//! Demo command for the volatility mispricing analysis flow.
//!
//! Runs the complete pipeline on a built-in scenario: one underlying
//! with 50 days of closing prices and three listed contracts, analysed
//! with the default thresholds and sized with a fixed risk budget.
//!
//! # Expected Output
//!
//! ```text
//! 100.00   Call   3.50     16.94%     23.21%     -6.27%     BUY VOL
//! ```
//!
//! The built-in history is deliberately choppy, so all three quoted
//! contracts screen as cheap volatility.

use vol_core::types::{MarketSnapshot, OptionContract, OptionKind, Signal};
use vol_strategy::{
    stop_loss_price, take_profit_price, PositionSide, RiskParams, VolSpreadStrategy,
};

use crate::Result;

/// Closing prices for the built-in scenario, oldest first.
const DEMO_PRICES: [f64; 50] = [
    98.0, 99.5, 97.0, 100.0, 101.5, 103.0, 100.5, 99.0, 97.5, 96.0, 98.5, 101.0, 102.5, 100.0,
    99.0, 97.0, 98.0, 99.0, 100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 103.5, 102.0, 100.5, 99.0,
    97.5, 96.0, 97.0, 98.0, 99.0, 100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 105.0, 104.0,
    103.0, 102.0, 101.0, 100.0, 99.0, 98.0, 97.0, 96.0,
];

/// Trading capital assumed by the demonstration.
const DEMO_CAPITAL: f64 = 100_000.0;

/// Fraction of capital risked per trade.
const DEMO_RISK_PER_TRADE: f64 = 0.01;

/// Stop loss as a fraction of the entry premium.
const DEMO_STOP_LOSS_PCT: f64 = 0.5;

/// Take profit as a fraction of the entry premium.
const DEMO_TAKE_PROFIT_PCT: f64 = 1.0;

/// Runs the volatility mispricing demonstration.
///
/// Analyses three contracts on the same underlying:
/// - 100 Call, 3 months, quoted at 3.50
/// - 100 Put, 3 months, quoted at 2.00
/// - 105 Call, 6 months, quoted at 2.80
///
/// # Returns
///
/// `Ok(())` on success, `Err` on failure.
pub fn run() -> Result<()> {
    println!("========================================");
    println!("Volatility Mispricing Analysis Demo");
    println!("========================================");
    println!();

    // Step 1: Market environment
    println!("[Demo] Market snapshot: spot 100.00, r 1.00%, q 0.00%");
    println!(
        "[Demo] Price history: {} closes, oldest first",
        DEMO_PRICES.len()
    );
    println!();

    let market = MarketSnapshot::new(100.0, 0.01, 0.0)?;

    // Step 2: Contracts under analysis
    println!("[Demo] Analysing 3 contracts:");
    println!("  - 100 Call, 3 months, quoted at 3.50");
    println!("  - 100 Put,  3 months, quoted at 2.00");
    println!("  - 105 Call, 6 months, quoted at 2.80");
    println!();

    let contracts = vec![
        OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50)?,
        OptionContract::new(100.0, 0.25, OptionKind::Put, 2.00)?,
        OptionContract::new(105.0, 0.50, OptionKind::Call, 2.80)?,
    ];

    // Step 3: Run the spread analysis with default thresholds
    let strategy = VolSpreadStrategy::with_defaults();
    let results = strategy.analyze_batch(&contracts, &market, &DEMO_PRICES);

    println!("[Demo] Analysis results:");
    println!("--------------------------------------------------------------------");
    println!(
        "{:<8} {:<6} {:<8} {:<10} {:<10} {:<10} {:<12}",
        "Strike", "Type", "Price", "IV", "RV", "Spread", "Signal"
    );
    println!("--------------------------------------------------------------------");

    for (contract, analysis) in contracts.iter().zip(results.iter()) {
        println!(
            "{:<8.2} {:<6} {:<8.2} {:<10} {:<10} {:<10} {:<12}",
            contract.strike_price(),
            contract.kind(),
            contract.market_price(),
            format!("{:.2}%", analysis.implied.value() * 100.0),
            format!("{:.2}%", analysis.realized.value() * 100.0),
            format!("{:+.2}%", analysis.spread * 100.0),
            analysis.signal
        );
    }
    println!("--------------------------------------------------------------------");
    println!();

    // Step 4: Size the actionable signals
    let risk = RiskParams::new(DEMO_CAPITAL, DEMO_RISK_PER_TRADE)?;
    println!(
        "[Demo] Position sizing (capital {:.2}, risking {:.1}% per trade):",
        DEMO_CAPITAL,
        DEMO_RISK_PER_TRADE * 100.0
    );

    for (contract, analysis) in contracts.iter().zip(results.iter()) {
        if !analysis.signal.is_actionable() {
            continue;
        }

        let side = if analysis.signal == Signal::SellVolatility {
            PositionSide::Short
        } else {
            PositionSide::Long
        };
        let size = risk.position_size(contract.market_price())?;
        let stop = stop_loss_price(contract.market_price(), DEMO_STOP_LOSS_PCT, side)?;
        let target = take_profit_price(contract.market_price(), DEMO_TAKE_PROFIT_PCT, side)?;

        println!(
            "  {:<8} {:>4} x {:.0} {} at {:.2} (stop {:.2}, target {:.2})",
            analysis.signal,
            size,
            contract.strike_price(),
            contract.kind(),
            contract.market_price(),
            stop,
            target
        );
    }

    println!();
    println!("========================================");
    println!("Demo completed successfully!");
    println!("========================================");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_run() {
        // Just verify the demo runs without error
        let result = run();
        assert!(result.is_ok());
    }
}
