//! End-to-end flow through the adapter and analysis layers.
//!
//! Stages the CSV input files on disk the way an operator would, loads
//! them through `adapter_csv`, and runs the batch analysis over the
//! result.

use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;

use adapter_csv::{load_market_snapshot, load_option_contracts, load_price_series};
use vol_core::types::Signal;
use vol_models::EstimateStatus;
use vol_strategy::VolSpreadStrategy;

/// Closing prices matching the built-in demo scenario, oldest first.
const SCENARIO_PRICES: [f64; 50] = [
    98.0, 99.5, 97.0, 100.0, 101.5, 103.0, 100.5, 99.0, 97.5, 96.0, 98.5, 101.0, 102.5, 100.0,
    99.0, 97.0, 98.0, 99.0, 100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 103.5, 102.0, 100.5, 99.0,
    97.5, 96.0, 97.0, 98.0, 99.0, 100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 105.0, 104.0,
    103.0, 102.0, 101.0, 100.0, 99.0, 98.0, 97.0, 96.0,
];

const MARKET_CSV: &str = "spot_price,risk_free_rate,dividend_yield\n100.0,0.01,0.0\n";

fn staged_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("volsig_flow_{}", name));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_price_csv(path: &Path, prices: &[f64]) {
    let mut content = String::from("price\n");
    for price in prices {
        content.push_str(&format!("{}\n", price));
    }
    fs::write(path, content).unwrap();
}

#[test]
fn test_full_analysis_flow() {
    let dir = staged_dir("full");
    let market_path = dir.join("market.csv");
    let prices_path = dir.join("prices.csv");
    let options_path = dir.join("options.csv");

    fs::write(&market_path, MARKET_CSV).unwrap();
    write_price_csv(&prices_path, &SCENARIO_PRICES);
    fs::write(
        &options_path,
        "strike_price,time_to_expiration,type,market_price\n\
         100.0,0.25,C,3.50\n\
         100.0,0.25,P,2.00\n\
         105.0,0.50,C,2.80\n",
    )
    .unwrap();

    let market = load_market_snapshot(&market_path).unwrap();
    let history = load_price_series(&prices_path).unwrap();
    let contracts = load_option_contracts(&options_path).unwrap();

    assert_eq!(history.len(), 50);
    assert_eq!(contracts.len(), 3);

    let strategy = VolSpreadStrategy::with_defaults();
    let results = strategy.analyze_batch(&contracts, &market, &history);

    assert_eq!(results.len(), 3);
    for analysis in &results {
        assert!(analysis.is_reliable());
        assert_eq!(analysis.signal, Signal::BuyVolatility);
    }

    // Values worked out by hand for this scenario
    assert_relative_eq!(results[0].realized.value(), 0.232105, epsilon = 1e-5);
    assert_relative_eq!(results[0].implied.value(), 0.169394, epsilon = 1e-4);
    assert_relative_eq!(results[1].implied.value(), 0.106552, epsilon = 1e-4);
    assert_relative_eq!(results[2].implied.value(), 0.163189, epsilon = 1e-4);
    assert_relative_eq!(results[0].spread, -0.062711, epsilon = 1e-4);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_flow_skips_bad_rows() {
    let dir = staged_dir("dirty");
    let market_path = dir.join("market.csv");
    let prices_path = dir.join("prices.csv");
    let options_path = dir.join("options.csv");

    fs::write(&market_path, MARKET_CSV).unwrap();
    fs::write(
        &prices_path,
        "price\n100.0\nnot-a-number\n102.0\n101.0\n103.0\n99.0\n",
    )
    .unwrap();
    fs::write(
        &options_path,
        "strike_price,time_to_expiration,type,market_price\n\
         100.0,0.25,C,3.50\n\
         -1.0,0.25,C,1.00\n\
         100.0,0.25,X,9.99\n\
         100.0,0.25,P,2.00\n",
    )
    .unwrap();

    let market = load_market_snapshot(&market_path).unwrap();
    let history = load_price_series(&prices_path).unwrap();
    let contracts = load_option_contracts(&options_path).unwrap();

    assert_eq!(history, vec![100.0, 102.0, 101.0, 103.0, 99.0]);
    assert_eq!(contracts.len(), 2);
    assert_eq!(contracts[1].market_price(), 2.00);

    let strategy = VolSpreadStrategy::with_defaults();
    let results = strategy.analyze_batch(&contracts, &market, &history);

    assert_eq!(results.len(), 2);
    assert_relative_eq!(results[0].realized.value(), 0.450618, epsilon = 1e-4);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_flow_carries_undefined_price_contract() {
    let dir = staged_dir("undefined");
    let market_path = dir.join("market.csv");
    let prices_path = dir.join("prices.csv");
    let options_path = dir.join("options.csv");

    fs::write(&market_path, MARKET_CSV).unwrap();
    write_price_csv(&prices_path, &[100.0, 102.0, 101.0, 103.0, 99.0]);
    fs::write(
        &options_path,
        "strike_price,time_to_expiration,type,market_price\n\
         100.0,0.25,C,0.0\n\
         100.0,0.25,C,3.50\n",
    )
    .unwrap();

    let market = load_market_snapshot(&market_path).unwrap();
    let history = load_price_series(&prices_path).unwrap();
    let contracts = load_option_contracts(&options_path).unwrap();

    assert_eq!(contracts.len(), 2);

    let strategy = VolSpreadStrategy::with_defaults();
    let results = strategy.analyze_batch(&contracts, &market, &history);

    // The zero-priced contract is analysed, flagged, and still classified
    assert_eq!(results[0].implied.status(), EstimateStatus::UndefinedPrice);
    assert!(!results[0].is_reliable());
    assert_eq!(results[0].signal, Signal::BuyVolatility);

    assert!(results[1].is_reliable());

    fs::remove_dir_all(&dir).ok();
}
