//! CSV loaders for the three analysis input files.
//!
//! Every file carries a header row, which is skipped. Formats:
//!
//! - Market: `spot_price,risk_free_rate,dividend_yield`, one data row
//! - Prices: `price`, one closing price per row, oldest first
//! - Options: `strike_price,time_to_expiration,type,market_price`,
//!   where `type` is a `C`/`P` tag
//!
//! The market file must parse cleanly. The price and option loaders
//! skip malformed rows with a warning so one bad row does not abort a
//! batch; a file with no usable rows at all is still an error.

use std::fs;
use std::path::Path;

use tracing::warn;

use vol_core::types::{MarketSnapshot, OptionContract, OptionKind};

use crate::error::LoadError;

/// Loads the market snapshot from a CSV file.
///
/// Expects the header `spot_price,risk_free_rate,dividend_yield`
/// followed by a single data row; any further rows are ignored.
///
/// # Errors
/// - `LoadError::Io` if the file cannot be read
/// - `LoadError::Empty` if no data row follows the header
/// - `LoadError::InvalidRecord` if the data row does not parse or
///   fails snapshot validation
pub fn load_market_snapshot<P: AsRef<Path>>(path: P) -> Result<MarketSnapshot, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_market_snapshot(&content, &path.display().to_string())
}

/// Loads a historical price series from a CSV file.
///
/// Expects the header `price` followed by one closing price per row,
/// oldest first. Rows that do not parse as a number are skipped with a
/// warning. Non-positive prices are kept; the realised volatility
/// estimator deals with them.
///
/// # Errors
/// - `LoadError::Io` if the file cannot be read
/// - `LoadError::Empty` if no row yields a usable price
pub fn load_price_series<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_price_series(&content, &path.display().to_string())
}

/// Loads option contracts from a CSV file.
///
/// Expects the header `strike_price,time_to_expiration,type,market_price`
/// with one contract per row. Rows that do not parse, carry an unknown
/// type tag, or fail contract validation are skipped with a warning.
/// A non-positive market price is valid data and the contract is kept.
///
/// # Errors
/// - `LoadError::Io` if the file cannot be read
/// - `LoadError::Empty` if no row yields a usable contract
pub fn load_option_contracts<P: AsRef<Path>>(path: P) -> Result<Vec<OptionContract>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_option_contracts(&content, &path.display().to_string())
}

fn parse_market_snapshot(content: &str, path: &str) -> Result<MarketSnapshot, LoadError> {
    let mut reader = csv_reader(content);
    let record = match reader.records().next() {
        Some(result) => result?,
        None => {
            return Err(LoadError::Empty {
                path: path.to_string(),
            })
        }
    };

    let line = record_line(&record);
    if record.len() < 3 {
        return Err(LoadError::InvalidRecord {
            line,
            reason: format!("expected 3 fields, found {}", record.len()),
        });
    }

    let spot_price = parse_field(&record, 0, "spot_price", line)?;
    let risk_free_rate = parse_field(&record, 1, "risk_free_rate", line)?;
    let dividend_yield = parse_field(&record, 2, "dividend_yield", line)?;

    MarketSnapshot::new(spot_price, risk_free_rate, dividend_yield).map_err(|err| {
        LoadError::InvalidRecord {
            line,
            reason: err.to_string(),
        }
    })
}

fn parse_price_series(content: &str, path: &str) -> Result<Vec<f64>, LoadError> {
    let mut reader = csv_reader(content);
    let mut prices = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("Skipping unreadable price record: {}", err);
                continue;
            }
        };

        let raw = record.get(0).unwrap_or("");
        match raw.trim().parse::<f64>() {
            Ok(price) => prices.push(price),
            Err(_) => warn!(
                "Skipping invalid price value '{}' on line {}",
                raw,
                record_line(&record)
            ),
        }
    }

    if prices.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_string(),
        });
    }

    Ok(prices)
}

fn parse_option_contracts(content: &str, path: &str) -> Result<Vec<OptionContract>, LoadError> {
    let mut reader = csv_reader(content);
    let mut contracts = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!("Skipping unreadable option record: {}", err);
                continue;
            }
        };

        match parse_option_record(&record) {
            Ok(contract) => contracts.push(contract),
            Err(err) => warn!("Skipping option record: {}", err),
        }
    }

    if contracts.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_string(),
        });
    }

    Ok(contracts)
}

fn parse_option_record(record: &csv::StringRecord) -> Result<OptionContract, LoadError> {
    let line = record_line(record);
    if record.len() < 4 {
        return Err(LoadError::InvalidRecord {
            line,
            reason: format!("expected 4 fields, found {}", record.len()),
        });
    }

    let strike_price = parse_field(record, 0, "strike_price", line)?;
    let time_to_expiration = parse_field(record, 1, "time_to_expiration", line)?;

    let raw_kind = record.get(2).unwrap_or("");
    let kind: OptionKind = raw_kind.parse().map_err(|_| LoadError::InvalidRecord {
        line,
        reason: format!("invalid type '{}'", raw_kind),
    })?;

    let market_price = parse_field(record, 3, "market_price", line)?;

    OptionContract::new(strike_price, time_to_expiration, kind, market_price).map_err(|err| {
        LoadError::InvalidRecord {
            line,
            reason: err.to_string(),
        }
    })
}

fn parse_field(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> Result<f64, LoadError> {
    let raw = record.get(index).unwrap_or("");
    raw.trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidRecord {
            line,
            reason: format!("invalid {} '{}'", name, raw),
        })
}

// Rows may be ragged; field counts are checked per record so that a
// short row produces a row-level reason instead of a stream error.
fn csv_reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes())
}

fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, |position| position.line())
}
