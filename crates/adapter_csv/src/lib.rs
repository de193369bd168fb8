//! # adapter_csv: CSV Input Adapters (A: Adapter)
//!
//! Reads the three CSV input files of an analysis run and converts
//! them into `vol_core` value types at the boundary.
//!
//! This crate provides:
//! - Market snapshot loading (`load_market_snapshot`)
//! - Historical price series loading (`load_price_series`)
//! - Option contract loading (`load_option_contracts`)
//!
//! ## Design Principles
//!
//! - **Tolerant row handling**: malformed price and option rows are
//!   skipped with a warning rather than aborting the run; only a file
//!   with nothing usable in it is an error
//! - **Validation at the boundary**: records are converted through the
//!   `vol_core` constructors, so invalid values never cross into the
//!   analysis layers
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use adapter_csv::{load_market_snapshot, load_option_contracts, load_price_series};
//!
//! # fn main() -> Result<(), adapter_csv::LoadError> {
//! let market = load_market_snapshot("data/market.csv")?;
//! let prices = load_price_series("data/prices.csv")?;
//! let contracts = load_option_contracts("data/options.csv")?;
//!
//! println!("{} contracts against spot {}", contracts.len(), market.spot_price());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod loader;

// Re-export commonly used types
pub use error::LoadError;
pub use loader::{load_market_snapshot, load_option_contracts, load_price_series};
