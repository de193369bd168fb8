//! Core market data, contract, and time types.
//!
//! This module provides:
//! - `market`: Immutable market environment snapshot
//! - `contract`: Option contract and call/put kind
//! - `signal`: Discrete trading signal classification
//! - `time`: Date wrapper and day count conventions
//! - `error`: Structured error types for data validation and dates
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MarketSnapshot`] from `market`
//! - [`OptionContract`], [`OptionKind`] from `contract`
//! - [`Signal`] from `signal`
//! - [`Date`], [`DayCountConvention`] from `time`
//! - [`DataError`], [`DateError`] from `error`

pub mod contract;
pub mod error;
pub mod market;
pub mod signal;
pub mod time;

// Re-export commonly used types at module level
pub use contract::{OptionContract, OptionKind};
pub use error::{DataError, DateError};
pub use market::MarketSnapshot;
pub use signal::Signal;
pub use time::{days_between, time_to_expiry, Date, DayCountConvention};
