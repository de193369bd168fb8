//! Error types for structured error handling.
//!
//! This module provides:
//! - `DataError`: Errors from market data and contract construction
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Validation errors for market data and contract values.
///
/// Construction of [`crate::types::MarketSnapshot`] and
/// [`crate::types::OptionContract`] rejects structurally invalid values
/// here, at the data boundary, so the analytics layer never sees them.
///
/// # Variants
/// - `InvalidSpot`: Spot price not strictly positive
/// - `InvalidStrike`: Strike price not strictly positive
/// - `NegativeExpiry`: Time to expiration below zero
/// - `UnknownOptionKind`: Option-type tag not recognised
///
/// # Examples
/// ```
/// use vol_core::types::DataError;
///
/// let err = DataError::InvalidSpot { spot: -100.0 };
/// assert_eq!(format!("{}", err), "Invalid spot price: -100 (must be positive)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataError {
    /// Spot price must be strictly positive.
    #[error("Invalid spot price: {spot} (must be positive)")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Strike price must be strictly positive.
    #[error("Invalid strike price: {strike} (must be positive)")]
    InvalidStrike {
        /// The rejected strike price
        strike: f64,
    },

    /// Time to expiration must be non-negative.
    #[error("Negative time to expiration: {expiry} years")]
    NegativeExpiry {
        /// The rejected expiry in years
        expiry: f64,
    },

    /// Option-type tag was not recognised.
    #[error("Unknown option kind: {0:?} (expected C, P, Call, or Put)")]
    UnknownOptionKind(String),
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use vol_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
