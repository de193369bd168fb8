//! Error types for pricing and estimation operations.
//!
//! This module provides:
//! - `ModelError`: Errors specific to model construction and configuration

use thiserror::Error;

/// Model construction and configuration errors.
///
/// Provides structured error handling for model setup with descriptive
/// context for each failure mode. Pricing itself never fails: degenerate
/// inputs are resolved via explicit closed-form branches.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidBracket`: Malformed volatility search bracket
/// - `InvalidTolerance`: Non-positive convergence tolerance
/// - `InvalidIterationBudget`: Zero iteration budget
/// - `InvalidVolFloor`: Non-positive volatility floor
/// - `InvalidAnnualisation`: Non-positive annualisation factor
///
/// # Examples
/// ```
/// use vol_models::ModelError;
///
/// let err = ModelError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility search bracket (lower must be positive and below upper).
    #[error("Invalid volatility bracket: [{lower}, {upper}]")]
    InvalidBracket {
        /// The lower bracket bound
        lower: f64,
        /// The upper bracket bound
        upper: f64,
    },

    /// Invalid convergence tolerance (non-positive).
    #[error("Invalid tolerance: {tolerance}")]
    InvalidTolerance {
        /// The invalid tolerance value
        tolerance: f64,
    },

    /// Invalid iteration budget (zero).
    #[error("Invalid iteration budget: {max_iterations}")]
    InvalidIterationBudget {
        /// The invalid iteration budget
        max_iterations: usize,
    },

    /// Invalid volatility floor (non-positive).
    #[error("Invalid volatility floor: {vol_floor}")]
    InvalidVolFloor {
        /// The invalid volatility floor value
        vol_floor: f64,
    },

    /// Invalid annualisation factor (non-positive).
    #[error("Invalid annualisation factor: {periods_per_year} periods per year")]
    InvalidAnnualisation {
        /// The invalid periods-per-year value
        periods_per_year: f64,
    },
}
