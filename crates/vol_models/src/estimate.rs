//! Volatility estimate result types.
//!
//! This module defines the result type shared by the implied and
//! realized volatility estimators. It carries the numeric estimate
//! together with diagnostic information, so callers can distinguish a
//! genuine zero-volatility estimate from a failed computation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome classification for a volatility estimate.
///
/// The numeric value of an estimate is always defined (failure cases
/// carry the conventional `0.0` or a best-effort value), so the status
/// is the only way to tell success from failure.
///
/// # Variants
/// - `Converged`: The estimate met its convergence criterion
/// - `UndefinedPrice`: No implied volatility exists (non-positive market price)
/// - `NotConverged`: Iteration budget exhausted; value is best-effort
/// - `InsufficientData`: Too few usable observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EstimateStatus {
    /// The estimate met its convergence criterion.
    Converged,
    /// No implied volatility exists for the quoted price.
    UndefinedPrice,
    /// The iteration budget was exhausted; the value is best-effort.
    NotConverged,
    /// Too few usable observations to estimate.
    InsufficientData,
}

impl EstimateStatus {
    /// Returns a human-readable name for the status.
    pub fn name(&self) -> &'static str {
        match self {
            EstimateStatus::Converged => "converged",
            EstimateStatus::UndefinedPrice => "undefined price",
            EstimateStatus::NotConverged => "not converged",
            EstimateStatus::InsufficientData => "insufficient data",
        }
    }
}

impl std::fmt::Display for EstimateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A volatility estimate with diagnostic information.
///
/// Contains the annualised volatility value together with the outcome
/// status and the number of solver iterations consumed (zero for
/// direct, non-iterative estimators).
///
/// The failure statuses preserve the conventional numeric sentinels:
/// `UndefinedPrice` and `InsufficientData` carry `0.0`, and
/// `NotConverged` carries the last best-effort value, so `value()` can
/// always be fed onward as a plain number.
///
/// # Examples
/// ```
/// use vol_models::{EstimateStatus, VolEstimate};
///
/// let estimate = VolEstimate::converged(0.2, 17);
/// assert!(estimate.is_reliable());
/// assert_eq!(estimate.value(), 0.2);
///
/// let undefined = VolEstimate::undefined_price();
/// assert!(!undefined.is_reliable());
/// assert_eq!(undefined.value(), 0.0);
/// assert_eq!(undefined.status(), EstimateStatus::UndefinedPrice);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolEstimate {
    /// Annualised volatility value
    pub value: f64,
    /// Outcome classification
    pub status: EstimateStatus,
    /// Solver iterations consumed (zero for direct estimators)
    pub iterations: usize,
}

impl VolEstimate {
    /// Creates a converged estimate.
    pub fn converged(value: f64, iterations: usize) -> Self {
        Self {
            value,
            status: EstimateStatus::Converged,
            iterations,
        }
    }

    /// Creates an estimate for an undefined implied volatility.
    ///
    /// Carries the conventional `0.0` sentinel value.
    pub fn undefined_price() -> Self {
        Self {
            value: 0.0,
            status: EstimateStatus::UndefinedPrice,
            iterations: 0,
        }
    }

    /// Creates a best-effort estimate after an exhausted iteration budget.
    pub fn not_converged(value: f64, iterations: usize) -> Self {
        Self {
            value,
            status: EstimateStatus::NotConverged,
            iterations,
        }
    }

    /// Creates an estimate for insufficient input data.
    ///
    /// Carries the conventional `0.0` sentinel value.
    pub fn insufficient_data() -> Self {
        Self {
            value: 0.0,
            status: EstimateStatus::InsufficientData,
            iterations: 0,
        }
    }

    /// Returns the numeric volatility value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the outcome status.
    #[inline]
    pub fn status(&self) -> EstimateStatus {
        self.status
    }

    /// Returns the number of solver iterations consumed.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Checks whether the estimate converged.
    #[inline]
    pub fn is_reliable(&self) -> bool {
        self.status == EstimateStatus::Converged
    }
}
