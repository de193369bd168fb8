//! Realised volatility estimation from historical prices.
//!
//! The estimator computes the sample standard deviation of
//! logarithmic returns and annualises it by the square root of the
//! configured trading-period count. It never fails: a series too
//! short to yield a return reports
//! [`EstimateStatus::InsufficientData`](crate::EstimateStatus), and a
//! constant series reports a genuine zero-volatility estimate that
//! remains distinguishable from every failure status.

use crate::error::ModelError;
use crate::estimate::VolEstimate;

/// Trading periods per year for daily close-to-close returns.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Historical volatility estimator over logarithmic returns.
///
/// For a price series `p_0, ..., p_n` the estimator forms the returns
/// `ln(p_i / p_{i-1})`, skipping any pair whose base price `p_{i-1}`
/// is non-positive, and annualises their sample standard deviation
/// (Bessel-corrected) by `sqrt(periods_per_year)`.
///
/// # Examples
/// ```
/// use vol_models::RealizedVolEstimator;
///
/// let estimator = RealizedVolEstimator::default();
/// let prices = [100.0, 102.0, 101.0, 103.0, 99.0];
/// let estimate = estimator.estimate(&prices);
///
/// assert!(estimate.is_reliable());
/// assert!(estimate.value() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct RealizedVolEstimator {
    periods_per_year: f64,
}

impl Default for RealizedVolEstimator {
    /// Creates an estimator annualising over 252 trading days.
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

impl RealizedVolEstimator {
    /// Creates an estimator with a custom annualisation factor.
    ///
    /// Use 252 for daily closes, 52 for weekly, 12 for monthly.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidAnnualisation` if
    /// `periods_per_year` is not strictly positive.
    pub fn new(periods_per_year: f64) -> Result<Self, ModelError> {
        if periods_per_year <= 0.0 {
            return Err(ModelError::InvalidAnnualisation { periods_per_year });
        }
        Ok(Self { periods_per_year })
    }

    /// Returns the annualisation factor.
    #[inline]
    pub fn periods_per_year(&self) -> f64 {
        self.periods_per_year
    }

    /// Estimates annualised volatility from a historical price series.
    ///
    /// Returns an [`insufficient_data`](VolEstimate::insufficient_data)
    /// estimate when fewer than two prices are supplied, or when every
    /// consecutive pair is skipped for a non-positive base price. A
    /// single usable return has no dispersion and yields a zero
    /// estimate.
    pub fn estimate(&self, prices: &[f64]) -> VolEstimate {
        if prices.len() < 2 {
            return VolEstimate::insufficient_data();
        }

        let mut returns = Vec::with_capacity(prices.len() - 1);
        for pair in prices.windows(2) {
            // Skip pairs whose base price is non-positive
            if pair[0] > 0.0 {
                returns.push((pair[1] / pair[0]).ln());
            }
        }

        if returns.is_empty() {
            return VolEstimate::insufficient_data();
        }

        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = if returns.len() > 1 {
            returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };

        VolEstimate::converged(variance.sqrt() * self.periods_per_year.sqrt(), 0)
    }
}
