//! Market snapshot value type.

use super::error::DataError;

/// Immutable snapshot of the market environment for one analysis run.
///
/// Bundles the underlying spot price with the continuously compounded
/// risk-free rate and dividend yield. Created once per run from an
/// external source and passed by reference through the pipeline;
/// nothing mutates it after construction.
///
/// Rates may be zero or negative (negative rates are mathematically
/// well-defined in the pricing formulas); the spot price must be
/// strictly positive.
///
/// # Examples
/// ```
/// use vol_core::types::MarketSnapshot;
///
/// let market = MarketSnapshot::new(100.0, 0.01, 0.0).unwrap();
/// assert_eq!(market.spot_price(), 100.0);
///
/// // Negative rates are allowed
/// assert!(MarketSnapshot::new(100.0, -0.005, 0.0).is_ok());
///
/// // Non-positive spot is rejected
/// assert!(MarketSnapshot::new(0.0, 0.01, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Spot price of the underlying (S)
    spot_price: f64,
    /// Continuously compounded risk-free rate (r)
    risk_free_rate: f64,
    /// Continuously compounded dividend yield (q)
    dividend_yield: f64,
}

impl MarketSnapshot {
    /// Creates a new market snapshot.
    ///
    /// # Arguments
    /// * `spot_price` - Current underlying price (must be positive)
    /// * `risk_free_rate` - Annualised risk-free rate (any real)
    /// * `dividend_yield` - Annualised dividend yield (any real)
    ///
    /// # Errors
    /// - `DataError::InvalidSpot` if `spot_price <= 0`
    ///
    /// # Examples
    /// ```
    /// use vol_core::types::MarketSnapshot;
    ///
    /// let market = MarketSnapshot::new(250.0, 0.02, 0.015).unwrap();
    /// assert_eq!(market.dividend_yield(), 0.015);
    /// ```
    pub fn new(
        spot_price: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
    ) -> Result<Self, DataError> {
        if spot_price <= 0.0 {
            return Err(DataError::InvalidSpot { spot: spot_price });
        }

        Ok(Self {
            spot_price,
            risk_free_rate,
            dividend_yield,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }
}
