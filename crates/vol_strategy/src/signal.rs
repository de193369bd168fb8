//! Spread classification against configurable thresholds.
//!
//! The decision rule compares the implied-minus-realised volatility
//! spread against a buy and a sell threshold. Both boundaries are
//! exclusive: a spread landing exactly on a threshold stays neutral.

use vol_core::types::Signal;

use crate::error::StrategyError;

/// Default buy threshold: implied 5 points below realised.
pub const DEFAULT_BUY_THRESHOLD: f64 = -0.05;

/// Default sell threshold: implied 5 points above realised.
pub const DEFAULT_SELL_THRESHOLD: f64 = 0.05;

/// Decision band for classifying the volatility spread.
///
/// Thresholds are configuration, not embedded constants, so the band
/// can be calibrated without recompiling. Classification is evaluated
/// in order with strict inequalities:
/// - `spread < buy` gives [`Signal::BuyVolatility`]
/// - `spread > sell` gives [`Signal::SellVolatility`]
/// - anything else, including the thresholds themselves, is neutral
///
/// # Examples
/// ```
/// use vol_core::types::Signal;
/// use vol_strategy::SignalThresholds;
///
/// let thresholds = SignalThresholds::default();
/// assert_eq!(thresholds.classify(-0.06), Signal::BuyVolatility);
/// assert_eq!(thresholds.classify(0.06), Signal::SellVolatility);
/// assert_eq!(thresholds.classify(-0.05), Signal::Neutral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalThresholds {
    /// Spread below which implied volatility looks cheap
    pub buy: f64,
    /// Spread above which implied volatility looks rich
    pub sell: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            buy: DEFAULT_BUY_THRESHOLD,
            sell: DEFAULT_SELL_THRESHOLD,
        }
    }
}

impl SignalThresholds {
    /// Validates the decision band.
    ///
    /// # Errors
    /// Returns `StrategyError::InvalidThresholds` unless both
    /// thresholds are finite and `buy < sell`.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if !self.buy.is_finite() || !self.sell.is_finite() || self.buy >= self.sell {
            return Err(StrategyError::InvalidThresholds {
                buy: self.buy,
                sell: self.sell,
            });
        }
        Ok(())
    }

    /// Classifies a volatility spread into a trading signal.
    ///
    /// A non-finite spread fails both strict comparisons and therefore
    /// classifies as neutral.
    #[inline]
    pub fn classify(&self, spread: f64) -> Signal {
        if spread < self.buy {
            Signal::BuyVolatility
        } else if spread > self.sell {
            Signal::SellVolatility
        } else {
            Signal::Neutral
        }
    }
}
