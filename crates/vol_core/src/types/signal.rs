//! Trading signal classification type.

use std::fmt;

/// Discrete trading recommendation derived from the IV/RV spread.
///
/// Derived per analysis and never persisted. `BuyVolatility` means the
/// market-implied volatility sits materially below realised volatility
/// (options look cheap); `SellVolatility` the reverse; `Neutral` means
/// the spread is inside the decision band.
///
/// # Examples
/// ```
/// use vol_core::types::Signal;
///
/// assert_eq!(Signal::BuyVolatility.name(), "BUY VOL");
/// assert_eq!(format!("{}", Signal::Neutral), "NEUTRAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    /// Implied volatility materially below realised: buy volatility.
    BuyVolatility,
    /// Implied volatility materially above realised: sell volatility.
    SellVolatility,
    /// Spread inside the decision band: no action.
    Neutral,
}

impl Signal {
    /// Returns the short display label for reports.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Signal::BuyVolatility => "BUY VOL",
            Signal::SellVolatility => "SELL VOL",
            Signal::Neutral => "NEUTRAL",
        }
    }

    /// Returns true when the signal recommends a trade.
    #[inline]
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Signal::Neutral)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
