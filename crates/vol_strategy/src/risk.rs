//! Position sizing and exit price arithmetic.
//!
//! Pure scalar formulas, independent of the signal path. Sizing
//! assumes a long-premium position: the maximum loss per contract is
//! the premium paid, so the contract count is the per-trade risk
//! budget divided by the premium. Inputs are validated up front
//! instead of silently clamped to defaults.

use crate::error::StrategyError;

/// Side of an open position, for exit price placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionSide {
    /// Bought premium: stops below entry, targets above
    Long,
    /// Sold premium: stops above entry, targets below
    Short,
}

/// Capital and per-trade risk budget.
///
/// # Examples
/// ```
/// use vol_strategy::RiskParams;
///
/// let params = RiskParams::new(100_000.0, 0.01).unwrap();
/// assert_eq!(params.max_risk_per_trade(), 1_000.0);
/// assert_eq!(params.position_size(3.50).unwrap(), 285);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskParams {
    total_capital: f64,
    risk_per_trade: f64,
}

impl RiskParams {
    /// Creates validated risk parameters.
    ///
    /// # Errors
    /// - `StrategyError::InvalidCapital` if `total_capital <= 0`
    /// - `StrategyError::InvalidRiskFraction` unless `risk_per_trade`
    ///   lies strictly between 0 and 1
    pub fn new(total_capital: f64, risk_per_trade: f64) -> Result<Self, StrategyError> {
        if total_capital <= 0.0 {
            return Err(StrategyError::InvalidCapital { total_capital });
        }
        if risk_per_trade <= 0.0 || risk_per_trade >= 1.0 {
            return Err(StrategyError::InvalidRiskFraction { risk_per_trade });
        }
        Ok(Self {
            total_capital,
            risk_per_trade,
        })
    }

    /// Returns the total capital.
    #[inline]
    pub fn total_capital(&self) -> f64 {
        self.total_capital
    }

    /// Returns the per-trade risk fraction.
    #[inline]
    pub fn risk_per_trade(&self) -> f64 {
        self.risk_per_trade
    }

    /// Returns the dollar risk budget for one trade.
    #[inline]
    pub fn max_risk_per_trade(&self) -> f64 {
        self.total_capital * self.risk_per_trade
    }

    /// Computes the contract count affordable within the risk budget.
    ///
    /// The premium paid is the maximum loss per contract, so the
    /// count is `floor(budget / premium)`; a premium above the budget
    /// sizes to zero.
    ///
    /// # Errors
    /// Returns `StrategyError::InvalidPremium` if
    /// `premium_per_contract <= 0`.
    pub fn position_size(&self, premium_per_contract: f64) -> Result<u32, StrategyError> {
        if premium_per_contract <= 0.0 {
            return Err(StrategyError::InvalidPremium {
                premium: premium_per_contract,
            });
        }
        Ok((self.max_risk_per_trade() / premium_per_contract) as u32)
    }
}

/// Computes the stop-loss price for a position.
///
/// Long positions stop below entry at `entry · (1 − pct)`, short
/// positions above at `entry · (1 + pct)`.
///
/// # Errors
/// - `StrategyError::InvalidEntryPrice` if `entry_price <= 0`
/// - `StrategyError::InvalidExitPercentage` if `percent <= 0`
pub fn stop_loss_price(
    entry_price: f64,
    percent: f64,
    side: PositionSide,
) -> Result<f64, StrategyError> {
    validate_exit_inputs(entry_price, percent)?;
    Ok(match side {
        PositionSide::Long => entry_price * (1.0 - percent),
        PositionSide::Short => entry_price * (1.0 + percent),
    })
}

/// Computes the take-profit price for a position.
///
/// The mirror of [`stop_loss_price`]: long positions target above
/// entry at `entry · (1 + pct)`, short positions below at
/// `entry · (1 − pct)`.
///
/// # Errors
/// Same validation as [`stop_loss_price`].
pub fn take_profit_price(
    entry_price: f64,
    percent: f64,
    side: PositionSide,
) -> Result<f64, StrategyError> {
    validate_exit_inputs(entry_price, percent)?;
    Ok(match side {
        PositionSide::Long => entry_price * (1.0 + percent),
        PositionSide::Short => entry_price * (1.0 - percent),
    })
}

fn validate_exit_inputs(entry_price: f64, percent: f64) -> Result<(), StrategyError> {
    if entry_price <= 0.0 {
        return Err(StrategyError::InvalidEntryPrice { entry_price });
    }
    if percent <= 0.0 {
        return Err(StrategyError::InvalidExitPercentage { percent });
    }
    Ok(())
}
