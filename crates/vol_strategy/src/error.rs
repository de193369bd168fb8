//! Error types for strategy configuration and risk sizing.

use thiserror::Error;

/// Strategy configuration and risk parameter errors.
///
/// The analysis path itself never fails: estimate failures travel in
/// the estimate statuses, not as errors. These variants cover invalid
/// configuration and invalid risk arithmetic inputs, rejected at
/// construction instead of silently clamped.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StrategyError {
    /// Invalid signal thresholds (must be finite with buy below sell).
    #[error("Invalid signal thresholds: buy = {buy}, sell = {sell}")]
    InvalidThresholds {
        /// The buy threshold
        buy: f64,
        /// The sell threshold
        sell: f64,
    },

    /// Invalid total capital (non-positive).
    #[error("Invalid total capital: {total_capital}")]
    InvalidCapital {
        /// The invalid capital value
        total_capital: f64,
    },

    /// Invalid risk-per-trade fraction (must lie strictly between 0 and 1).
    #[error("Invalid risk-per-trade fraction: {risk_per_trade}")]
    InvalidRiskFraction {
        /// The invalid fraction value
        risk_per_trade: f64,
    },

    /// Invalid premium per contract (non-positive).
    #[error("Invalid premium per contract: {premium}")]
    InvalidPremium {
        /// The invalid premium value
        premium: f64,
    },

    /// Invalid entry price (non-positive).
    #[error("Invalid entry price: {entry_price}")]
    InvalidEntryPrice {
        /// The invalid entry price value
        entry_price: f64,
    },

    /// Invalid exit percentage (non-positive).
    #[error("Invalid exit percentage: {percent}")]
    InvalidExitPercentage {
        /// The invalid percentage value
        percent: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_thresholds_display() {
        let err = StrategyError::InvalidThresholds {
            buy: 0.05,
            sell: -0.05,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid signal thresholds: buy = 0.05, sell = -0.05"
        );
    }

    #[test]
    fn test_invalid_capital_display() {
        let err = StrategyError::InvalidCapital {
            total_capital: -1000.0,
        };
        assert_eq!(format!("{}", err), "Invalid total capital: -1000");
    }

    #[test]
    fn test_invalid_risk_fraction_display() {
        let err = StrategyError::InvalidRiskFraction {
            risk_per_trade: 1.5,
        };
        assert_eq!(format!("{}", err), "Invalid risk-per-trade fraction: 1.5");
    }

    #[test]
    fn test_invalid_premium_display() {
        let err = StrategyError::InvalidPremium { premium: 0.0 };
        assert_eq!(format!("{}", err), "Invalid premium per contract: 0");
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> =
            Box::new(StrategyError::InvalidEntryPrice { entry_price: 0.0 });
        assert!(err.to_string().contains("entry price"));
    }

    #[test]
    fn test_error_clone_and_equality() {
        let err1 = StrategyError::InvalidExitPercentage { percent: -0.1 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
