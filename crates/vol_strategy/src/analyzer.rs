//! Volatility spread analysis.
//!
//! [`VolSpreadStrategy`] wires the implied volatility solver, the
//! realised volatility estimator, and the decision thresholds into a
//! single mispricing analysis. Each call is independent and
//! side-effect-free: the strategy holds configuration only, never
//! state, so one instance can serve any number of analyses (and any
//! number of threads).

use std::fmt;

use vol_core::types::{MarketSnapshot, OptionContract, Signal};
use vol_models::{ImpliedVolSolver, RealizedVolEstimator, VolEstimate};

use crate::error::StrategyError;
use crate::signal::SignalThresholds;

/// Outcome of a single volatility spread analysis.
///
/// Carries the two estimates, their spread, and the classified signal.
/// The signal is always classified from the numeric estimate values,
/// matching the sentinel arithmetic of the legacy pipeline; callers
/// that care about estimate quality gate on [`is_reliable`](Self::is_reliable)
/// or on the individual statuses before acting.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolAnalysis {
    /// Implied volatility recovered from the option's market price
    pub implied: VolEstimate,
    /// Realised volatility estimated from the underlying's history
    pub realized: VolEstimate,
    /// Implied minus realised volatility
    pub spread: f64,
    /// Signal classified from the spread
    pub signal: Signal,
}

impl VolAnalysis {
    /// Returns true when both estimates converged.
    #[inline]
    pub fn is_reliable(&self) -> bool {
        self.implied.is_reliable() && self.realized.is_reliable()
    }
}

impl fmt::Display for VolAnalysis {
    /// Formats the diagnostic line: volatilities in percentage points,
    /// unreliable estimates annotated with their status.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IV {:.4}%", self.implied.value() * 100.0)?;
        if !self.implied.is_reliable() {
            write!(f, " ({})", self.implied.status())?;
        }
        write!(f, " | RV {:.4}%", self.realized.value() * 100.0)?;
        if !self.realized.is_reliable() {
            write!(f, " ({})", self.realized.status())?;
        }
        write!(
            f,
            " | spread {:.4}% | {}",
            self.spread * 100.0,
            self.signal
        )
    }
}

/// Implied-versus-realised volatility mispricing strategy.
///
/// Compares the volatility implied by an option's market price against
/// the realised volatility of the underlying's recent history, and
/// classifies the spread into a trading signal.
///
/// # Examples
/// ```
/// use vol_core::types::{MarketSnapshot, OptionContract, OptionKind, Signal};
/// use vol_strategy::VolSpreadStrategy;
///
/// let market = MarketSnapshot::new(100.0, 0.01, 0.0).unwrap();
/// let option = OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50).unwrap();
/// let history = [100.0, 102.0, 101.0, 103.0, 99.0];
///
/// let strategy = VolSpreadStrategy::with_defaults();
/// let analysis = strategy.analyze(&option, &market, &history);
///
/// // Implied near 17% against realised near 45%: volatility is cheap
/// assert_eq!(analysis.signal, Signal::BuyVolatility);
/// ```
#[derive(Debug, Clone)]
pub struct VolSpreadStrategy {
    solver: ImpliedVolSolver,
    estimator: RealizedVolEstimator,
    thresholds: SignalThresholds,
}

impl Default for VolSpreadStrategy {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl VolSpreadStrategy {
    /// Creates a strategy from pre-built components.
    ///
    /// # Errors
    /// Returns `StrategyError::InvalidThresholds` when the decision
    /// band fails validation. The solver and estimator enforce their
    /// own invariants at construction.
    pub fn new(
        solver: ImpliedVolSolver,
        estimator: RealizedVolEstimator,
        thresholds: SignalThresholds,
    ) -> Result<Self, StrategyError> {
        thresholds.validate()?;
        Ok(Self {
            solver,
            estimator,
            thresholds,
        })
    }

    /// Creates a strategy with default solver, estimator, and band.
    pub fn with_defaults() -> Self {
        Self {
            solver: ImpliedVolSolver::with_defaults(),
            estimator: RealizedVolEstimator::default(),
            thresholds: SignalThresholds::default(),
        }
    }

    /// Returns the implied volatility solver.
    #[inline]
    pub fn solver(&self) -> &ImpliedVolSolver {
        &self.solver
    }

    /// Returns the realised volatility estimator.
    #[inline]
    pub fn estimator(&self) -> &RealizedVolEstimator {
        &self.estimator
    }

    /// Returns the decision thresholds.
    #[inline]
    pub fn thresholds(&self) -> &SignalThresholds {
        &self.thresholds
    }

    /// Analyses one option against the underlying's price history.
    ///
    /// Recovers the implied volatility from the option's market price,
    /// estimates realised volatility from the history, and classifies
    /// the spread.
    pub fn analyze(
        &self,
        option: &OptionContract,
        market: &MarketSnapshot,
        historical_prices: &[f64],
    ) -> VolAnalysis {
        let realized = self.estimator.estimate(historical_prices);
        self.analyze_with_realized(option, market, realized)
    }

    /// Completes an analysis given an already-computed realised
    /// volatility estimate. Batch analysis estimates once per
    /// underlying and fans out per contract.
    pub(crate) fn analyze_with_realized(
        &self,
        option: &OptionContract,
        market: &MarketSnapshot,
        realized: VolEstimate,
    ) -> VolAnalysis {
        let implied = self.solver.solve(option, market);
        let spread = implied.value() - realized.value();
        let signal = self.thresholds.classify(spread);
        VolAnalysis {
            implied,
            realized,
            spread,
            signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vol_core::types::OptionKind;
    use vol_models::{BlackScholes, EstimateStatus, ImpliedVolConfig};

    /// Five daily closes with realised volatility ≈ 45.06%.
    const CHOPPY_HISTORY: [f64; 5] = [100.0, 102.0, 101.0, 103.0, 99.0];

    /// Five daily closes with realised volatility ≈ 1.83%.
    const QUIET_HISTORY: [f64; 5] = [100.0, 100.1, 100.0, 100.1, 100.0];

    fn demo_market() -> MarketSnapshot {
        MarketSnapshot::new(100.0, 0.01, 0.0).unwrap()
    }

    /// Builds a contract quoted exactly at the model price for `sigma`.
    fn contract_quoted_at(market: &MarketSnapshot, sigma: f64) -> OptionContract {
        let price = BlackScholes::from_market(market, sigma).price_call(100.0, 0.25);
        OptionContract::new(100.0, 0.25, OptionKind::Call, price).unwrap()
    }

    // ==========================================================
    // Construction Tests
    // ==========================================================

    #[test]
    fn test_new_validates_thresholds() {
        let thresholds = SignalThresholds {
            buy: 0.05,
            sell: -0.05,
        };
        let result = VolSpreadStrategy::new(
            ImpliedVolSolver::with_defaults(),
            RealizedVolEstimator::default(),
            thresholds,
        );
        assert!(matches!(
            result,
            Err(StrategyError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn test_with_defaults_accessors() {
        let strategy = VolSpreadStrategy::with_defaults();
        assert_eq!(strategy.thresholds().buy, -0.05);
        assert_eq!(strategy.thresholds().sell, 0.05);
        assert_eq!(strategy.estimator().periods_per_year(), 252.0);
        assert_eq!(strategy.solver().config().max_iterations, 100);
    }

    #[test]
    fn test_custom_components() {
        let solver = ImpliedVolSolver::new(ImpliedVolConfig {
            upper_bound: 10.0,
            ..Default::default()
        })
        .unwrap();
        let estimator = RealizedVolEstimator::new(52.0).unwrap();
        let thresholds = SignalThresholds {
            buy: -0.10,
            sell: 0.10,
        };
        let strategy = VolSpreadStrategy::new(solver, estimator, thresholds).unwrap();
        assert_eq!(strategy.solver().config().upper_bound, 10.0);
        assert_eq!(strategy.estimator().periods_per_year(), 52.0);
    }

    // ==========================================================
    // Signal Scenario Tests
    // ==========================================================

    #[test]
    fn test_cheap_implied_volatility_buys() {
        // Quoted at 25% implied against 45% realised: spread ≈ -0.20
        let market = demo_market();
        let option = contract_quoted_at(&market, 0.25);
        let strategy = VolSpreadStrategy::with_defaults();

        let analysis = strategy.analyze(&option, &market, &CHOPPY_HISTORY);

        assert!(analysis.is_reliable());
        assert_relative_eq!(analysis.implied.value(), 0.25, epsilon = 1e-4);
        assert_relative_eq!(analysis.realized.value(), 0.450618, epsilon = 1e-4);
        assert_relative_eq!(analysis.spread, -0.200618, epsilon = 1e-3);
        assert_eq!(analysis.signal, Signal::BuyVolatility);
    }

    #[test]
    fn test_rich_implied_volatility_sells() {
        // Quoted at 30% implied against a near-flat history
        let market = demo_market();
        let option = contract_quoted_at(&market, 0.30);
        let strategy = VolSpreadStrategy::with_defaults();

        let analysis = strategy.analyze(&option, &market, &QUIET_HISTORY);

        assert!(analysis.is_reliable());
        assert!(analysis.spread > 0.25);
        assert_eq!(analysis.signal, Signal::SellVolatility);
    }

    #[test]
    fn test_aligned_volatilities_neutral() {
        // Quoted at 46% against 45% realised: inside the band
        let market = demo_market();
        let option = contract_quoted_at(&market, 0.46);
        let strategy = VolSpreadStrategy::with_defaults();

        let analysis = strategy.analyze(&option, &market, &CHOPPY_HISTORY);

        assert!(analysis.is_reliable());
        assert!(analysis.spread.abs() < 0.05);
        assert_eq!(analysis.signal, Signal::Neutral);
    }

    #[test]
    fn test_demo_contract_buys_volatility() {
        // The 3.50 quote implies roughly 17% against 45% realised
        let market = demo_market();
        let option = OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50).unwrap();
        let strategy = VolSpreadStrategy::with_defaults();

        let analysis = strategy.analyze(&option, &market, &CHOPPY_HISTORY);

        assert!(analysis.implied.value() > 0.15);
        assert!(analysis.implied.value() < 0.19);
        assert_eq!(analysis.signal, Signal::BuyVolatility);
    }

    // ==========================================================
    // Estimate Status Tests
    // ==========================================================

    #[test]
    fn test_undefined_price_still_classifies() {
        // A worthless quote has no implied volatility; the numeric
        // pipeline still runs with the 0.0 sentinel, flagged unreliable
        let market = demo_market();
        let option = OptionContract::new(100.0, 0.25, OptionKind::Call, 0.0).unwrap();
        let strategy = VolSpreadStrategy::with_defaults();

        let analysis = strategy.analyze(&option, &market, &CHOPPY_HISTORY);

        assert_eq!(analysis.implied.status(), EstimateStatus::UndefinedPrice);
        assert!(!analysis.is_reliable());
        assert_relative_eq!(analysis.spread, -0.450618, epsilon = 1e-4);
        assert_eq!(analysis.signal, Signal::BuyVolatility);
    }

    #[test]
    fn test_insufficient_history_still_classifies() {
        let market = demo_market();
        let option = contract_quoted_at(&market, 0.30);
        let strategy = VolSpreadStrategy::with_defaults();

        let analysis = strategy.analyze(&option, &market, &[100.0]);

        assert_eq!(analysis.realized.status(), EstimateStatus::InsufficientData);
        assert!(!analysis.is_reliable());
        assert_eq!(analysis.signal, Signal::SellVolatility);
    }

    // ==========================================================
    // Display Tests
    // ==========================================================

    #[test]
    fn test_display_reliable_analysis() {
        let market = demo_market();
        let option = contract_quoted_at(&market, 0.25);
        let strategy = VolSpreadStrategy::with_defaults();

        let rendered = format!("{}", strategy.analyze(&option, &market, &CHOPPY_HISTORY));

        assert!(rendered.starts_with("IV "));
        assert!(rendered.contains(" | RV 45.06"));
        assert!(rendered.contains(" | spread -20.06"));
        assert!(rendered.ends_with("| BUY VOL"));
    }

    #[test]
    fn test_display_annotates_unreliable_estimates() {
        let market = demo_market();
        let option = OptionContract::new(100.0, 0.25, OptionKind::Put, -2.0).unwrap();
        let strategy = VolSpreadStrategy::with_defaults();

        let rendered = format!("{}", strategy.analyze(&option, &market, &[]));

        assert!(rendered.contains("(undefined price)"));
        assert!(rendered.contains("(insufficient data)"));
    }
}
