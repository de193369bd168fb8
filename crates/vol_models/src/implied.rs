//! Implied volatility inversion.
//!
//! This module inverts the Black-Scholes pricer with a bisection
//! search: given a traded option price, it recovers the volatility at
//! which the model reproduces that price. Bisection is justified
//! because the price is monotonically increasing in volatility for
//! `T > 0`, so the fixed search bracket needs no separate bracketing
//! phase.
//!
//! Failure modes are explicit: a non-positive market price yields an
//! [`EstimateStatus::UndefinedPrice`](crate::EstimateStatus) estimate
//! without iterating, and an exhausted iteration budget yields
//! [`EstimateStatus::NotConverged`](crate::EstimateStatus) with the
//! best-effort value.

use vol_core::math::solvers::{BisectionSolver, SolverConfig};
use vol_core::types::{MarketSnapshot, OptionContract};

use crate::black_scholes::BlackScholes;
use crate::error::ModelError;
use crate::estimate::VolEstimate;

/// Configuration for the implied volatility solver.
///
/// The default bracket covers 0.1% to 500% annualised volatility.
/// Instruments whose true implied volatility lies outside the bracket
/// resolve to a not-converged estimate pinned near the violated bound;
/// widen the bracket for extreme short-dated contracts.
///
/// # Fields
/// - `lower_bound`: Lower volatility bracket bound (default: 0.001)
/// - `upper_bound`: Upper volatility bracket bound (default: 5.0)
/// - `tolerance`: Convergence tolerance on the price difference (default: 1e-5)
/// - `max_iterations`: Maximum bisection iterations (default: 100)
/// - `vol_floor`: Positive floor applied before pricing a midpoint (default: 1e-4)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolConfig {
    /// Lower volatility bracket bound
    pub lower_bound: f64,
    /// Upper volatility bracket bound
    pub upper_bound: f64,
    /// Convergence tolerance on the absolute price difference
    pub tolerance: f64,
    /// Maximum bisection iterations
    pub max_iterations: usize,
    /// Positive floor applied to midpoints before pricing
    pub vol_floor: f64,
}

impl Default for ImpliedVolConfig {
    fn default() -> Self {
        Self {
            lower_bound: 0.001,
            upper_bound: 5.0,
            tolerance: 1e-5,
            max_iterations: 100,
            vol_floor: 1e-4,
        }
    }
}

impl ImpliedVolConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    /// - `ModelError::InvalidBracket` if `lower_bound <= 0` or
    ///   `lower_bound >= upper_bound`
    /// - `ModelError::InvalidTolerance` if `tolerance <= 0`
    /// - `ModelError::InvalidIterationBudget` if `max_iterations == 0`
    /// - `ModelError::InvalidVolFloor` if `vol_floor <= 0`
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.lower_bound <= 0.0 || self.lower_bound >= self.upper_bound {
            return Err(ModelError::InvalidBracket {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }
        if self.tolerance <= 0.0 {
            return Err(ModelError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(ModelError::InvalidIterationBudget {
                max_iterations: self.max_iterations,
            });
        }
        if self.vol_floor <= 0.0 {
            return Err(ModelError::InvalidVolFloor {
                vol_floor: self.vol_floor,
            });
        }
        Ok(())
    }
}

/// Implied volatility solver.
///
/// Inverts the Black-Scholes pricer by bisection over the configured
/// volatility bracket. The solver is stateless between calls: each
/// [`solve`](Self::solve) is independent and side-effect-free.
///
/// # Examples
/// ```
/// use vol_core::types::{MarketSnapshot, OptionContract, OptionKind};
/// use vol_models::{BlackScholes, ImpliedVolSolver};
///
/// let market = MarketSnapshot::new(100.0, 0.01, 0.0).unwrap();
/// let model = BlackScholes::from_market(&market, 0.2);
/// let price = model.price_call(100.0, 0.25);
///
/// let option = OptionContract::new(100.0, 0.25, OptionKind::Call, price).unwrap();
/// let solver = ImpliedVolSolver::with_defaults();
/// let estimate = solver.solve(&option, &market);
///
/// assert!(estimate.is_reliable());
/// assert!((estimate.value() - 0.2).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    config: ImpliedVolConfig,
}

impl ImpliedVolSolver {
    /// Creates a solver with the given configuration.
    ///
    /// # Errors
    /// Returns the first [`ModelError`] reported by
    /// [`ImpliedVolConfig::validate`].
    pub fn new(config: ImpliedVolConfig) -> Result<Self, ModelError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a solver with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: ImpliedVolConfig::default(),
        }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &ImpliedVolConfig {
        &self.config
    }

    /// Recovers the volatility implied by an option's market price.
    ///
    /// A non-positive market price returns an
    /// [`undefined_price`](VolEstimate::undefined_price) estimate
    /// immediately, without iterating: no volatility can reproduce it.
    /// Otherwise bisection narrows the bracket until the model price is
    /// within `tolerance` of the market price, or the iteration budget
    /// is exhausted and the last midpoint is returned as best-effort.
    ///
    /// # Arguments
    /// * `option` - The contract whose market price is inverted
    /// * `market` - Market snapshot supplying spot, rate, and yield
    pub fn solve(&self, option: &OptionContract, market: &MarketSnapshot) -> VolEstimate {
        if !option.has_positive_price() {
            return VolEstimate::undefined_price();
        }

        let base = BlackScholes::from_market(market, self.config.lower_bound);
        let kind = option.kind();
        let strike = option.strike_price();
        let expiry = option.time_to_expiration();
        let market_price = option.market_price();
        let vol_floor = self.config.vol_floor;

        let objective = move |vol: f64| {
            // Keep the pricer on its closed-form branch
            let vol = if vol <= 0.0 { vol_floor } else { vol };
            base.with_volatility(vol).price(kind, strike, expiry) - market_price
        };

        let solver = BisectionSolver::new(SolverConfig::new(
            self.config.tolerance,
            self.config.max_iterations,
        ));
        let result = solver.find_root(objective, self.config.lower_bound, self.config.upper_bound);

        if result.converged {
            VolEstimate::converged(result.root, result.iterations)
        } else {
            VolEstimate::not_converged(result.root, result.iterations)
        }
    }
}
