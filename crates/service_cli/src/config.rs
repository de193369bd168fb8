//! Analysis configuration management.
//!
//! Handles loading the analysis settings from a TOML file. Every key
//! is optional; missing keys fall back to the library defaults, and a
//! missing file falls back to the default configuration.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use vol_models::{ImpliedVolConfig, TRADING_DAYS_PER_YEAR};
use vol_strategy::{DEFAULT_BUY_THRESHOLD, DEFAULT_SELL_THRESHOLD};

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Analysis configuration
///
/// ```toml
/// # volsig.toml
/// buy_threshold = -0.05
/// sell_threshold = 0.05
/// vol_lower_bound = 0.001
/// vol_upper_bound = 5.0
/// solver_tolerance = 0.00001
/// max_iterations = 100
/// periods_per_year = 252.0
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Spread below which the signal is a volatility buy
    pub buy_threshold: f64,
    /// Spread above which the signal is a volatility sell
    pub sell_threshold: f64,
    /// Lower bound of the implied volatility search bracket
    pub vol_lower_bound: f64,
    /// Upper bound of the implied volatility search bracket
    pub vol_upper_bound: f64,
    /// Price convergence tolerance for the implied volatility solver
    pub solver_tolerance: f64,
    /// Iteration budget for the implied volatility solver
    pub max_iterations: usize,
    /// Annualisation factor for the realised volatility estimator
    pub periods_per_year: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let solver = ImpliedVolConfig::default();
        Self {
            buy_threshold: DEFAULT_BUY_THRESHOLD,
            sell_threshold: DEFAULT_SELL_THRESHOLD,
            vol_lower_bound: solver.lower_bound,
            vol_upper_bound: solver.upper_bound,
            solver_tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
            periods_per_year: TRADING_DAYS_PER_YEAR,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate configuration from `path` if it exists.
    ///
    /// A missing file yields the default configuration; a file that is
    /// present but unreadable, unparsable, or invalid is an error.
    pub fn load_if_present(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(self.buy_threshold.is_finite() && self.sell_threshold.is_finite())
            || self.buy_threshold >= self.sell_threshold
        {
            errors.push(format!(
                "Signal thresholds must satisfy buy < sell (got buy = {}, sell = {})",
                self.buy_threshold, self.sell_threshold
            ));
        }

        if self.vol_lower_bound <= 0.0 || self.vol_lower_bound >= self.vol_upper_bound {
            errors.push(format!(
                "Volatility bracket [{}, {}] must satisfy 0 < lower < upper",
                self.vol_lower_bound, self.vol_upper_bound
            ));
        }

        if self.solver_tolerance <= 0.0 {
            errors.push(format!(
                "solver_tolerance must be positive (got {})",
                self.solver_tolerance
            ));
        }

        if self.max_iterations == 0 {
            errors.push("max_iterations must be greater than 0".to_string());
        }

        if self.periods_per_year <= 0.0 {
            errors.push(format!(
                "periods_per_year must be positive (got {})",
                self.periods_per_year
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
