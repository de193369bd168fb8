//! Root-finding solvers for numerical computation.
//!
//! This module provides the bracketing root-finder used to invert the
//! option pricer into an implied volatility, together with its shared
//! configuration type.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Interval-halving method for monotonic
//!   functions. Linear convergence, bounded worst case, no derivative
//!   requirement, and a best-effort result when the iteration budget is
//!   exhausted.
//!
//! ## Configuration
//!
//! Solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-5)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Example
//!
//! ```
//! use vol_core::math::solvers::{BisectionSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = BisectionSolver::new(SolverConfig::new(1e-10, 200));
//! let result = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0);
//!
//! assert!(result.converged);
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```

mod bisection;
mod config;

// Re-export public types at module level
pub use bisection::{BisectionSolver, RootResult};
pub use config::SolverConfig;
