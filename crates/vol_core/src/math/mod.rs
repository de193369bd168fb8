//! Mathematical foundations for volatility analysis.
//!
//! This module contains the numerical building blocks shared by the
//! model crates:
//!
//! - [`distributions`]: Error function and standard normal
//!   distribution functions (PDF/CDF)
//! - [`solvers`]: Root-finding algorithms for model inversion
//!
//! All functions are generic over [`num_traits::Float`] so they work
//! with both `f32` and `f64`.

pub mod distributions;
pub mod solvers;

// Re-export commonly used items
pub use distributions::{erf, norm_cdf, norm_pdf};
pub use solvers::{BisectionSolver, RootResult, SolverConfig};
