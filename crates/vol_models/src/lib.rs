//! # vol_models: Pricing and Volatility Estimation (L2: Models)
//!
//! Analytical option pricing and the two volatility estimators the
//! signal engine compares.
//!
//! This crate provides:
//! - Black-Scholes pricing with continuous dividend yield (`black_scholes`)
//! - Delta, gamma, and vega sensitivities
//! - Implied volatility inversion by bisection (`implied`)
//! - Realised volatility from historical log returns (`realized`)
//! - A shared estimate type carrying an explicit status (`estimate`)
//!
//! ## Design Principles
//!
//! - **Generic over `Float`** for the pricing maths, `f64` at the data boundary
//! - **Explicit degenerate branches** so expired and zero-volatility
//!   contracts price exactly, without NaN leakage
//! - **Status-carrying estimates** instead of sentinel values, so a
//!   genuine zero estimate stays distinguishable from a failure
//!
//! ## Usage Examples
//!
//! ```rust
//! use vol_core::types::{MarketSnapshot, OptionContract, OptionKind};
//! use vol_models::{BlackScholes, ImpliedVolSolver, RealizedVolEstimator};
//!
//! let market = MarketSnapshot::new(100.0, 0.01, 0.0).unwrap();
//!
//! // Price a quarter-year at-the-money call at 20% volatility
//! let model = BlackScholes::from_market(&market, 0.2);
//! let price = model.price_call(100.0, 0.25);
//! assert!((price - 4.1089).abs() < 1e-3);
//!
//! // Invert the quote back to the volatility that produced it
//! let option = OptionContract::new(100.0, 0.25, OptionKind::Call, price).unwrap();
//! let implied = ImpliedVolSolver::with_defaults().solve(&option, &market);
//! assert!((implied.value() - 0.2).abs() < 1e-4);
//!
//! // Estimate realised volatility from daily closes
//! let realized = RealizedVolEstimator::default()
//!     .estimate(&[100.0, 102.0, 101.0, 103.0, 99.0]);
//! assert!(realized.is_reliable());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the estimate types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod black_scholes;
pub mod error;
pub mod estimate;
pub mod implied;
pub mod realized;

// Re-export commonly used types
pub use black_scholes::BlackScholes;
pub use error::ModelError;
pub use estimate::{EstimateStatus, VolEstimate};
pub use implied::{ImpliedVolConfig, ImpliedVolSolver};
pub use realized::{RealizedVolEstimator, TRADING_DAYS_PER_YEAR};
