//! # vol_strategy: Signal Generation and Risk Sizing (L3: Strategy)
//!
//! Turns the volatility estimates of `vol_models` into discrete
//! trading signals, and sizes the resulting positions.
//!
//! This crate provides:
//! - Spread classification against a configurable decision band (`signal`)
//! - The implied-versus-realised mispricing analysis (`analyzer`)
//! - Parallel batch analysis over many contracts (`batch`)
//! - Position sizing and exit price arithmetic (`risk`)
//!
//! ## Design Principles
//!
//! - **Stateless analysis**: the strategy struct holds configuration
//!   only; every call is independent and side-effect-free, so batches
//!   parallelise with no synchronisation
//! - **Plain structs over trait objects**: a single strategy variant
//!   needs no dynamic dispatch
//! - **Configuration over constants**: thresholds and risk budgets are
//!   validated inputs, not embedded literals
//!
//! ## Usage Examples
//!
//! ```rust
//! use vol_core::types::{MarketSnapshot, OptionContract, OptionKind};
//! use vol_strategy::VolSpreadStrategy;
//!
//! let market = MarketSnapshot::new(100.0, 0.01, 0.0).unwrap();
//! let history = [100.0, 102.0, 101.0, 103.0, 99.0];
//! let contracts = vec![
//!     OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50).unwrap(),
//!     OptionContract::new(100.0, 0.25, OptionKind::Put, 2.00).unwrap(),
//! ];
//!
//! let strategy = VolSpreadStrategy::with_defaults();
//! let results = strategy.analyze_batch(&contracts, &market, &history);
//!
//! assert_eq!(results.len(), 2);
//! for analysis in &results {
//!     println!("{}", analysis);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for analysis results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analyzer;
pub mod batch;
pub mod error;
pub mod risk;
pub mod signal;

// Re-export commonly used types
pub use analyzer::{VolAnalysis, VolSpreadStrategy};
pub use error::StrategyError;
pub use risk::{stop_loss_price, take_profit_price, PositionSide, RiskParams};
pub use signal::{SignalThresholds, DEFAULT_BUY_THRESHOLD, DEFAULT_SELL_THRESHOLD};
