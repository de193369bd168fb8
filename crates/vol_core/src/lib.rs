//! # vol_core: Foundation Types and Numerics for the Volatility Signal Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! vol_core serves as the bottom layer of the A-P-S architecture, providing:
//! - Market data and contract value types (`types::market`, `types::contract`)
//! - Trading signal classification type (`types::signal`)
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Error types: `DataError`, `DateError` (`types::error`)
//! - Normal distribution functions (`math::distributions`)
//! - Bracketing root-finder (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vol_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use vol_core::math::distributions::norm_cdf;
//! use vol_core::types::{Date, DayCountConvention, MarketSnapshot};
//!
//! // Date operations
//! let trade = Date::from_ymd(2024, 1, 2).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 2).unwrap();
//! let years = DayCountConvention::Act365_25.year_fraction(trade, expiry);
//! assert!(years > 0.0);
//!
//! // Market data
//! let market = MarketSnapshot::new(100.0, 0.01, 0.0).unwrap();
//! assert_eq!(market.spot_price(), 100.0);
//!
//! // Distribution functions
//! let p = norm_cdf(0.0_f64);
//! # assert!((p - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the value types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
