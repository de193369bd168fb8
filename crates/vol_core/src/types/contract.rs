//! Option contract value types.

use std::fmt;
use std::str::FromStr;

use super::error::DataError;

/// European option kind: call or put.
///
/// Parses from the single-letter tags used by the CSV option files
/// (`C`/`P`) as well as the spelled-out names.
///
/// # Examples
/// ```
/// use vol_core::types::OptionKind;
///
/// let kind: OptionKind = "C".parse().unwrap();
/// assert_eq!(kind, OptionKind::Call);
/// assert_eq!(kind.tag(), 'C');
/// assert_eq!(format!("{}", kind), "Call");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns true for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Returns the single-letter tag used in data files.
    #[inline]
    pub fn tag(&self) -> char {
        match self {
            OptionKind::Call => 'C',
            OptionKind::Put => 'P',
        }
    }
}

impl FromStr for OptionKind {
    type Err = DataError;

    /// Parses an option kind from a tag or name (case-insensitive).
    ///
    /// Accepts `C`, `Call`, `P`, `Put`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" | "CALL" => Ok(OptionKind::Call),
            "P" | "PUT" => Ok(OptionKind::Put),
            _ => Err(DataError::UnknownOptionKind(s.to_string())),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

/// Immutable European option contract under analysis.
///
/// Carries the contract terms together with the observed market price.
/// The market price may be zero or negative: a volatility implied from
/// such a price is undefined, and the inverter reports it as such
/// rather than failing here.
///
/// # Examples
/// ```
/// use vol_core::types::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50).unwrap();
/// assert_eq!(contract.strike_price(), 100.0);
/// assert!(contract.has_positive_price());
///
/// // Expired contracts (zero time to expiration) are representable
/// let expired = OptionContract::new(100.0, 0.0, OptionKind::Put, 1.25).unwrap();
/// assert_eq!(expired.time_to_expiration(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Strike price (K)
    strike_price: f64,
    /// Time to expiration in years (non-negative)
    time_to_expiration: f64,
    /// Call or put
    kind: OptionKind,
    /// Observed market price of the contract
    market_price: f64,
}

impl OptionContract {
    /// Creates a new option contract.
    ///
    /// # Arguments
    /// * `strike_price` - Strike (must be positive)
    /// * `time_to_expiration` - Years to expiry (must be non-negative)
    /// * `kind` - Call or put
    /// * `market_price` - Observed market price (any real)
    ///
    /// # Errors
    /// - `DataError::InvalidStrike` if `strike_price <= 0`
    /// - `DataError::NegativeExpiry` if `time_to_expiration < 0`
    pub fn new(
        strike_price: f64,
        time_to_expiration: f64,
        kind: OptionKind,
        market_price: f64,
    ) -> Result<Self, DataError> {
        if strike_price <= 0.0 {
            return Err(DataError::InvalidStrike {
                strike: strike_price,
            });
        }

        if time_to_expiration < 0.0 {
            return Err(DataError::NegativeExpiry {
                expiry: time_to_expiration,
            });
        }

        Ok(Self {
            strike_price,
            time_to_expiration,
            kind,
            market_price,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Returns the time to expiration in years.
    #[inline]
    pub fn time_to_expiration(&self) -> f64 {
        self.time_to_expiration
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the observed market price.
    #[inline]
    pub fn market_price(&self) -> f64 {
        self.market_price
    }

    /// Returns true when stored market price is strictly positive.
    ///
    /// Only contracts with a positive price admit an implied volatility.
    #[inline]
    pub fn has_positive_price(&self) -> bool {
        self.market_price > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================
    // OptionKind tests
    // ==========================================================

    #[test]
    fn test_kind_from_tag() {
        assert_eq!("C".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("P".parse::<OptionKind>().unwrap(), OptionKind::Put);
    }

    #[test]
    fn test_kind_from_name_case_insensitive() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("PUT".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!(" c ".parse::<OptionKind>().unwrap(), OptionKind::Call);
    }

    #[test]
    fn test_kind_unknown_tag_rejected() {
        let result = "X".parse::<OptionKind>();
        assert!(matches!(
            result.unwrap_err(),
            DataError::UnknownOptionKind(tag) if tag == "X"
        ));
    }

    #[test]
    fn test_kind_predicates() {
        assert!(OptionKind::Call.is_call());
        assert!(!OptionKind::Call.is_put());
        assert!(OptionKind::Put.is_put());
    }

    #[test]
    fn test_kind_tag() {
        assert_eq!(OptionKind::Call.tag(), 'C');
        assert_eq!(OptionKind::Put.tag(), 'P');
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", OptionKind::Call), "Call");
        assert_eq!(format!("{}", OptionKind::Put), "Put");
    }

    // ==========================================================
    // OptionContract tests
    // ==========================================================

    #[test]
    fn test_contract_new_valid() {
        let contract = OptionContract::new(105.0, 0.5, OptionKind::Call, 2.80).unwrap();
        assert_eq!(contract.strike_price(), 105.0);
        assert_eq!(contract.time_to_expiration(), 0.5);
        assert_eq!(contract.kind(), OptionKind::Call);
        assert_eq!(contract.market_price(), 2.80);
    }

    #[test]
    fn test_contract_zero_strike_rejected() {
        let result = OptionContract::new(0.0, 0.5, OptionKind::Call, 2.80);
        assert!(matches!(
            result.unwrap_err(),
            DataError::InvalidStrike { .. }
        ));
    }

    #[test]
    fn test_contract_negative_expiry_rejected() {
        let result = OptionContract::new(100.0, -0.1, OptionKind::Put, 2.00);
        assert!(matches!(
            result.unwrap_err(),
            DataError::NegativeExpiry { .. }
        ));
    }

    #[test]
    fn test_contract_zero_expiry_allowed() {
        let contract = OptionContract::new(100.0, 0.0, OptionKind::Put, 2.00).unwrap();
        assert_eq!(contract.time_to_expiration(), 0.0);
    }

    #[test]
    fn test_contract_non_positive_price_allowed() {
        // A non-positive market price is valid data; it flags the IV as
        // undefined downstream rather than being rejected here.
        let contract = OptionContract::new(100.0, 0.25, OptionKind::Call, 0.0).unwrap();
        assert!(!contract.has_positive_price());

        let negative = OptionContract::new(100.0, 0.25, OptionKind::Call, -1.5).unwrap();
        assert!(!negative.has_positive_price());
    }

    #[test]
    fn test_contract_positive_price() {
        let contract = OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50).unwrap();
        assert!(contract.has_positive_price());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_contract_serde_roundtrip() {
            let contract = OptionContract::new(100.0, 0.25, OptionKind::Call, 3.50).unwrap();
            let json = serde_json::to_string(&contract).unwrap();
            let deserialized: OptionContract = serde_json::from_str(&json).unwrap();
            assert_eq!(contract, deserialized);
        }
    }
}
