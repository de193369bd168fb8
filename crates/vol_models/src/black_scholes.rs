//! Black-Scholes pricing model for European options.
//!
//! This module provides the two-factor Black-Scholes model (continuous
//! risk-free rate and continuous dividend yield) for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Boundary Policy
//!
//! Degenerate inputs are priced by explicit closed-form branches rather
//! than surfaced as errors, checked in this order:
//! 1. `T <= 0`: intrinsic value (expired or expiring contract)
//! 2. `σ <= 0`: discounted intrinsic value (no-extrinsic-value limit)

use num_traits::Float;

use vol_core::math::distributions::{norm_cdf, norm_pdf};
use vol_core::types::{MarketSnapshot, OptionKind};

use crate::error::ModelError;

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics with a continuous dividend yield.
///
/// The model never rejects a volatility: non-positive volatility is a
/// valid degenerate input priced at its discounted intrinsic value, so
/// that a root-finder can probe the whole volatility axis safely.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use vol_models::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S*exp(-qT) - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `dividend_yield` - Continuous dividend yield (annualised, may be negative)
    /// * `volatility` - Volatility (any real; non-positive values price at the
    ///   discounted intrinsic limit)
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if spot <= 0
    ///
    /// # Examples
    /// ```
    /// use vol_models::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.02, 0.2).unwrap();
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.02, 0.2).is_err());
    ///
    /// // Zero volatility is a valid degenerate model
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.02, 0.0).is_ok());
    /// ```
    pub fn new(spot: T, rate: T, dividend_yield: T, volatility: T) -> Result<Self, ModelError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(ModelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The d1 term. Returns large positive/negative values for the
    /// degenerate cases (expired contract, non-positive volatility).
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();

        // Degenerate case: the price branches never consume d1 here,
        // so return the limiting value for diagnostics
        if expiry <= zero || self.volatility <= zero {
            let large = T::from(100.0).unwrap();
            if self.spot > strike {
                return large;
            } else if self.spot < strike {
                return -large;
            } else {
                return zero;
            }
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        // d1 = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate - self.dividend_yield
            + half * self.volatility * self.volatility)
            * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The d2 term.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        if expiry <= zero || self.volatility <= zero {
            return self.d1(strike, expiry);
        }

        let sqrt_t = expiry.sqrt();
        self.d1(strike, expiry) - self.volatility * sqrt_t
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The theoretical call option price. Expired contracts return
    /// exactly their intrinsic value; non-positive volatility returns
    /// the discounted intrinsic value.
    ///
    /// # Examples
    /// ```
    /// use vol_models::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    ///
    /// // ATM call should have positive value
    /// assert!(price > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        // Expired contract: worth exactly its intrinsic value
        if expiry <= zero {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let carry = (-self.dividend_yield * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        // No-extrinsic-value limit as volatility tends to zero
        if self.volatility <= zero {
            let forward_intrinsic = self.spot * carry - strike * discount;
            return if forward_intrinsic > zero {
                forward_intrinsic
            } else {
                zero
            };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        // C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
        self.spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The theoretical put option price. Expired contracts return
    /// exactly their intrinsic value; non-positive volatility returns
    /// the discounted intrinsic value.
    ///
    /// # Examples
    /// ```
    /// use vol_models::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    ///
    /// // ATM put should have positive value
    /// assert!(price > 0.0);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        // Expired contract: worth exactly its intrinsic value
        if expiry <= zero {
            let intrinsic = strike - self.spot;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let carry = (-self.dividend_yield * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        // No-extrinsic-value limit as volatility tends to zero
        if self.volatility <= zero {
            let forward_intrinsic = strike * discount - self.spot * carry;
            return if forward_intrinsic > zero {
                forward_intrinsic
            } else {
                zero
            };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        // P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
        strike * discount * norm_cdf(-d2) - self.spot * carry * norm_cdf(-d1)
    }

    /// Prices an option of the given kind.
    ///
    /// Dispatches to [`price_call`](Self::price_call) or
    /// [`price_put`](Self::price_put).
    ///
    /// # Arguments
    /// * `kind` - Call or Put
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    #[inline]
    pub fn price(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = e^(-qT)·(N(d₁) - 1)
    ///
    /// # Arguments
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration
    /// * `is_call` - True for call, false for put
    ///
    /// # Returns
    /// The delta sensitivity.
    #[inline]
    pub fn delta(&self, strike: T, expiry: T, is_call: bool) -> T {
        let zero = T::zero();
        let one = T::one();

        if expiry <= zero {
            if is_call {
                return if self.spot > strike { one } else { zero };
            } else {
                return if self.spot < strike { -one } else { zero };
            }
        }

        let carry = (-self.dividend_yield * expiry).exp();

        // Zero-volatility limit: step function on the discounted intrinsic
        if self.volatility <= zero {
            let discount = (-self.rate * expiry).exp();
            let forward_itm = self.spot * carry > strike * discount;
            if is_call {
                return if forward_itm { carry } else { zero };
            } else {
                return if forward_itm { zero } else { -carry };
            }
        }

        let d1 = self.d1(strike, expiry);
        let n_d1 = norm_cdf(d1);

        if is_call {
            carry * n_d1
        } else {
            carry * (n_d1 - one)
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T)
    ///
    /// Gamma is the same for both calls and puts.
    ///
    /// # Arguments
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration
    ///
    /// # Returns
    /// The gamma sensitivity (always non-negative).
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        if expiry <= zero || self.volatility <= zero {
            return zero;
        }

        let carry = (-self.dividend_yield * expiry).exp();
        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        // Gamma = e^(-qT)·φ(d₁) / (S·σ·√T)
        carry * norm_pdf(d1) / (self.spot * self.volatility * sqrt_t)
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·e^(-qT)·√T·φ(d₁)
    ///
    /// Vega is the same for both calls and puts.
    ///
    /// # Arguments
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiration
    ///
    /// # Returns
    /// The vega sensitivity (always non-negative).
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        if expiry <= zero || self.volatility <= zero {
            return zero;
        }

        let carry = (-self.dividend_yield * expiry).exp();
        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();

        // Vega = S·e^(-qT)·√T·φ(d₁)
        self.spot * carry * sqrt_t * norm_pdf(d1)
    }

    /// Returns a copy of the model with a different volatility.
    ///
    /// Used by the implied volatility solver to probe the volatility
    /// axis without revalidating the other parameters.
    #[inline]
    pub fn with_volatility(&self, volatility: T) -> Self {
        Self {
            spot: self.spot,
            rate: self.rate,
            dividend_yield: self.dividend_yield,
            volatility,
        }
    }
}

impl BlackScholes<f64> {
    /// Creates a Black-Scholes model from a market snapshot and a volatility.
    ///
    /// The snapshot supplies spot, risk-free rate, and dividend yield;
    /// the volatility is the model input under calibration. Infallible:
    /// a validated snapshot already guarantees a positive spot.
    ///
    /// # Examples
    /// ```
    /// use vol_core::types::MarketSnapshot;
    /// use vol_models::BlackScholes;
    ///
    /// let market = MarketSnapshot::new(100.0, 0.01, 0.0).unwrap();
    /// let bs = BlackScholes::from_market(&market, 0.2);
    /// assert!(bs.price_call(100.0, 0.25) > 0.0);
    /// ```
    pub fn from_market(market: &MarketSnapshot, volatility: f64) -> Self {
        Self {
            spot: market.spot_price(),
            rate: market.risk_free_rate(),
            dividend_yield: market.dividend_yield(),
            volatility,
        }
    }
}
