//! Time types and day count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Conventions for turning day counts into year fractions
//! - `time_to_expiry`: Helper producing the pricer's expiry input from two dates
//!
//! # Examples
//!
//! ```
//! use vol_core::types::time::{Date, DayCountConvention};
//!
//! let valuation = Date::from_ymd(2024, 1, 2).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 2).unwrap();
//!
//! let yf = DayCountConvention::Act365_25.year_fraction(valuation, expiry);
//! assert!((yf - 182.0 / 365.25).abs() < 1e-12);
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and day arithmetic. The wrapper
/// keeps chrono out of downstream signatures while leaving its full API
/// reachable through [`Date::into_inner`].
///
/// # Examples
///
/// ```
/// use vol_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Errors
    /// `DateError::InvalidDate` if the components do not form a calendar
    /// date (e.g., February 30th).
    ///
    /// # Examples
    ///
    /// ```
    /// use vol_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Errors
    /// `DateError::ParseError` if the string is not a valid ISO date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// Positive when `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention (year fraction convention).
///
/// # Variants
/// - `Act365`: Actual days / 365 (standard for derivatives)
/// - `Act360`: Actual days / 360 (money market instruments)
/// - `Act365_25`: Actual days / 365.25 (calendar-day average including
///   leap years; the convention used by the historical analysis data)
///
/// # Usage
///
/// ```
/// use vol_core::types::time::{Date, DayCountConvention};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
///
/// let yf = DayCountConvention::Act365.year_fraction(start, end);
/// // 182 days / 365.0
/// assert!((yf - 0.4986).abs() < 0.001);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    Act365,

    /// Actual/360: actual_days / 360.0
    Act360,

    /// Actual/365.25: actual_days / 365.25
    ///
    /// Averages leap years into the denominator. Used when expiries are
    /// derived from raw calendar-day counts.
    Act365_25,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// # Examples
    ///
    /// ```
    /// use vol_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Act365.name(), "ACT/365");
    /// assert_eq!(DayCountConvention::Act365_25.name(), "ACT/365.25");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365_25 => "ACT/365.25",
        }
    }

    /// Returns the number of days in one year under this convention.
    #[inline]
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCountConvention::Act365 => 365.0,
            DayCountConvention::Act360 => 360.0,
            DayCountConvention::Act365_25 => 365.25,
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`; the sign indicates
    /// direction rather than being an error.
    ///
    /// # Arguments
    /// * `start` - Start date
    /// * `end` - End date
    ///
    /// # Examples
    ///
    /// ```
    /// use vol_core::types::time::{Date, DayCountConvention};
    ///
    /// let start = Date::from_ymd(2024, 1, 1).unwrap();
    /// let end = Date::from_ymd(2025, 1, 1).unwrap();
    ///
    /// let yf = DayCountConvention::Act365.year_fraction(start, end);
    /// assert!((yf - 366.0 / 365.0).abs() < 1e-12);
    ///
    /// // Reversed dates give the negated fraction
    /// let back = DayCountConvention::Act365.year_fraction(end, start);
    /// assert!((yf + back).abs() < 1e-12);
    /// ```
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = end - start;
        days as f64 / self.days_per_year()
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses a day count convention from string (case-insensitive).
    ///
    /// Supports multiple aliases for each convention:
    /// - ACT/365: "ACT/365", "Actual/365", "Act365", "A365"
    /// - ACT/360: "ACT/360", "Actual/360", "Act360", "A360"
    /// - ACT/365.25: "ACT/365.25", "Act365.25", "A365.25"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::Act365),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Act360),
            "ACT365.25" | "ACTUAL365.25" | "A365.25" => Ok(DayCountConvention::Act365_25),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Returns the number of calendar days from `start` to `end`.
///
/// Negative when `end` precedes `start`.
///
/// # Examples
///
/// ```
/// use vol_core::types::time::{days_between, Date};
///
/// let start = Date::from_ymd(2024, 3, 1).unwrap();
/// let end = Date::from_ymd(2024, 3, 31).unwrap();
/// assert_eq!(days_between(start, end), 30);
/// ```
#[inline]
pub fn days_between(start: Date, end: Date) -> i64 {
    end - start
}

/// Converts a valuation/expiry date pair into years to expiration.
///
/// This produces the `time_to_expiration` input the pricer expects from
/// listed expiry dates. An expiry on or before the valuation date yields
/// a non-positive fraction, which the pricer resolves as an expired
/// contract.
///
/// # Examples
///
/// ```
/// use vol_core::types::time::{time_to_expiry, Date, DayCountConvention};
///
/// let valuation = Date::from_ymd(2024, 1, 2).unwrap();
/// let expiry = Date::from_ymd(2024, 4, 2).unwrap();
///
/// let t = time_to_expiry(valuation, expiry, DayCountConvention::Act365_25);
/// assert!((t - 91.0 / 365.25).abs() < 1e-12);
/// ```
#[inline]
pub fn time_to_expiry(valuation: Date, expiry: Date, convention: DayCountConvention) -> f64 {
    convention.year_fraction(valuation, expiry)
}
