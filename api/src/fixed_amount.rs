//! A decimal value with exactly two fractional digits.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

const HUNDREDTHS_PER_UNIT: i128 = 100;

/// First magnitude, in hundredths, that no longer fits the `i128` store.
const HUNDREDTHS_LIMIT: f64 = i128::MAX as f64;

/// An error that can occur when parsing a string into a `FixedAmount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFixedAmountError {
    /// The string is not a decimal number (e.g., "abc", "1.2.3").
    #[error("invalid decimal format")]
    InvalidFormat,
    /// The string parsed to infinity or NaN.
    #[error("value is not finite")]
    NotFinite,
    /// The value is too large to count in hundredths.
    #[error("value out of range")]
    OutOfRange,
}

/// A signed decimal value fixed to two places.
///
/// Internally the value is stored as a count of hundredths, so every rendering
/// through `Display` has exactly two digits after the decimal point
/// (e.g., `0.5` displays as `"0.50"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FixedAmount {
    hundredths: i128,
}

impl FixedAmount {
    /// Creates a `FixedAmount` directly from a count of hundredths.
    pub fn new_from_hundredths(hundredths: i128) -> Self {
        Self { hundredths }
    }

    /// Creates a `FixedAmount` from a floating-point value, typically from an API.
    ///
    /// The value is rounded to the nearest hundredth, ties away from zero.
    ///
    /// # Examples
    /// ```
    /// use api::fixed_amount::FixedAmount;
    ///
    /// let amount = FixedAmount::try_from_float(0.456).unwrap();
    /// assert_eq!(amount.as_hundredths(), 46);
    /// assert_eq!(amount.to_string(), "0.46");
    /// ```
    pub fn try_from_float(value: f64) -> Result<Self, ParseFixedAmountError> {
        Self::from_hundredths_f64(value * HUNDREDTHS_PER_UNIT as f64)
    }

    fn from_hundredths_f64(hundredths: f64) -> Result<Self, ParseFixedAmountError> {
        if !hundredths.is_finite() {
            return Err(ParseFixedAmountError::NotFinite);
        }
        let rounded = hundredths.round();
        if rounded.abs() >= HUNDREDTHS_LIMIT {
            return Err(ParseFixedAmountError::OutOfRange);
        }
        Ok(Self {
            hundredths: rounded as i128,
        })
    }

    /// Returns the raw count of hundredths.
    pub fn as_hundredths(&self) -> i128 {
        self.hundredths
    }

    /// Returns the value as a float.
    pub fn to_f64(&self) -> f64 {
        self.hundredths as f64 / HUNDREDTHS_PER_UNIT as f64
    }

    /// Multiplies by `factor` and rounds the product back to two places.
    ///
    /// Returns `None` when the product is not finite or does not fit.
    pub fn checked_scaled(&self, factor: f64) -> Option<Self> {
        Self::from_hundredths_f64(self.hundredths as f64 * factor).ok()
    }
}

/// Parses any decimal the float parser accepts (`"0.4567"`, `"12"`, `".5"`)
/// and rounds it to two places.
impl FromStr for FixedAmount {
    type Err = ParseFixedAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseFixedAmountError::InvalidFormat)?;
        Self::try_from_float(value)
    }
}

impl fmt::Display for FixedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.hundredths < 0 { "-" } else { "" };
        let abs = self.hundredths.unsigned_abs();
        let per_unit = HUNDREDTHS_PER_UNIT as u128;

        write!(f, "{}{}.{:02}", sign, abs / per_unit, abs % per_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(FixedAmount::new_from_hundredths(50).to_string(), "0.50");
        assert_eq!(FixedAmount::new_from_hundredths(12345).to_string(), "123.45");
        assert_eq!(FixedAmount::new_from_hundredths(7).to_string(), "0.07");
        assert_eq!(FixedAmount::new_from_hundredths(0).to_string(), "0.00");
    }

    #[test]
    fn displays_negative_fractions_with_sign() {
        assert_eq!(FixedAmount::new_from_hundredths(-50).to_string(), "-0.50");
        assert_eq!(FixedAmount::new_from_hundredths(-1205).to_string(), "-12.05");
    }

    #[test]
    fn rounds_floats_to_nearest_hundredth() {
        let hundredths = |v: f64| FixedAmount::try_from_float(v).unwrap().as_hundredths();
        assert_eq!(hundredths(0.5), 50);
        assert_eq!(hundredths(0.4449), 44);
        assert_eq!(hundredths(1.006), 101);
        assert_eq!(hundredths(-0.456), -46);
    }

    #[test]
    fn rejects_non_finite_floats() {
        assert_eq!(
            FixedAmount::try_from_float(f64::NAN),
            Err(ParseFixedAmountError::NotFinite)
        );
        assert_eq!(
            FixedAmount::try_from_float(f64::NEG_INFINITY),
            Err(ParseFixedAmountError::NotFinite)
        );
    }

    #[test]
    fn large_values_are_kept_exactly() {
        let rate: FixedAmount = "1e18".parse().unwrap();
        assert_eq!(rate.to_string(), "1000000000000000000.00");
        assert_eq!(rate.as_hundredths(), 100_000_000_000_000_000_000);
    }

    #[test]
    fn values_beyond_the_store_are_rejected() {
        assert_eq!(
            "1e40".parse::<FixedAmount>(),
            Err(ParseFixedAmountError::OutOfRange)
        );
        assert_eq!(
            FixedAmount::try_from_float(-1e40),
            Err(ParseFixedAmountError::OutOfRange)
        );
    }

    #[test]
    fn parses_provider_rate_strings() {
        let rate: FixedAmount = "0.0286914".parse().unwrap();
        assert_eq!(rate.to_string(), "0.03");

        let rate: FixedAmount = " 33.87 ".parse().unwrap();
        assert_eq!(rate.to_string(), "33.87");

        let rate: FixedAmount = "12".parse().unwrap();
        assert_eq!(rate.to_string(), "12.00");
    }

    #[test]
    fn rejects_garbage_and_non_finite() {
        assert_eq!(
            "abc".parse::<FixedAmount>(),
            Err(ParseFixedAmountError::InvalidFormat)
        );
        assert_eq!(
            "1.2.3".parse::<FixedAmount>(),
            Err(ParseFixedAmountError::InvalidFormat)
        );
        assert_eq!(
            "inf".parse::<FixedAmount>(),
            Err(ParseFixedAmountError::NotFinite)
        );
    }

    #[test]
    fn scaling_rounds_product() {
        let rate = FixedAmount::new_from_hundredths(50);
        let scaled = |factor: f64| rate.checked_scaled(factor).unwrap().to_string();
        assert_eq!(scaled(3.0), "1.50");
        assert_eq!(scaled(0.333), "0.17");
        assert_eq!(scaled(0.0), "0.00");
    }

    #[test]
    fn scaling_past_the_store_is_none() {
        let rate = FixedAmount::new_from_hundredths(100);
        assert_eq!(rate.checked_scaled(1e300), None);
        assert_eq!(rate.checked_scaled(f64::INFINITY), None);
    }
}
