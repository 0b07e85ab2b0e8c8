//! Converts a user-entered amount through a rate.
//!
//! Conversion never fails. Input that does not parse degrades to a default
//! instead, so a half-typed amount still renders a list.

use crate::fixed_amount::FixedAmount;

/// The amount used when the input is empty or not a number.
pub const DEFAULT_AMOUNT: f64 = 1.0;

/// Parses a user-entered amount, falling back to [`DEFAULT_AMOUNT`].
///
/// Empty, non-numeric and non-finite input all yield the default. `"0"` is a
/// number and yields zero.
pub fn parse_amount_or_default(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => DEFAULT_AMOUNT,
    }
}

/// Renders `rate` scaled by the parsed `amount` with two decimals.
///
/// Products too large for a [`FixedAmount`] are formatted from the float
/// product instead of being clamped.
pub fn convert_rate(rate: FixedAmount, amount: &str) -> String {
    let factor = parse_amount_or_default(amount);
    match rate.checked_scaled(factor) {
        Some(product) => product.to_string(),
        None => format!("{:.2}", rate.to_f64() * factor),
    }
}

/// String form of [`convert_rate`]: `rate * amount`, always with two decimals.
///
/// A `rate` that does not parse counts as zero.
pub fn convert(rate: &str, amount: &str) -> String {
    let rate = rate.parse::<FixedAmount>().unwrap_or_default();
    convert_rate(rate, amount)
}
