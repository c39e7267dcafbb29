//! Decimal bridging and rounding.
//!
//! Values cross the API as `f64` but every computation runs on `Decimal`.
//! Both directions go through the shortest decimal string of the value, so
//! `0.92` becomes exactly `0.92` and `163.043` comes back as the literal `163.043`.
//!
//! Finite values beyond the decimal range (about 7.9e28) are computed in
//! floating point instead. At that magnitude a float has no fractional digits
//! left, so rounding to a few decimal places leaves the value unchanged.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ConversionError;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Converts a float into a decimal.
///
/// Fails for non-finite values and for magnitudes the decimal cannot hold.
pub fn to_decimal(value: f64) -> Result<Decimal, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::OutOfRange);
    }
    Decimal::from_str(&value.to_string()).map_err(|_| ConversionError::OutOfRange)
}

/// Converts a decimal back into the nearest float.
pub fn to_f64(value: Decimal) -> Result<f64, ConversionError> {
    f64::from_str(&value.to_string()).map_err(|_| ConversionError::OutOfRange)
}

/// Rounds with banker's rounding (round half to even).
#[must_use]
pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rejects NaN and infinities.
pub fn finite(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::OutOfRange)
    }
}

/// Banker's rounding on a float, for values outside the decimal range.
#[must_use]
#[allow(clippy::float_arithmetic)]
pub fn round_f64(value: f64, decimal_places: u32) -> f64 {
    let scale = f64::from(10u32.saturating_pow(decimal_places));
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    scaled.round_ties_even() / scale
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_decimal_is_shortest_repr() {
        assert_eq!(to_decimal(0.92).unwrap(), dec!(0.92));
        assert_eq!(to_decimal(150.0).unwrap(), dec!(150));
        assert_eq!(to_decimal(-12.5).unwrap(), dec!(-12.5));
    }

    #[test]
    fn test_non_finite_is_out_of_range() {
        assert_eq!(to_decimal(f64::NAN), Err(ConversionError::OutOfRange));
        assert_eq!(to_decimal(f64::INFINITY), Err(ConversionError::OutOfRange));
        assert_eq!(to_decimal(1e30), Err(ConversionError::OutOfRange));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(dec!(92.00)).unwrap(), 92.0);
        assert_eq!(to_f64(dec!(163.043)).unwrap(), 163.043);
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite(1e300), Ok(1e300));
        assert_eq!(finite(f64::NEG_INFINITY), Err(ConversionError::OutOfRange));
    }

    #[test]
    fn test_round_f64() {
        assert_eq!(round_f64(1.5e29, 2), 1.5e29);
        assert_eq!(round_f64(-9.2e29, 2), -9.2e29);
        assert_eq!(round_f64(0.125, 2), 0.12);
        assert_eq!(round_f64(1e-30, 2), 0.0);
    }

    #[test]
    fn test_bankers_rounding() {
        assert_eq!(round(dec!(2.5), 0), dec!(2));
        assert_eq!(round(dec!(3.5), 0), dec!(4));
        assert_eq!(round(dec!(2.345), 2), dec!(2.34));
        assert_eq!(round(dec!(163.04347826), 3), dec!(163.043));
    }
}
