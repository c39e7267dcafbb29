//! Property-based tests for the conversion service.
//!
//! - Identity conversion, including amounts beyond the decimal range
//! - Round-trip conversion within the rounding bound
//! - Base currency always lists at 1.0
//! - Division by zero always yields the sentinel

#![allow(clippy::float_arithmetic, clippy::float_cmp)]

use proptest::prelude::*;

use crate::calculator::Calculation;
use crate::currency::SEED_RATES;
use crate::service::ConversionService;

/// Strategy to pick any seeded currency code.
fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SEED_RATES.iter().map(|(code, _)| *code).collect::<Vec<_>>())
}

/// Strategy to generate amounts with at most 2 decimals (-1,000,000.00 to 1,000,000.00).
fn cent_amount() -> impl Strategy<Value = f64> {
    (-100_000_000i32..100_000_000i32).prop_map(|cents| f64::from(cents) / 100.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting a currency into itself returns the amount unchanged.
    #[test]
    fn prop_identity_conversion(code in currency(), amount in cent_amount()) {
        let service = ConversionService::default();
        let result = service.convert_currency(code, code, amount).unwrap();
        prop_assert_eq!(result, amount);
    }

    /// Identity also holds for amounts far beyond the decimal range.
    #[test]
    fn prop_identity_conversion_large(
        code in currency(),
        amount in 1e29f64..1e300f64,
        negative in any::<bool>(),
    ) {
        let service = ConversionService::default();
        let amount = if negative { -amount } else { amount };
        prop_assert_eq!(service.convert_currency(code, code, amount).unwrap(), amount);
    }

    /// `convert(A, B, amt) * convert(B, A, 1)` lands within the error that the
    /// two 2-decimal roundings can introduce.
    #[test]
    fn prop_round_trip_within_rounding(
        from in currency(),
        to in currency(),
        amount in cent_amount(),
    ) {
        let service = ConversionService::default();
        let ratio = service.rates().lookup(to).unwrap() / service.rates().lookup(from).unwrap();

        let forward = service.convert_currency(from, to, amount).unwrap();
        let back_unit = service.convert_currency(to, from, 1.0).unwrap();

        let bound = (amount * ratio).abs() * 0.005 + 0.005 / ratio + 0.000_025 + 1e-6;
        prop_assert!(
            (forward * back_unit - amount).abs() <= bound,
            "{} {} -> {} {}, back unit {}, bound {}",
            amount, from, forward, to, back_unit, bound
        );
    }

    /// The base currency is always listed at exactly 1.0.
    #[test]
    fn prop_base_lists_at_one(base in currency()) {
        let service = ConversionService::default();
        let rates = service.get_rates(base).unwrap();
        prop_assert_eq!(rates.len(), SEED_RATES.len());
        let own = rates.iter().find(|r| r.currency.as_str() == base).map(|r| r.rate);
        prop_assert_eq!(own, Some(1.0));
    }

    /// Dividing by zero never fails.
    #[test]
    fn prop_divide_by_zero_is_sentinel(n in any::<i64>()) {
        let service = ConversionService::default();
        prop_assert_eq!(service.calculate("divide", n, 0).unwrap(), Calculation::Infinity);
    }

    /// Add and subtract undo each other.
    #[test]
    fn prop_add_subtract_inverse(a in any::<i64>(), b in any::<i64>()) {
        let service = ConversionService::default();
        let sum = service.calculate("add", a, b).unwrap();
        let diff = service.calculate("subtract", a, b).unwrap();
        match (sum, diff) {
            (Calculation::Integer(sum), Calculation::Integer(diff)) => {
                prop_assert_eq!(sum + diff, 2 * i128::from(a));
            }
            other => prop_assert!(false, "unexpected results {:?}", other),
        }
    }

    /// C -> F -> C comes back within the two 2-decimal roundings.
    #[test]
    fn prop_temperature_round_trip(tenths in -100_000i32..100_000i32) {
        let service = ConversionService::default();
        let value = f64::from(tenths) / 10.0;
        let fahrenheit = service.convert_temperature("C", "F", value).unwrap();
        let back = service.convert_temperature("F", "C", fahrenheit).unwrap();
        prop_assert!((back - value).abs() <= 0.01, "{} -> {} -> {}", value, fahrenheit, back);
    }
}
