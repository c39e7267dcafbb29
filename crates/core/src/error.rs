//! Conversion error types.

use converto_shared::AppError;
use thiserror::Error;

use crate::currency::CurrencyCode;

/// Errors raised while building or reading a [`RateTable`](crate::RateTable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateTableError {
    /// Currency code is not a key of the table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    /// Table has no entries.
    #[error("Rate table must contain at least one currency")]
    Empty,

    /// Rate is zero, negative or not finite.
    #[error("Rate for {currency} must be a positive finite number, got {rate}")]
    NonPositiveRate {
        /// Offending currency.
        currency: CurrencyCode,
        /// Offending rate.
        rate: f64,
    },

    /// Rate is positive but too small or too large to convert with.
    #[error(
        "Rate for {currency} must be between {min} and {max}, got {rate}",
        min = crate::currency::MIN_RATE,
        max = crate::currency::MAX_RATE
    )]
    RateOutOfRange {
        /// Offending currency.
        currency: CurrencyCode,
        /// Offending rate.
        rate: f64,
    },

    /// Same code listed twice.
    #[error("Duplicate currency: {0}")]
    DuplicateCurrency(CurrencyCode),
}

/// Errors raised by [`ConversionService`](crate::ConversionService).
///
/// A division by zero is not an error; see [`Calculation::Infinity`](crate::Calculation::Infinity).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Source or target currency is not in the rate table.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(CurrencyCode),

    /// Base currency for a rate listing is not in the rate table.
    #[error("Invalid base currency: {0}")]
    InvalidBaseCurrency(CurrencyCode),

    /// No temperature conversion rule for this unit pair.
    #[error("Invalid conversion units")]
    InvalidUnitPair {
        /// Requested source unit.
        from: String,
        /// Requested target unit.
        to: String,
    },

    /// Unsupported arithmetic operation.
    #[error("Invalid operation")]
    InvalidOperation(String),

    /// Input is NaN or infinite, or the result overflows a float.
    #[error("Value out of supported numeric range")]
    OutOfRange,
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        Self::Validation(err.to_string())
    }
}
