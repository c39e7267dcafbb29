//! Rate of one currency relative to a caller-chosen base.

use serde::Serialize;

use super::CurrencyCode;

/// `currency` expressed in units of the base currency: `table[currency] / table[base]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rate {
    /// Currency code.
    pub currency: CurrencyCode,
    /// Rate rounded to 3 decimal places.
    pub rate: f64,
}

impl Rate {
    /// Creates a new rate.
    #[must_use]
    pub const fn new(currency: CurrencyCode, rate: f64) -> Self {
        Self { currency, rate }
    }
}
