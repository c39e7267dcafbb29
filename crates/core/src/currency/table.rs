//! Immutable exchange rate table.

use converto_shared::AppConfig;

use crate::error::RateTableError;

use super::CurrencyCode;

/// Rates the service ships with, relative to an implicit anchor where `USD = 1.0`.
pub const SEED_RATES: [(&str, f64); 4] =
    [("USD", 1.0), ("EUR", 0.92), ("GBP", 0.78), ("JPY", 150.0)];

/// Smallest accepted rate.
pub const MIN_RATE: f64 = 1e-6;

/// Largest accepted rate.
///
/// Together with [`MIN_RATE`] this keeps every cross rate within 1e15 of
/// one, well inside what a decimal can divide without losing digits.
pub const MAX_RATE: f64 = 1e9;

/// Mapping from currency code to "units of this currency per unit of the anchor".
///
/// Built once and read-only afterwards. Enumeration follows insertion order.
/// Every rate is finite and strictly positive, so dividing by any entry is safe.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    entries: Vec<(CurrencyCode, f64)>,
}

impl RateTable {
    /// Builds a table, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, a rate is not a positive finite
    /// number or lies outside [`MIN_RATE`, `MAX_RATE`], or a code appears twice.
    pub fn new<I, C>(entries: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = (C, f64)>,
        C: Into<CurrencyCode>,
    {
        let mut table = Vec::new();
        for (currency, rate) in entries {
            let currency = currency.into();
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RateTableError::NonPositiveRate { currency, rate });
            }
            if !(MIN_RATE..=MAX_RATE).contains(&rate) {
                return Err(RateTableError::RateOutOfRange { currency, rate });
            }
            if table.iter().any(|(existing, _)| existing == &currency) {
                return Err(RateTableError::DuplicateCurrency(currency));
            }
            table.push((currency, rate));
        }

        if table.is_empty() {
            return Err(RateTableError::Empty);
        }

        Ok(Self { entries: table })
    }

    /// Builds the table configured under `[[rates]]`, or the seed table when
    /// none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured table fails validation.
    pub fn from_config(config: &AppConfig) -> Result<Self, RateTableError> {
        match &config.rates {
            Some(entries) => Self::new(
                entries
                    .iter()
                    .map(|entry| (entry.currency.as_str(), entry.rate)),
            ),
            None => Ok(Self::default()),
        }
    }

    /// Looks up the rate for `code`.
    pub fn lookup(&self, code: &str) -> Result<f64, RateTableError> {
        self.entries
            .iter()
            .find(|(currency, _)| currency == code)
            .map(|(_, rate)| *rate)
            .ok_or_else(|| RateTableError::UnknownCurrency(code.into()))
    }

    /// Iterates entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.entries.iter().map(|(currency, rate)| (currency, *rate))
    }

    /// Iterates currency codes in table order.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.entries.iter().map(|(currency, _)| currency)
    }

    /// Number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            entries: SEED_RATES
                .iter()
                .map(|(code, rate)| (CurrencyCode::from(*code), *rate))
                .collect(),
        }
    }
}
