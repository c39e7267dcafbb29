//! Conversion service shared by the HTTP and SOAP adapters.
//!
//! The service owns the rate table it was constructed with; there is no
//! global state. Every method is a pure function of the table and its inputs.

use crate::calculator::{Calculation, Operation};
use crate::currency::{Rate, RateTable};
use crate::error::ConversionError;
use crate::numeric::{finite, round, round_f64, to_decimal, to_f64};
use crate::temperature::{TemperatureConversion, TemperatureUnit};

/// Decimal places kept in converted amounts and temperatures.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept in listed rates.
pub const RATE_DECIMAL_PLACES: u32 = 3;

/// Currency, temperature and arithmetic operations over one rate table.
#[derive(Debug, Clone, Default)]
pub struct ConversionService {
    rates: RateTable,
}

impl ConversionService {
    /// Creates a service over the given table.
    #[must_use]
    pub const fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Returns the rate table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Converts `amount` of `from` into `to`, rounded to 2 decimal places.
    ///
    /// `result = amount * table[to] / table[from]`.
    ///
    /// # Example
    ///
    /// ```
    /// use converto_core::ConversionService;
    ///
    /// let service = ConversionService::default();
    /// let euros = service.convert_currency("USD", "EUR", 100.0).unwrap();
    /// assert!((euros - 92.0).abs() < f64::EPSILON);
    /// ```
    pub fn convert_currency(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<f64, ConversionError> {
        let from_rate = self
            .rates
            .lookup(from)
            .map_err(|_| ConversionError::InvalidCurrency(from.into()))?;
        let to_rate = self
            .rates
            .lookup(to)
            .map_err(|_| ConversionError::InvalidCurrency(to.into()))?;

        let amount = finite(amount)?;
        let ratio = to_decimal(to_rate)?
            .checked_div(to_decimal(from_rate)?)
            .ok_or(ConversionError::OutOfRange)?;
        let exact = to_decimal(amount)
            .ok()
            .and_then(|amount| amount.checked_mul(ratio));

        match exact {
            Some(converted) => to_f64(round(converted, AMOUNT_DECIMAL_PLACES)),
            None => {
                let converted = finite(scale(amount, to_rate, from_rate))?;
                Ok(round_f64(converted, AMOUNT_DECIMAL_PLACES))
            }
        }
    }

    /// Lists every currency in table order, expressed relative to `base`.
    ///
    /// The entry for `base` itself is always `1.0`.
    pub fn get_rates(&self, base: &str) -> Result<Vec<Rate>, ConversionError> {
        let base_rate = self
            .rates
            .lookup(base)
            .map_err(|_| ConversionError::InvalidBaseCurrency(base.into()))?;
        let base_rate = to_decimal(base_rate)?;

        self.rates
            .iter()
            .map(|(currency, rate)| {
                let relative = to_decimal(rate)?
                    .checked_div(base_rate)
                    .ok_or(ConversionError::OutOfRange)?;
                Ok(Rate::new(
                    currency.clone(),
                    to_f64(round(relative, RATE_DECIMAL_PLACES))?,
                ))
            })
            .collect()
    }

    /// Converts a temperature between `C` and `F`, rounded to 2 decimal places.
    ///
    /// Any other pair, including a unit to itself, has no rule and fails.
    #[allow(clippy::unused_self)]
    pub fn convert_temperature(
        &self,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<f64, ConversionError> {
        let rule = TemperatureUnit::from_symbol(from)
            .zip(TemperatureUnit::from_symbol(to))
            .and_then(|(from_unit, to_unit)| TemperatureConversion::between(from_unit, to_unit))
            .ok_or_else(|| ConversionError::InvalidUnitPair {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        let value = finite(value)?;
        match to_decimal(value).ok().and_then(|value| rule.apply(value)) {
            Some(converted) => to_f64(round(converted, AMOUNT_DECIMAL_PLACES)),
            None => {
                let converted = finite(rule.apply_f64(value))?;
                Ok(round_f64(converted, AMOUNT_DECIMAL_PLACES))
            }
        }
    }

    /// Applies `operation` to two integers.
    ///
    /// Division by zero returns [`Calculation::Infinity`] instead of failing.
    #[allow(clippy::unused_self)]
    pub fn calculate(
        &self,
        operation: &str,
        a: i64,
        b: i64,
    ) -> Result<Calculation, ConversionError> {
        operation.parse::<Operation>()?.apply(a, b)
    }
}

/// `amount * to_rate / from_rate` in floating point.
#[allow(clippy::float_arithmetic)]
fn scale(amount: f64, to_rate: f64, from_rate: f64) -> f64 {
    amount * (to_rate / from_rate)
}
