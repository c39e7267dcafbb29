//! Temperature conversion rules.

use rust_decimal::Decimal;

/// Supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    /// Degrees Celsius, symbol `C`.
    Celsius,
    /// Degrees Fahrenheit, symbol `F`.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Parses a unit symbol. Only the exact symbols `C` and `F` are recognized.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "C" => Some(Self::Celsius),
            "F" => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}

/// A conversion rule between two distinct scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureConversion {
    /// `F = C * 9 / 5 + 32`
    CelsiusToFahrenheit,
    /// `C = (F - 32) * 5 / 9`
    FahrenheitToCelsius,
}

impl TemperatureConversion {
    /// Finds the rule for a unit pair. Same-unit pairs have no rule.
    #[must_use]
    pub const fn between(from: TemperatureUnit, to: TemperatureUnit) -> Option<Self> {
        match (from, to) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
                Some(Self::CelsiusToFahrenheit)
            }
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                Some(Self::FahrenheitToCelsius)
            }
            (TemperatureUnit::Celsius, TemperatureUnit::Celsius)
            | (TemperatureUnit::Fahrenheit, TemperatureUnit::Fahrenheit) => None,
        }
    }

    /// Applies the rule. Returns `None` if the result overflows a decimal.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Option<Decimal> {
        let nine = Decimal::from(9);
        let five = Decimal::from(5);
        let thirty_two = Decimal::from(32);

        match self {
            Self::CelsiusToFahrenheit => value
                .checked_mul(nine)?
                .checked_div(five)?
                .checked_add(thirty_two),
            Self::FahrenheitToCelsius => value
                .checked_sub(thirty_two)?
                .checked_mul(five)?
                .checked_div(nine),
        }
    }

    /// Applies the rule in floating point, for values a decimal cannot hold.
    #[must_use]
    #[allow(clippy::float_arithmetic)]
    pub fn apply_f64(self, value: f64) -> f64 {
        match self {
            Self::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
        }
    }
}
