//! Core conversion logic for Converto.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Rate lookups, rounding rules and unit/arithmetic dispatch live here.
//!
//! # Modules
//!
//! - `currency` - Currency codes, the rate table and derived rates
//! - `temperature` - Celsius/Fahrenheit conversion rules
//! - `calculator` - Integer arithmetic with the divide-by-zero sentinel
//! - `service` - `ConversionService`, the facade both protocol adapters call

pub mod calculator;
pub mod currency;
pub mod error;
pub mod numeric;
pub mod service;
pub mod temperature;

#[cfg(test)]
mod service_props;

pub use calculator::{Calculation, Operation};
pub use currency::{CurrencyCode, Rate, RateTable};
pub use error::{ConversionError, RateTableError};
pub use service::ConversionService;
pub use temperature::TemperatureUnit;
