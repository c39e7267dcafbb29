//! Currency codes, the rate table and derived rates.

pub mod code;
pub mod rate;
pub mod table;

pub use code::CurrencyCode;
pub use rate::Rate;
pub use table::{MAX_RATE, MIN_RATE, RateTable, SEED_RATES};
