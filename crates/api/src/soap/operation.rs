//! Typed SOAP operations.

use converto_core::{ConversionService, Rate};

use super::envelope::SoapRequest;
use super::fault::Fault;

/// A validated call to one of the exposed operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapOperation {
    /// `convert_currency(from_currency, to_currency, amount) -> double`
    ConvertCurrency {
        /// Source currency code.
        from_currency: String,
        /// Target currency code.
        to_currency: String,
        /// Amount in the source currency.
        amount: f64,
    },
    /// `get_rates(base_currency) -> Rate[]`
    GetRates {
        /// Base currency code.
        base_currency: String,
    },
}

/// Output of a successful operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapResult {
    /// Converted amount.
    ConvertCurrency(f64),
    /// Rates in table order.
    GetRates(Vec<Rate>),
}

impl SoapResult {
    /// Name of the operation that produced this result.
    #[must_use]
    pub const fn operation_name(&self) -> &'static str {
        match self {
            Self::ConvertCurrency(_) => SoapOperation::CONVERT_CURRENCY,
            Self::GetRates(_) => SoapOperation::GET_RATES,
        }
    }
}

impl SoapOperation {
    /// Wire name of the conversion operation.
    pub const CONVERT_CURRENCY: &'static str = "convert_currency";
    /// Wire name of the rate listing operation.
    pub const GET_RATES: &'static str = "get_rates";

    /// Wire name of this operation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ConvertCurrency { .. } => Self::CONVERT_CURRENCY,
            Self::GetRates { .. } => Self::GET_RATES,
        }
    }

    /// Validates a parsed request against the operation signatures.
    pub fn from_request(request: &SoapRequest) -> Result<Self, Fault> {
        match request.operation.as_str() {
            Self::CONVERT_CURRENCY => {
                let amount_text = required(request, "amount")?;
                let amount = amount_text.trim().parse::<f64>().map_err(|_| {
                    Fault::client(format!(
                        "Invalid value for amount: '{amount_text}' is not an xs:double"
                    ))
                })?;

                Ok(Self::ConvertCurrency {
                    from_currency: required(request, "from_currency")?.to_string(),
                    to_currency: required(request, "to_currency")?.to_string(),
                    amount,
                })
            }
            Self::GET_RATES => Ok(Self::GetRates {
                base_currency: required(request, "base_currency")?.to_string(),
            }),
            other => Err(Fault::client(format!("Unknown operation: {other}"))),
        }
    }

    /// Runs the operation against the service.
    pub fn invoke(&self, service: &ConversionService) -> Result<SoapResult, Fault> {
        match self {
            Self::ConvertCurrency {
                from_currency,
                to_currency,
                amount,
            } => service
                .convert_currency(from_currency, to_currency, *amount)
                .map(SoapResult::ConvertCurrency)
                .map_err(Fault::from),
            Self::GetRates { base_currency } => service
                .get_rates(base_currency)
                .map(SoapResult::GetRates)
                .map_err(Fault::from),
        }
    }
}

fn required<'a>(request: &'a SoapRequest, name: &str) -> Result<&'a str, Fault> {
    request
        .param(name)
        .ok_or_else(|| Fault::client(format!("Missing parameter: {name}")))
}
