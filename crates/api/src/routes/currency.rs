//! Currency conversion and rate listing routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use converto_core::Rate;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use tracing::{debug, warn};

use crate::{AppState, error::ApiError};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/convert", post(convert))
        .route("/rates", get(list_rates))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a currency conversion.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Amount in the source currency. Defaults to 1.0; numeric strings are accepted.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default = "default_amount")]
    pub amount: f64,
}

fn default_amount() -> f64 {
    1.0
}

/// Response for a currency conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Amount in the source currency.
    pub amount: f64,
    /// Converted amount, rounded to 2 decimal places.
    pub result: f64,
}

/// Query parameters for listing rates.
#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    /// Base currency, `USD` when omitted.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

/// Response for a rate listing.
#[derive(Debug, Serialize)]
pub struct RatesResponse {
    /// Base currency the rates are relative to.
    pub base_currency: String,
    /// Currency code to rate, in rate table order.
    pub rates: RateMap,
}

/// Rates serialized as a JSON object that keeps table order.
#[derive(Debug)]
pub struct RateMap(pub Vec<Rate>);

impl Serialize for RateMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for rate in &self.0 {
            map.serialize_entry(&rate.currency, &rate.rate)?;
        }
        map.end()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST `/convert` - Convert an amount between two currencies.
async fn convert(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ConvertRequest>, ApiError>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let result = state
        .service
        .convert_currency(&payload.from_currency, &payload.to_currency, payload.amount)
        .inspect_err(|e| {
            warn!(
                error = %e,
                from = %payload.from_currency,
                to = %payload.to_currency,
                "Currency conversion rejected"
            );
        })?;

    debug!(
        from = %payload.from_currency,
        to = %payload.to_currency,
        amount = payload.amount,
        result,
        "Currency converted"
    );

    Ok(Json(ConvertResponse {
        from_currency: payload.from_currency,
        to_currency: payload.to_currency,
        amount: payload.amount,
        result,
    }))
}

/// GET `/rates` - List every rate relative to `base_currency`.
async fn list_rates(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<RatesQuery>, ApiError>,
) -> Result<Json<RatesResponse>, ApiError> {
    let rates = state
        .service
        .get_rates(&query.base_currency)
        .inspect_err(|e| warn!(error = %e, base = %query.base_currency, "Rate listing rejected"))?;

    Ok(Json(RatesResponse {
        base_currency: query.base_currency,
        rates: RateMap(rates),
    }))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use converto_core::CurrencyCode;

    #[test]
    fn test_amount_defaults_to_one() {
        let request: ConvertRequest =
            serde_json::from_str(r#"{"from_currency":"USD","to_currency":"EUR"}"#).unwrap();
        assert_eq!(request.amount, 1.0);
    }

    #[test]
    fn test_amount_accepts_numeric_string() {
        let request: ConvertRequest = serde_json::from_str(
            r#"{"from_currency":"USD","to_currency":"EUR","amount":"12.5"}"#,
        )
        .unwrap();
        assert_eq!(request.amount, 12.5);
    }

    #[test]
    fn test_amount_rejects_garbage() {
        let result = serde_json::from_str::<ConvertRequest>(
            r#"{"from_currency":"USD","to_currency":"EUR","amount":"lots"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_map_keeps_order() {
        let map = RateMap(vec![
            Rate::new(CurrencyCode::from("USD"), 1.0),
            Rate::new(CurrencyCode::from("EUR"), 0.92),
            Rate::new(CurrencyCode::from("AUD"), 1.5),
        ]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"USD":1.0,"EUR":0.92,"AUD":1.5}"#
        );
    }
}
