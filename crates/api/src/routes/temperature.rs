//! Temperature conversion route.

use axum::{Json, Router, extract::State, routing::post};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use tracing::warn;

use crate::{AppState, error::ApiError};

/// Creates the temperature routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert_temp", post(convert_temperature))
}

/// Request body for a temperature conversion.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ConvertTemperatureRequest {
    /// Source unit symbol (`C` or `F`).
    pub from_unit: String,
    /// Target unit symbol (`C` or `F`).
    pub to_unit: String,
    /// Temperature in the source unit; numeric strings are accepted.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub value: f64,
}

/// Response for a temperature conversion.
#[derive(Debug, Serialize)]
pub struct ConvertTemperatureResponse {
    /// Source unit symbol.
    pub from_unit: String,
    /// Target unit symbol.
    pub to_unit: String,
    /// Temperature in the source unit.
    pub value: f64,
    /// Temperature in the target unit, rounded to 2 decimal places.
    pub result: f64,
}

/// POST `/convert_temp` - Convert between Celsius and Fahrenheit.
async fn convert_temperature(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ConvertTemperatureRequest>, ApiError>,
) -> Result<Json<ConvertTemperatureResponse>, ApiError> {
    let result = state
        .service
        .convert_temperature(&payload.from_unit, &payload.to_unit, payload.value)
        .inspect_err(|e| {
            warn!(
                error = %e,
                from_unit = %payload.from_unit,
                to_unit = %payload.to_unit,
                "Temperature conversion rejected"
            );
        })?;

    Ok(Json(ConvertTemperatureResponse {
        from_unit: payload.from_unit,
        to_unit: payload.to_unit,
        value: payload.value,
        result,
    }))
}
