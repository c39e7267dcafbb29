//! Arithmetic route.

use axum::{Json, Router, extract::State, routing::post};
use axum_extra::extract::WithRejection;
use converto_core::Calculation;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use tracing::{debug, warn};

use crate::{AppState, error::ApiError};

/// Creates the calculator routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// Request body for an arithmetic operation.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// One of `add`, `subtract`, `multiply`, `divide`.
    pub operation: String,
    /// Left operand; numeric strings are accepted.
    #[serde(rename = "intA")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub int_a: i64,
    /// Right operand; numeric strings are accepted.
    #[serde(rename = "intB")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub int_b: i64,
}

/// Response for an arithmetic operation.
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// Operation that was applied.
    pub operation: String,
    /// Left operand.
    #[serde(rename = "intA")]
    pub int_a: i64,
    /// Right operand.
    #[serde(rename = "intB")]
    pub int_b: i64,
    /// Integer, quotient, or the string `"Infinity"` for a division by zero.
    pub result: Calculation,
}

/// POST `/calculate` - Apply an arithmetic operation to two integers.
async fn calculate(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CalculateRequest>, ApiError>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let result = state
        .service
        .calculate(&payload.operation, payload.int_a, payload.int_b)
        .inspect_err(|e| {
            warn!(error = %e, operation = %payload.operation, "Calculation rejected");
        })?;

    if result.is_infinity() {
        debug!(int_a = payload.int_a, "Division by zero answered with Infinity");
    }

    Ok(Json(CalculateResponse {
        operation: payload.operation,
        int_a: payload.int_a,
        int_b: payload.int_b,
        result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_accept_numbers_and_strings() {
        let request: CalculateRequest =
            serde_json::from_str(r#"{"operation":"add","intA":4,"intB":"-2"}"#).unwrap();
        assert_eq!(request.int_a, 4);
        assert_eq!(request.int_b, -2);
    }

    #[test]
    fn test_fractional_operand_is_rejected() {
        let result =
            serde_json::from_str::<CalculateRequest>(r#"{"operation":"add","intA":1.5,"intB":2}"#);
        assert!(result.is_err());
    }
}
