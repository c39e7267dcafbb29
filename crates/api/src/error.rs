//! Mapping of application errors onto HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use converto_core::ConversionError;
use converto_shared::AppError;
use serde_json::json;
use tracing::warn;

/// Error returned by JSON handlers.
///
/// Renders as `{"error": "<message>"}` with the status of the wrapped
/// [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Rejected {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        })
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Rejected {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Rejected { .. } = &self.0 {
            warn!(
                code = self.0.error_code(),
                status = status.as_u16(),
                error = %self.0,
                "Request rejected"
            );
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
