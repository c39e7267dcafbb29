//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - JSON routes at the root (`/convert`, `/rates`, `/convert_temp`, `/calculate`)
//! - The SOAP endpoint and its WSDL under `/soap`
//! - Error-to-response mapping

pub mod error;
pub mod routes;
pub mod soap;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use converto_core::ConversionService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion service over the startup rate table.
    pub service: Arc<ConversionService>,
}

impl AppState {
    /// Wraps a service for sharing across handlers.
    #[must_use]
    pub fn new(service: ConversionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Creates the main application router.
///
/// JSON routes are mounted at the root and SOAP under `/soap`; both share
/// the same middleware stack. Each request is cut off after `request_timeout`.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .merge(soap::routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
