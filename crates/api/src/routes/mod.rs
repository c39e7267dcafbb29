//! JSON route definitions.

use axum::Router;

use crate::AppState;

pub mod calculator;
pub mod currency;
pub mod health;
pub mod temperature;

/// Creates the JSON router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currency::routes())
        .merge(temperature::routes())
        .merge(calculator::routes())
}
