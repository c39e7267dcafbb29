//! Converto API Server
//!
//! Serves the JSON API at `/` and the SOAP service at `/soap` on one port.

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use converto_api::{AppState, create_router};
use converto_core::{ConversionService, CurrencyCode, RateTable};
use converto_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(config.server.log_json);

    // Build the rate table once; it is read-only from here on
    let rates = RateTable::from_config(&config).context("Invalid rate table in configuration")?;
    info!(
        count = rates.len(),
        currencies = ?rates.codes().map(CurrencyCode::as_str).collect::<Vec<_>>(),
        configured = config.rates.is_some(),
        "Rate table loaded"
    );

    let state = AppState::new(ConversionService::new(rates));
    let app = create_router(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);
    info!("SOAP WSDL at http://{}/soap?wsdl", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "converto=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
