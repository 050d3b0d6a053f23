//! violation_server — HTTP front for the food violation lookup.
//!
//! Reads config from env vars (a `.env` file is honoured):
//!   FOOD_SAFETY_API_KEY         — food-safety open API key (required)
//!   FOOD_SAFETY_API_BASE_URL    — registry base URL (optional)
//!   FOOD_SAFETY_TIMEOUT_SECS    — per-call timeout (default: 5)
//!   NAVER_CLIENT_ID / NAVER_CLIENT_SECRET — place search (optional)
//!   VIOLATION_SERVER_BIND_ADDR  — listen address (default: 0.0.0.0:3000)

use std::sync::Arc;

use anyhow::{Context, Result};
use food_violation_lookup::server::build_router;
use food_violation_lookup::{PlaceSearchClient, PlaceSearchConfig, RegistryConfig, ViolationLookup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,food_violation_lookup=debug".into()),
        )
        .init();

    let config = match RegistryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Refusing to start: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!(?config, "Registry configured");
    let lookup = Arc::new(ViolationLookup::from_config(config)?);

    let places = match PlaceSearchConfig::from_env() {
        Ok(config) => Some(Arc::new(PlaceSearchClient::new(config)?)),
        Err(e) => {
            tracing::warn!("Place search disabled: {}", e);
            None
        }
    };

    let app = build_router(lookup, places);

    let bind_addr =
        std::env::var("VIOLATION_SERVER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;
    tracing::info!("violation_server listening on {bind_addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
