//! Router construction for the violation lookup server.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::pipeline::ViolationLookup;
use crate::place_search::PlaceSearchClient;

/// Build the axum router. Place search is optional; without it `/api/search`
/// answers with a configuration error.
pub fn build_router(
    lookup: Arc<ViolationLookup>,
    places: Option<Arc<PlaceSearchClient>>,
) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/violation", get(handlers::get_violations))
        .route("/api/search", get(handlers::search_places))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(Extension(lookup))
                .layer(Extension(places)),
        )
}
