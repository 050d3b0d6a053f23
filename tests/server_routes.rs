//! HTTP front routes, driven with `oneshot` against the mock registry.

#![cfg(feature = "server")]

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use food_violation_lookup::server::build_router;
use food_violation_lookup::ViolationLookup;
use helpers::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const LICENSE: &str = "I2500";
const ACTION: &str = "I2630";

fn router(registry: &MockRegistry) -> Router {
    build_router(Arc::new(registry.lookup()), None)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let registry = MockRegistry::start().await;
    let (status, _) = get(router(&registry), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_business_name_is_bad_request() {
    let registry = MockRegistry::start().await;

    let (status, body) = get(router(&registry), "/api/violation").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("businessName"));

    let (status, _) = get(router(&registry), "/api/violation?businessName=%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(registry.requests().is_empty());
}

#[tokio::test]
async fn test_not_found_renders_empty_array() {
    let registry = MockRegistry::start().await;
    registry.respond_json(LICENSE, no_data(LICENSE));

    let (status, body) = get(router(&registry), "/api/violation?businessName=Nobody").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_violations_render_registry_field_names() {
    let registry = MockRegistry::start().await;
    registry.respond_json(
        LICENSE,
        success(LICENSE, json!([license_row("L-1", "Blue Kimchi", "Seoul Gangnam-gu 1")])),
    );
    registry.respond_json(
        ACTION,
        success(
            ACTION,
            json!([
                violation_row("20240110", "Blue Kimchi", "expired ingredients"),
                violation_row("20210505", "Blue Kimchi", "unsanitary kitchen")
            ]),
        ),
    );

    let (status, body) = get(
        router(&registry),
        "/api/violation?businessName=Blue%20Kimchi&address=Seoul%20Gangnam-gu%2010",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["VIOL_CN"], "expired ingredients");
    assert_eq!(rows[1]["DSPS_DCSNDT"], "20210505");
}

#[tokio::test]
async fn test_locality_mismatch_renders_empty_array() {
    let registry = MockRegistry::start().await;
    registry.respond_json(
        LICENSE,
        success(LICENSE, json!([license_row("L-1", "Blue Kimchi", "Seoul Gangnam-gu 1")])),
    );

    let (status, body) = get(
        router(&registry),
        "/api/violation?businessName=Blue%20Kimchi&address=Seoul%20Songpa-gu%2045",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert!(registry.requests_for(ACTION).is_empty());
}

#[tokio::test]
async fn test_upstream_failure_is_service_unavailable() {
    let registry = MockRegistry::start().await;
    registry.respond(
        LICENSE,
        MockResponse::Raw {
            status: 500,
            body: "oops".into(),
        },
    );

    let (status, body) = get(router(&registry), "/api/violation?businessName=Blue").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("licensing registry unavailable"));
}

#[tokio::test]
async fn test_upstream_timeout_body_omits_api_key() {
    let registry = MockRegistry::start().await;
    registry.respond(
        LICENSE,
        MockResponse::Delayed(
            Duration::from_secs(5),
            Box::new(MockResponse::Json(no_data(LICENSE))),
        ),
    );
    let config = registry.config().with_timeout(Duration::from_millis(200));
    let router = build_router(Arc::new(ViolationLookup::from_config(config).unwrap()), None);

    let (status, body) = get(router, "/api/violation?businessName=Blue").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("licensing registry unavailable"));
    assert!(!message.contains(TEST_API_KEY), "key leaked: {}", message);
}

#[tokio::test]
async fn test_search_without_place_config_is_server_error() {
    let registry = MockRegistry::start().await;

    let (status, body) = get(router(&registry), "/api/search?query=Blue").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}
