//! Shared test helpers: an in-process mock of the food-safety open API.
//!
//! The mock serves `/api/{key}/{service}/json/{start}/{end}/{FIELD=value}`,
//! answers each service code with a configured response and records every
//! request it sees.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use food_violation_lookup::{RegistryConfig, ViolationLookup};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TEST_API_KEY: &str = "test-key";

/// What the mock answers for one service code
#[derive(Debug, Clone)]
pub enum MockResponse {
    Json(Value),
    Raw { status: u16, body: String },
    Delayed(Duration, Box<MockResponse>),
}

/// One request as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub api_key: String,
    pub service: String,
    pub start: String,
    pub end: String,
    pub filter: String,
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<String, MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockRegistry {
    pub base_url: String,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockRegistry {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/api/:key/:service/json/:start/:end/:filter", get(serve))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api", addr),
            state,
            handle,
        }
    }

    pub fn respond(&self, service: &str, response: MockResponse) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(service.to_string(), response);
    }

    pub fn respond_json(&self, service: &str, body: Value) {
        self.respond(service, MockResponse::Json(body));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_for(&self, service: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.service == service)
            .collect()
    }

    pub fn config(&self) -> RegistryConfig {
        RegistryConfig::new(TEST_API_KEY)
            .unwrap()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(2))
    }

    pub fn lookup(&self) -> ViolationLookup {
        ViolationLookup::from_config(self.config()).unwrap()
    }
}

impl Drop for MockRegistry {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    State(state): State<Arc<MockState>>,
    Path((api_key, service, start, end, filter)): Path<(String, String, String, String, String)>,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        api_key,
        service: service.clone(),
        start,
        end,
        filter,
    });

    let response = state
        .responses
        .lock()
        .unwrap()
        .get(&service)
        .cloned()
        .unwrap_or_else(|| MockResponse::Json(no_data(&service)));

    render(response).await
}

async fn render(mut response: MockResponse) -> Response {
    loop {
        match response {
            MockResponse::Json(body) => return Json(body).into_response(),
            MockResponse::Raw { status, body } => {
                let status = StatusCode::from_u16(status).unwrap();
                return (status, body).into_response();
            }
            MockResponse::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                response = *inner;
            }
        }
    }
}

// =============================================================================
// Envelope builders
// =============================================================================

pub fn success(service: &str, rows: Value) -> Value {
    let count = rows.as_array().map(|r| r.len()).unwrap_or(0);
    json!({
        service: {
            "total_count": count.to_string(),
            "RESULT": { "CODE": "INFO-000", "MSG": "정상처리되었습니다." },
            "row": rows
        }
    })
}

pub fn no_data(service: &str) -> Value {
    json!({
        service: {
            "total_count": "0",
            "RESULT": { "CODE": "INFO-200", "MSG": "해당하는 데이터가 없습니다." }
        }
    })
}

pub fn registry_error(service: &str, code: &str, message: &str) -> Value {
    json!({ service: { "RESULT": { "CODE": code, "MSG": message } } })
}

pub fn license_row(number: &str, name: &str, address: &str) -> Value {
    json!({
        "LCNS_NO": number,
        "BSSH_NM": name,
        "ADDR": address,
        "INDUTY_CD_NM": "일반음식점",
        "PRMS_DT": "20150301"
    })
}

pub fn violation_row(decision_date: &str, name: &str, violation: &str) -> Value {
    json!({
        "CHNG_DT": decision_date,
        "DSPS_DCSNDT": decision_date,
        "BSSH_NM": name,
        "ADDR": "서울특별시 강남구 역삼동 737",
        "DSPS_CN": "시정명령",
        "VIOL_CN": violation,
        "DSPS_BASIS": "식품위생법 제44조"
    })
}
