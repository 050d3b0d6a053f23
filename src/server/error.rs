//! Mapping of lookup errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::LookupError;

/// Error payload is `{ "error": "<message>" }` with the status from
/// [`LookupError::http_status`].
#[derive(Debug)]
pub struct AppError(pub LookupError);

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Lookup request failed");
        }
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}
