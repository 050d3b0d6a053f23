//! Food-safety open API response types
//!
//! Every service wraps its payload in an envelope keyed by the service code:
//!
//! ```json
//! { "I2500": { "total_count": "1", "RESULT": { "CODE": "INFO-000", "MSG": "..." }, "row": [ ... ] } }
//! ```
//!
//! Authentication failures drop the service key and return a bare top-level
//! `RESULT` object instead.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Registry result code for a data-bearing success
pub const SUCCESS_CODE: &str = "INFO-000";
/// Registry result code for "no matching data"
pub const NO_DATA_CODE: &str = "INFO-200";

/// Fixed service codes of the food-safety open API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCode {
    /// Licensed establishment information
    LicenseInfo,
    /// Administrative (disciplinary) actions
    AdministrativeAction,
}

impl ServiceCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LicenseInfo => "I2500",
            Self::AdministrativeAction => "I2630",
        }
    }

    /// Human-readable registry name used in errors and logs
    pub fn registry_name(&self) -> &'static str {
        match self {
            Self::LicenseInfo => "licensing registry",
            Self::AdministrativeAction => "disciplinary registry",
        }
    }
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultStatus {
    #[serde(rename = "CODE", default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(rename = "MSG", default, deserialize_with = "lenient_string")]
    pub message: String,
}

/// Body found under the service-code key
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceBody {
    #[serde(rename = "RESULT", default)]
    pub result: Option<ResultStatus>,
    #[serde(default)]
    pub row: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_count: String,
}

/// Interpreted registry response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryOutcome<T> {
    /// Success code with at least one decoded row, in registry order
    Success(Vec<T>),
    /// Registry confirmed there is nothing to return
    EmptySuccess,
    /// Registry answered but reported an error (or an unrecognisable envelope)
    UpstreamError { code: String, message: String },
}

impl<T> RegistryOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Collapse to rows. Empty and error outcomes both become an empty list.
    pub fn into_rows(self) -> Vec<T> {
        match self {
            Self::Success(rows) => rows,
            Self::EmptySuccess | Self::UpstreamError { .. } => Vec::new(),
        }
    }
}

/// Interpret a parsed JSON response for `service`.
pub fn interpret<T: DeserializeOwned>(service: ServiceCode, body: &Value) -> RegistryOutcome<T> {
    let Some(envelope) = body.get(service.as_str()) else {
        let status = body
            .get("RESULT")
            .and_then(|r| ResultStatus::deserialize(r).ok())
            .unwrap_or_else(|| ResultStatus {
                code: "MISSING_ENVELOPE".to_string(),
                message: format!("response has no {} envelope", service),
            });
        return RegistryOutcome::UpstreamError {
            code: status.code,
            message: status.message,
        };
    };

    let envelope = match ServiceBody::deserialize(envelope) {
        Ok(envelope) => envelope,
        Err(e) => {
            return RegistryOutcome::UpstreamError {
                code: "MALFORMED_ENVELOPE".to_string(),
                message: e.to_string(),
            }
        }
    };

    let status = envelope.result.unwrap_or_default();
    match status.code.as_str() {
        SUCCESS_CODE => {
            let rows: Vec<T> = envelope
                .row
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .filter_map(|(i, row)| match serde_json::from_value(row) {
                    Ok(row) => Some(row),
                    Err(e) => {
                        tracing::warn!(service = %service, row = i, "Skipping undecodable row: {}", e);
                        None
                    }
                })
                .collect();
            if rows.is_empty() {
                RegistryOutcome::EmptySuccess
            } else {
                RegistryOutcome::Success(rows)
            }
        }
        NO_DATA_CODE => RegistryOutcome::EmptySuccess,
        _ => RegistryOutcome::UpstreamError {
            code: status.code,
            message: status.message,
        },
    }
}

/// Accept strings, numbers and null where the registry promises a string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    })
}
