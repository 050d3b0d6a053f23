//! Violation retrieval from the disciplinary-action registry (service I2630)

use crate::error::LookupError;
use crate::registry::types::lenient_string;
use crate::registry::{FoodSafetyClient, RegistryOutcome, ServiceCode};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Registry field holding the license number
pub const LICENSE_NUMBER_FIELD: &str = "LCNS_NO";

/// One administrative sanction recorded against a license.
///
/// Serialized with the registry's own field names so callers of the HTTP
/// front see the same row shape the registry publishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    #[serde(rename = "CHNG_DT", default, deserialize_with = "lenient_string")]
    pub changed_date: String,
    #[serde(rename = "DSPS_DCSNDT", default, deserialize_with = "lenient_string")]
    pub decision_date: String,
    #[serde(rename = "BSSH_NM", default, deserialize_with = "lenient_string")]
    pub business_name: String,
    #[serde(rename = "ADDR", default, deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(rename = "DSPS_CN", default, deserialize_with = "lenient_string")]
    pub disposition_content: String,
    #[serde(rename = "VIOL_CN", default, deserialize_with = "lenient_string")]
    pub violation_content: String,
    #[serde(rename = "DSPS_BASIS", default, deserialize_with = "lenient_string")]
    pub legal_basis: String,
}

impl ViolationRecord {
    /// Decision date as a calendar date (`YYYYMMDD` or `YYYY-MM-DD`)
    pub fn decided_on(&self) -> Option<NaiveDate> {
        let raw = self.decision_date.trim();
        NaiveDate::parse_from_str(raw, "%Y%m%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }
}

/// Stage seam: license number in, violations out.
///
/// Implementations return an empty list when nothing is on file, including
/// when the registry reports an error code.
#[async_trait]
pub trait ViolationSource: Send + Sync {
    async fn fetch_violations(&self, license_number: &str)
        -> Result<Vec<ViolationRecord>, LookupError>;
}

/// Fetches violations through the food-safety disciplinary registry
pub struct ViolationRetriever {
    client: Arc<FoodSafetyClient>,
}

impl ViolationRetriever {
    pub fn new(client: Arc<FoodSafetyClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ViolationSource for ViolationRetriever {
    async fn fetch_violations(
        &self,
        license_number: &str,
    ) -> Result<Vec<ViolationRecord>, LookupError> {
        let page_size = self.client.config().violation_page_size;
        let outcome: RegistryOutcome<ViolationRecord> = self
            .client
            .query(
                ServiceCode::AdministrativeAction,
                page_size,
                LICENSE_NUMBER_FIELD,
                license_number,
            )
            .await?;

        if let RegistryOutcome::UpstreamError { ref code, ref message } = outcome {
            tracing::warn!(
                license_number,
                code = %code,
                "Disciplinary registry error treated as no violations: {}",
                message
            );
        }

        let rows = outcome.into_rows();
        tracing::info!(license_number, violations = rows.len(), "Fetched violations");
        Ok(rows)
    }
}
