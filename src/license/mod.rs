//! License resolution against the licensing registry (service I2500)
//!
//! A free-text business name is matched on the registry's exact business-name
//! field. Only the first page is requested. Registry-reported failures,
//! empty results and a chosen row without a license number all resolve to
//! "no license".

pub mod select;

use crate::error::LookupError;
use crate::registry::types::lenient_string;
use crate::registry::{FoodSafetyClient, RegistryOutcome, ServiceCode};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use select::{FirstRow, LicenseSelector, LocalityOverlap};

/// Registry field holding the business name
pub const BUSINESS_NAME_FIELD: &str = "BSSH_NM";

/// A licensed establishment as registered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    #[serde(rename = "LCNS_NO", default, deserialize_with = "lenient_string")]
    pub license_number: String,
    #[serde(rename = "BSSH_NM", default, deserialize_with = "lenient_string")]
    pub registered_name: String,
    #[serde(rename = "ADDR", default, deserialize_with = "lenient_string")]
    pub registered_address: String,
    /// Industry classification, e.g. "일반음식점"
    #[serde(rename = "INDUTY_CD_NM", default, deserialize_with = "lenient_string")]
    pub industry: String,
    #[serde(rename = "PRMS_DT", default, deserialize_with = "lenient_string")]
    pub permit_date: String,
}

/// Stage seam: business name in, at most one license out.
#[async_trait]
pub trait LicenseSource: Send + Sync {
    /// `address_hint` is only a ranking input for the selector. Locality
    /// gating happens in the pipeline.
    async fn resolve(
        &self,
        business_name: &str,
        address_hint: Option<&str>,
    ) -> Result<Option<LicenseRecord>, LookupError>;
}

/// Resolves business names through the food-safety licensing registry
pub struct LicenseResolver {
    client: Arc<FoodSafetyClient>,
    selector: Box<dyn LicenseSelector>,
}

impl LicenseResolver {
    /// Resolver taking the registry's first row
    pub fn new(client: Arc<FoodSafetyClient>) -> Self {
        Self {
            client,
            selector: Box::new(FirstRow),
        }
    }

    pub fn with_selector(mut self, selector: impl LicenseSelector + 'static) -> Self {
        self.selector = Box::new(selector);
        self
    }

    /// Resolve a business name with no address hint.
    pub async fn resolve(&self, business_name: &str) -> Result<Option<LicenseRecord>, LookupError> {
        self.resolve_ranked(business_name, None).await
    }

    async fn resolve_ranked(
        &self,
        business_name: &str,
        address_hint: Option<&str>,
    ) -> Result<Option<LicenseRecord>, LookupError> {
        let page_size = self.client.config().license_page_size;
        // Rows stay raw so a row that fails to decode still holds its position
        let outcome: RegistryOutcome<serde_json::Value> = self
            .client
            .query(
                ServiceCode::LicenseInfo,
                page_size,
                BUSINESS_NAME_FIELD,
                business_name,
            )
            .await?;

        let rows = match outcome {
            RegistryOutcome::Success(rows) => rows,
            RegistryOutcome::EmptySuccess => {
                tracing::info!(business_name, "No license rows");
                return Ok(None);
            }
            RegistryOutcome::UpstreamError { code, message } => {
                tracing::warn!(
                    business_name,
                    code = %code,
                    "Licensing registry error treated as no match: {}",
                    message
                );
                return Ok(None);
            }
        };

        let candidates: Vec<LicenseRecord> = rows
            .into_iter()
            .map(|row| {
                serde_json::from_value(row).unwrap_or_else(|e| {
                    tracing::warn!(business_name, error = %e, "Undecodable license row");
                    LicenseRecord::default()
                })
            })
            .collect();
        tracing::debug!(business_name, candidates = candidates.len(), "License rows");

        let chosen = match self.selector.select(candidates, address_hint) {
            Some(license) if license.license_number.trim().is_empty() => {
                tracing::warn!(
                    business_name,
                    "Selected license row has no license number; treated as no match"
                );
                None
            }
            chosen => chosen,
        };
        if let Some(ref license) = chosen {
            tracing::info!(
                license_number = %license.license_number,
                registered_name = %license.registered_name,
                registered_address = %license.registered_address,
                "Resolved license"
            );
        }
        Ok(chosen)
    }
}

#[async_trait]
impl LicenseSource for LicenseResolver {
    async fn resolve(
        &self,
        business_name: &str,
        address_hint: Option<&str>,
    ) -> Result<Option<LicenseRecord>, LookupError> {
        self.resolve_ranked(business_name, address_hint).await
    }
}
