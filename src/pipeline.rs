//! Business name to violation list
//!
//! `lookup` runs three strictly sequential steps:
//!
//! 1. resolve the business name to a license (none ⇒ `NotFound`)
//! 2. gate on locality of the caller's address vs the registered address
//!    (mismatch ⇒ `NotFound`, indistinguishable from step 1)
//! 3. fetch violations for the license number (possibly empty)
//!
//! Transport and configuration failures abort with a [`LookupError`]; they
//! are never folded into `NotFound`.

use crate::config::RegistryConfig;
use crate::error::LookupError;
use crate::license::{LicenseResolver, LicenseSource};
use crate::locality::is_locality_match;
use crate::place_search::PlaceItem;
use crate::registry::FoodSafetyClient;
use crate::violation::{ViolationRecord, ViolationRetriever, ViolationSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// Pipeline input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessQuery {
    pub name: String,
    /// Space-delimited administrative address from a place-search pick
    #[serde(default)]
    pub address: Option<String>,
}

impl BusinessQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Query built from a place-search result, as a result-card click does
    pub fn from_place(place: &PlaceItem) -> Self {
        Self {
            name: place.title.clone(),
            address: Some(place.lookup_address().to_string()).filter(|a| !a.trim().is_empty()),
        }
    }

    /// Trimmed name, or `InvalidQuery` when blank
    fn normalized_name(&self) -> Result<&str, LookupError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(LookupError::InvalidQuery(
                "business name must not be blank".to_string(),
            ));
        }
        Ok(name)
    }

    /// Address, with a blank string treated as absent
    fn normalized_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

/// Pipeline result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "violations", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// No license matched, or the matched license is in another locality
    NotFound,
    /// License found; violations in registry order (possibly none)
    Violations(Vec<ViolationRecord>),
}

impl LookupOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Most recent violation. The registry returns newest first.
    pub fn latest(&self) -> Option<&ViolationRecord> {
        match self {
            Self::NotFound => None,
            Self::Violations(records) => records.first(),
        }
    }

    /// Wire shape: `NotFound` renders as an empty list.
    pub fn into_records(self) -> Vec<ViolationRecord> {
        match self {
            Self::NotFound => Vec::new(),
            Self::Violations(records) => records,
        }
    }
}

/// The lookup pipeline. Stateless between calls.
#[derive(Clone)]
pub struct ViolationLookup {
    licenses: Arc<dyn LicenseSource>,
    violations: Arc<dyn ViolationSource>,
}

impl ViolationLookup {
    pub fn new(licenses: Arc<dyn LicenseSource>, violations: Arc<dyn ViolationSource>) -> Self {
        Self {
            licenses,
            violations,
        }
    }

    /// Pipeline over the food-safety registries with first-row license selection
    pub fn from_config(config: RegistryConfig) -> Result<Self, LookupError> {
        let client = Arc::new(FoodSafetyClient::new(config)?);
        Ok(Self::new(
            Arc::new(LicenseResolver::new(Arc::clone(&client))),
            Arc::new(ViolationRetriever::new(client)),
        ))
    }

    #[instrument(skip(self, query), fields(business = %query.name))]
    pub async fn lookup(&self, query: &BusinessQuery) -> Result<LookupOutcome, LookupError> {
        let name = query.normalized_name()?;
        let address = query.normalized_address();

        let Some(license) = self.licenses.resolve(name, address).await? else {
            tracing::info!("No license for business");
            return Ok(LookupOutcome::NotFound);
        };

        if !is_locality_match(address, &license.registered_address) {
            tracing::info!(
                query_address = address.unwrap_or_default(),
                registered_address = %license.registered_address,
                "Locality mismatch, reporting no record"
            );
            return Ok(LookupOutcome::NotFound);
        }

        let violations = self
            .violations
            .fetch_violations(&license.license_number)
            .await?;
        Ok(LookupOutcome::Violations(violations))
    }
}
