use std::sync::Arc;

use axum::{extract::Query, Extension, Json};
use serde::Deserialize;

use super::error::AppError;
use crate::error::LookupError;
use crate::pipeline::{BusinessQuery, ViolationLookup};
use crate::place_search::{PlaceSearchClient, PlaceSearchResponse};
use crate::violation::ViolationRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationParams {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn get_violations(
    Extension(lookup): Extension<Arc<ViolationLookup>>,
    Query(params): Query<ViolationParams>,
) -> Result<Json<Vec<ViolationRecord>>, AppError> {
    let name = params.business_name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(LookupError::InvalidQuery("businessName is required".to_string()).into());
    }

    let query = BusinessQuery {
        name,
        address: params.address,
    };
    let outcome = lookup.lookup(&query).await?;
    Ok(Json(outcome.into_records()))
}

pub async fn search_places(
    Extension(places): Extension<Option<Arc<PlaceSearchClient>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<PlaceSearchResponse>, AppError> {
    let Some(places) = places else {
        return Err(LookupError::Configuration("place search is not configured".to_string()).into());
    };

    let items = places
        .search(params.query.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(PlaceSearchResponse {
        total: items.len() as u32,
        items,
    }))
}
