//! Local place-search client
//!
//! Pass-through to the Naver local search API. Used to populate the candidate
//! places a user picks from before running a violation lookup.

use super::types::{PlaceItem, PlaceSearchResponse};
use crate::config::PlaceSearchConfig;
use crate::error::LookupError;
use anyhow::anyhow;
use reqwest::Client;

const REGISTRY: &str = "place search";

pub struct PlaceSearchClient {
    http: Client,
    config: PlaceSearchConfig,
}

impl PlaceSearchClient {
    pub fn new(config: PlaceSearchConfig) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::Configuration(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Search places by free text. Titles come back without highlight markup.
    pub async fn search(&self, query: &str) -> Result<Vec<PlaceItem>, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::InvalidQuery(
                "search query must not be blank".to_string(),
            ));
        }

        let display_count = self.config.display.to_string();
        tracing::debug!(query, display = self.config.display, "Searching places");

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("query", query), ("display", display_count.as_str())])
            .header("X-Naver-Client-Id", &self.config.client_id)
            .header("X-Naver-Client-Secret", &self.config.client_secret)
            .send()
            .await
            .map_err(|e| LookupError::upstream(REGISTRY, e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::upstream(
                REGISTRY,
                anyhow!(
                    "HTTP {}: {}",
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            ));
        }

        let parsed: PlaceSearchResponse = response
            .json()
            .await
            .map_err(|e| LookupError::upstream(REGISTRY, e.without_url()))?;

        Ok(parsed.items.into_iter().map(PlaceItem::cleaned).collect())
    }
}
