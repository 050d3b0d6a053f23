//! Food-safety open API client
//!
//! One GET per call, no retries, bounded by the configured timeout. Errors
//! never carry the request URL, since the API key is a path segment.
//! Requests have the shape
//! `{base}/{api_key}/{service}/json/{start}/{end}/{FIELD}={value}`.

use super::types::{interpret, RegistryOutcome, ServiceCode};
use crate::config::RegistryConfig;
use crate::error::LookupError;
use anyhow::anyhow;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Client for the food-safety open API
pub struct FoodSafetyClient {
    http: Client,
    config: RegistryConfig,
}

impl FoodSafetyClient {
    pub fn new(config: RegistryConfig) -> Result<Self, LookupError> {
        // Fail on a bad base URL now rather than on the first request
        Url::parse(&config.base_url).map_err(|e| {
            LookupError::Configuration(format!("invalid registry base URL {}: {}", config.base_url, e))
        })?;

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::Configuration(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Build the request URL for the first page of `service` filtered by `field = value`.
    pub fn service_url(
        &self,
        service: ServiceCode,
        page_size: u32,
        field: &str,
        value: &str,
    ) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            LookupError::Configuration(format!("invalid registry base URL: {}", e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                LookupError::Configuration(format!(
                    "registry base URL cannot carry a path: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .push(&self.config.api_key)
            .push(service.as_str())
            .push("json")
            .push("1")
            .push(&page_size.max(1).to_string())
            .push(&format!("{}={}", field, value));

        Ok(url)
    }

    /// Query the first page of `service` and interpret the envelope.
    ///
    /// Transport problems (network, timeout, a body that is not JSON) are
    /// errors. Any JSON body is interpreted as an envelope whatever the HTTP
    /// status, so registry-reported codes come back as a [`RegistryOutcome`].
    pub async fn query<T: DeserializeOwned>(
        &self,
        service: ServiceCode,
        page_size: u32,
        field: &str,
        value: &str,
    ) -> Result<RegistryOutcome<T>, LookupError> {
        let url = self.service_url(service, page_size, field, value)?;
        let registry = service.registry_name();

        tracing::debug!(
            service = %service,
            field,
            value,
            page_size,
            "Querying {}",
            registry
        );

        // reqwest errors render the request URL, which carries the API key
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LookupError::upstream(registry, e.without_url()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LookupError::upstream(registry, e.without_url()))?;

        let body: serde_json::Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(LookupError::upstream(
                    registry,
                    anyhow!(
                        "non-JSON response ({}): {}",
                        e,
                        text.chars().take(200).collect::<String>()
                    ),
                ))
            }
            Err(_) => {
                return Err(LookupError::upstream(
                    registry,
                    anyhow!(
                        "HTTP {}: {}",
                        status,
                        text.chars().take(200).collect::<String>()
                    ),
                ))
            }
        };

        if !status.is_success() {
            tracing::warn!(service = %service, status = %status, "Registry answered with a JSON envelope on an error status");
        }

        Ok(interpret(service, &body))
    }
}
