//! Registry and place-search configuration
//!
//! Configuration is a plain value handed to client constructors. Nothing in
//! the library reads the environment at call time; `from_env` exists for the
//! binaries.

use crate::error::LookupError;
use std::time::Duration;

pub const API_KEY_ENV: &str = "FOOD_SAFETY_API_KEY";
pub const BASE_URL_ENV: &str = "FOOD_SAFETY_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "FOOD_SAFETY_TIMEOUT_SECS";

pub const NAVER_CLIENT_ID_ENV: &str = "NAVER_CLIENT_ID";
pub const NAVER_CLIENT_SECRET_ENV: &str = "NAVER_CLIENT_SECRET";
pub const NAVER_BASE_URL_ENV: &str = "NAVER_SEARCH_BASE_URL";

pub const DEFAULT_REGISTRY_BASE_URL: &str = "http://openapi.foodsafetykorea.go.kr/api";
pub const DEFAULT_PLACE_SEARCH_URL: &str = "https://openapi.naver.com/v1/search/local.json";

const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_LICENSE_PAGE_SIZE: u32 = 10;
const DEFAULT_VIOLATION_PAGE_SIZE: u32 = 5;
const DEFAULT_PLACE_DISPLAY: u32 = 5;

/// Settings shared by the licensing and disciplinary registries.
#[derive(Clone)]
pub struct RegistryConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub license_page_size: u32,
    pub violation_page_size: u32,
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("license_page_size", &self.license_page_size)
            .field("violation_page_size", &self.violation_page_size)
            .finish()
    }
}

impl RegistryConfig {
    /// Build a config with defaults. A blank key is rejected up front.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LookupError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(LookupError::Configuration(format!(
                "{} is not set",
                API_KEY_ENV
            )));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_REGISTRY_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            license_page_size: DEFAULT_LICENSE_PAGE_SIZE,
            violation_page_size: DEFAULT_VIOLATION_PAGE_SIZE,
        })
    }

    /// Read config from process environment variables
    pub fn from_env() -> Result<Self, LookupError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read config through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, LookupError> {
        let mut config = Self::new(var(API_KEY_ENV).unwrap_or_default())?;

        if let Some(base_url) = var(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }

        let timeout_secs = var(TIMEOUT_ENV)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        config.timeout = Duration::from_secs(timeout_secs);

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_sizes(mut self, license: u32, violation: u32) -> Self {
        self.license_page_size = license.max(1);
        self.violation_page_size = violation.max(1);
        self
    }
}

/// Credentials and limits for the local place-search service.
#[derive(Clone)]
pub struct PlaceSearchConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
    pub display: u32,
    pub timeout: Duration,
}

impl std::fmt::Debug for PlaceSearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceSearchConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("display", &self.display)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PlaceSearchConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, LookupError> {
        let client_id = client_id.into().trim().to_string();
        let client_secret = client_secret.into().trim().to_string();
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(LookupError::Configuration(format!(
                "{} and {} must both be set",
                NAVER_CLIENT_ID_ENV, NAVER_CLIENT_SECRET_ENV
            )));
        }

        Ok(Self {
            client_id,
            client_secret,
            base_url: DEFAULT_PLACE_SEARCH_URL.to_string(),
            display: DEFAULT_PLACE_DISPLAY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn from_env() -> Result<Self, LookupError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, LookupError> {
        let mut config = Self::new(
            var(NAVER_CLIENT_ID_ENV).unwrap_or_default(),
            var(NAVER_CLIENT_SECRET_ENV).unwrap_or_default(),
        )?;
        if let Some(base_url) = var(NAVER_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
