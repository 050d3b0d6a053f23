//! Local place-search response types

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]+(>|$)").unwrap());

/// Top-level local search response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceSearchResponse {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub items: Vec<PlaceItem>,
}

/// One place returned by local search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub telephone: String,
    /// Lot-number address
    #[serde(default)]
    pub address: String,
    /// Road-name address
    #[serde(default)]
    pub road_address: String,
    #[serde(default)]
    pub mapx: String,
    #[serde(default)]
    pub mapy: String,
}

impl PlaceItem {
    /// Address to hand to the violation lookup: road address when present.
    pub fn lookup_address(&self) -> &str {
        if self.road_address.trim().is_empty() {
            &self.address
        } else {
            &self.road_address
        }
    }

    /// Copy with highlight markup removed from the title
    pub fn cleaned(mut self) -> Self {
        self.title = strip_html_tags(&self.title);
        self
    }
}

/// Remove HTML tags such as the `<b>` highlighting search puts around matches.
pub fn strip_html_tags(s: &str) -> String {
    HTML_TAG.replace_all(s, "").into_owned()
}
