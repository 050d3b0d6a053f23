//! Local place search
//!
//! Supplies candidate businesses (name + address) for the violation lookup.

mod client;
mod types;

pub use client::PlaceSearchClient;
pub use types::{strip_html_tags, PlaceItem, PlaceSearchResponse};
