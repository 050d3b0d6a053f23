//! Food-safety open API integration
//!
//! This module provides:
//! - Envelope types and interpretation into a tagged [`RegistryOutcome`]
//! - A client issuing single-page filtered queries against a service code

pub mod client;
pub mod types;

pub use client::FoodSafetyClient;
pub use types::{RegistryOutcome, ServiceCode};
