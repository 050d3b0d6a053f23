//! food-violation-lookup
//!
//! Looks up whether a food-service business has recorded hygiene-law
//! violations, using two Korean food-safety open API registries:
//!
//! - the licensing registry resolves a business name to a license
//! - a locality gate compares the caller's address with the registered one
//! - the disciplinary registry lists violations for that license
//!
//! # Example
//!
//! ```no_run
//! use food_violation_lookup::{BusinessQuery, RegistryConfig, ViolationLookup};
//!
//! # async fn run() -> Result<(), food_violation_lookup::LookupError> {
//! let lookup = ViolationLookup::from_config(RegistryConfig::from_env()?)?;
//! let query = BusinessQuery::new("파란김치").with_address("서울특별시 강남구 테헤란로 152");
//! for record in lookup.lookup(&query).await?.into_records() {
//!     println!("{} {}", record.decision_date, record.violation_content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod license;
pub mod locality;
pub mod pipeline;
pub mod place_search;
pub mod registry;
pub mod violation;

#[cfg(feature = "server")]
pub mod server;

pub use config::{PlaceSearchConfig, RegistryConfig};
pub use error::LookupError;
pub use license::{LicenseRecord, LicenseResolver, LicenseSource};
pub use locality::is_locality_match;
pub use pipeline::{BusinessQuery, LookupOutcome, ViolationLookup};
pub use place_search::{PlaceItem, PlaceSearchClient};
pub use violation::{ViolationRecord, ViolationRetriever, ViolationSource};
