//! HTTP front for the lookup pipeline
//!
//! GET /api/violation?businessName=&address=  — violation list (empty when none)
//! GET /api/search?query=                     — place-search pass-through
//! GET /health

mod error;
mod handlers;
pub mod router;

pub use error::AppError;
pub use router::build_router;
