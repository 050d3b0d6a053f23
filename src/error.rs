use thiserror::Error;

/// Hard failures of a lookup.
///
/// "No license" and "no violations" are not errors: they come back as
/// [`crate::pipeline::LookupOutcome`] values. Registry-reported error codes are
/// downgraded to "no data" inside each stage and never reach this type.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("{registry} unavailable: {source}")]
    UpstreamUnavailable {
        registry: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl LookupError {
    pub fn upstream(registry: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::UpstreamUnavailable {
            registry,
            source: source.into(),
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Configuration(_) => 500,
            Self::InvalidQuery(_) => 400,
            Self::UpstreamUnavailable { .. } => 503,
        }
    }

    /// Whether re-submitting the same query may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. })
    }
}
