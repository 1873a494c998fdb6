//! Errors raised by the runtime contracts.

use thiserror::Error;

/// Errors from the data carrier contract.
#[derive(Debug, Error)]
pub enum CarrierError {
    /// A declared field was absent from the input map.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// The carrier does not serialize to a JSON object, so there is no
    /// field map to speak of.
    #[error("carrier serializes to {found}, not an object")]
    NotAnObject { found: &'static str },

    /// JSON encoding or decoding failed.
    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}

/// Errors from the record service contract.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record exists under the given id. Callers can rely on matching
    /// this variant to tell a miss from any other failure.
    #[error("no record found for id '{id}'")]
    NotFound { id: String },

    /// A carrier handed to the service was unusable.
    #[error(transparent)]
    Carrier(#[from] CarrierError),

    /// The storage backend behind the record failed.
    #[error("storage backend failed")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ServiceError {
    /// Wrap an arbitrary storage failure.
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(source))
    }
}
