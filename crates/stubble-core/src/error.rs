//! Unified error handling for Stubble Core.
//!
//! One root type wraps the domain and application layers so callers handle a
//! single error surface. Presentation concerns (suggestions, categories,
//! exit codes) belong to the CLI crate, which matches on the variants here.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stubble Core operations.
#[derive(Debug, Error)]
pub enum StubbleError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// Convenient result type alias.
pub type StubbleResult<T> = Result<T, StubbleError>;
