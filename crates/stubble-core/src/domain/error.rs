//! Domain-layer errors.
//!
//! Pure business-rule violations. No I/O, no wrapped causes; every variant is
//! `Clone + PartialEq` so domain results can be compared directly in tests.
//! Presentation concerns (suggestions, exit codes) live in the CLI crate.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Name resolution
    // ========================================================================
    /// The raw artifact name cannot be resolved into segments and a leaf.
    #[error("invalid artifact name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Convention lookup
    // ========================================================================
    /// The kind is unknown or has no entry in the convention registry.
    #[error("unsupported kind '{kind}'")]
    UnsupportedKind { kind: String },
}

impl DomainError {
    /// Shorthand used by the name resolver.
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
