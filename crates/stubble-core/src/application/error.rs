//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Kind;

/// Errors that occur during application orchestration.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The kind has a convention entry but no registered template. Distinct
    /// from `DomainError::UnsupportedKind`: the convention lookup succeeded,
    /// the template lookup did not.
    #[error("no template registered for kind '{kind}'")]
    TemplateNotFound { kind: Kind },

    /// The destination file already exists. The existing file is untouched;
    /// the caller must pick a different name.
    #[error("'{path}' already exists", path = path.display())]
    Collision { path: PathBuf },

    /// A filesystem operation failed for a reason other than a collision.
    #[error("filesystem error at '{path}' while trying to {action}", path = path.display())]
    Io {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    /// Wrap an I/O failure, keeping the cause in the source chain.
    pub fn io(path: impl Into<PathBuf>, action: &'static str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            action,
            source,
        }
    }
}
