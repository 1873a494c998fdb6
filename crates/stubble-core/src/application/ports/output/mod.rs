//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stubble-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Kind, Template};
use crate::error::StubbleResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stubble_adapters::filesystem::LocalFilesystem` (production)
/// - `stubble_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_new` is create-exclusive: an existing file fails the call and is
///   never touched. Under concurrent writers racing on one path, exactly one
///   wins. There is no overwrite operation on this port at all.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Directories get conventional permissions (0755) where the platform
    /// has such a concept; elsewhere this aspect is a no-op.
    fn create_dir_all(&self, path: &Path) -> StubbleResult<()>;

    /// Create `path` with `content`, failing if it already exists.
    ///
    /// The destination observes either the complete file or nothing.
    fn write_new(&self, path: &Path, content: &str) -> StubbleResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `stubble_adapters::template_store::BuiltinTemplates` (the fixed set)
pub trait TemplateStore: Send + Sync {
    /// Get the template for a kind.
    fn get(&self, kind: Kind) -> StubbleResult<Template>;

    /// List every registered template.
    fn list(&self) -> StubbleResult<Vec<Template>>;
}
