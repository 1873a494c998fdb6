//! Infrastructure adapters for Stubble.
//!
//! This crate implements the ports defined in `stubble-core::application::ports`.
//! It contains the built-in template registry and all filesystem I/O.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::BuiltinTemplates;
