//! Application layer for Stubble.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All naming and rendering rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export the main service and its products
pub use services::{Plan, Scaffolded, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateStore};

pub use error::ApplicationError;
