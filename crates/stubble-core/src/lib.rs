//! Stubble Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stubble
//! source-file scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stubble-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Store, Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stubble-adapters (Infrastructure)    │
//! │  (BuiltinTemplates, LocalFilesystem)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (Kind, ResolvedName, Blueprint, ...)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use stubble_core::{application::ScaffoldService, domain::Kind};
//! # let store: Box<dyn stubble_core::application::ports::TemplateStore> = unimplemented!();
//! # let filesystem: Box<dyn stubble_core::application::ports::Filesystem> = unimplemented!();
//!
//! // Wire the service with injected adapters, then scaffold.
//! let service = ScaffoldService::new(store, filesystem);
//! let created = service.generate("Admin/Invoice", Kind::Service, Path::new(".")).unwrap();
//! println!("{}", created.relative_path.display());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Plan, Scaffolded, ScaffoldService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        Blueprint, Kind, KindConvention, ResolvedName, Template, TemplateSource, TokenValues,
    };
    pub use crate::error::{StubbleError, StubbleResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
