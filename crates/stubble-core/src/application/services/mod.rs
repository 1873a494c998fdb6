//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold an artifact from a name".

pub mod scaffold;

pub use scaffold::{Plan, Scaffolded, ScaffoldService};
