//! Stubble Runtime - contracts implemented by generated artifacts.
//!
//! Scaffolded source files are not free-standing: a generated data carrier
//! implements [`DataCarrier`], and a generated record service implements
//! [`RecordService`]. This crate is the only dependency those files need.
//!
//! ## Data carriers
//!
//! A carrier is a value type whose fields travel as an ordered map or as
//! JSON. One required method, everything else provided:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use stubble_runtime::DataCarrier;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct CreateUserDto {
//!     name: String,
//!     email: String,
//! }
//!
//! impl DataCarrier for CreateUserDto {
//!     fn fields() -> &'static [&'static str] {
//!         &["name", "email"]
//!     }
//! }
//!
//! let dto = CreateUserDto {
//!     name: "Ada".to_string(),
//!     email: "ada@example.com".to_string(),
//! };
//! let map = dto.to_map().unwrap();
//! assert_eq!(map.keys().next().map(String::as_str), Some("name"));
//! ```
//!
//! ## Record services
//!
//! A service wraps exactly one persisted record. The service names its
//! entity through the [`RecordService::Record`] associated type and wires
//! four accessors; `create`, `find`, and `update` come as provided methods
//! that accept either a [`FieldMap`] or any carrier reference.

pub mod carrier;
pub mod error;
pub mod service;

pub use carrier::{DataCarrier, FieldMap};
pub use error::{CarrierError, ServiceError};
pub use service::{IntoFields, Record, RecordService};
