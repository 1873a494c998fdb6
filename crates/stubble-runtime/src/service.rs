//! The record service contract.
//!
//! A record service wraps exactly one persisted record and bridges data
//! carriers to the record's own persistence capability. Generated services
//! name their record type and supply the four accessors; `create`, `find`,
//! and `update` are provided on top.

use std::fmt::Display;

use crate::carrier::{DataCarrier, FieldMap};
use crate::error::{CarrierError, ServiceError};

/// Persistence capability of an entity.
///
/// This is the surface a record service drives. How records are actually
/// stored is the implementor's business; the contract only fixes the
/// failure semantics: a `find` miss is [`ServiceError::NotFound`], and
/// `update` applies the fields to this instance as well as the store.
pub trait Record: Sized {
    /// Primary key type.
    type Id: Display;

    /// Persist a new record built from the given fields.
    fn create(fields: FieldMap) -> Result<Self, ServiceError>;

    /// Load the record with the given id, or fail with
    /// [`ServiceError::NotFound`].
    fn find(id: &Self::Id) -> Result<Self, ServiceError>;

    /// Apply the given fields to this record and persist the change.
    fn update(&mut self, fields: FieldMap) -> Result<(), ServiceError>;
}

/// Anything that can hand the service a field map.
///
/// Service operations take `impl IntoFields`, so call sites pass either a
/// plain [`FieldMap`] or a reference to any [`DataCarrier`].
pub trait IntoFields {
    fn into_fields(self) -> Result<FieldMap, CarrierError>;
}

impl IntoFields for FieldMap {
    fn into_fields(self) -> Result<FieldMap, CarrierError> {
        Ok(self)
    }
}

impl<T: DataCarrier> IntoFields for &T {
    fn into_fields(self) -> Result<FieldMap, CarrierError> {
        self.to_map()
    }
}

/// Contract for generated record services.
///
/// The associated [`Record`](RecordService::Record) type is the single
/// point that binds a service to its entity; everything else follows from
/// it. A service holds one record at a time.
pub trait RecordService: Sized {
    /// The entity this service manages.
    type Record: Record;

    /// Wrap an already-loaded record.
    fn from_record(record: Self::Record) -> Self;

    /// The record currently held.
    fn record(&self) -> &Self::Record;

    /// Mutable access to the held record.
    fn record_mut(&mut self) -> &mut Self::Record;

    /// Replace the held record.
    fn set_record(&mut self, record: Self::Record);

    /// Create a new record from carrier data and wrap it in a service.
    fn create<D: IntoFields>(data: D) -> Result<Self, ServiceError> {
        let record = <Self::Record as Record>::create(data.into_fields()?)?;
        Ok(Self::from_record(record))
    }

    /// Find an existing record by id and wrap it in a service.
    ///
    /// A miss surfaces as [`ServiceError::NotFound`], distinguishable
    /// from every other failure.
    fn find(id: &<Self::Record as Record>::Id) -> Result<Self, ServiceError> {
        let record = <Self::Record as Record>::find(id)?;
        Ok(Self::from_record(record))
    }

    /// Update the held record in place with carrier data.
    ///
    /// Returns the service itself so updates chain.
    fn update<D: IntoFields>(&mut self, data: D) -> Result<&mut Self, ServiceError> {
        let fields = data.into_fields()?;
        self.record_mut().update(fields)?;
        Ok(self)
    }
}
