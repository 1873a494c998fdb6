//! Artifact kinds.
//!
//! A [`Kind`] names one shape of artifact the generator can produce. Every
//! kind has exactly one entry in the convention registry and one built-in
//! template; everything else derives from those two tables.
//!
//! ## Adding a New Kind
//!
//! 1. Add a variant here
//! 2. Add a [`KindConvention`](crate::domain::convention::KindConvention)
//!    entry to the registry in `convention.rs`
//! 3. Add a template body in the adapters crate
//! 4. Done; the resolver, mapper, and materializer are untouched

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// What the generator is being asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// An immutable data carrier.
    Dto,
    /// A persistence service wrapping one entity record.
    Service,
}

impl Kind {
    /// Every kind, in display order.
    pub const ALL: &'static [Kind] = &[Kind::Dto, Kind::Service];

    /// Canonical lowercase name; also the CLI argument spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Dto => "dto",
            Kind::Service => "service",
        }
    }

    /// Human-readable label for prompts and success messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Kind::Dto => "data carrier",
            Kind::Service => "service",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dto" | "data-carrier" | "data" => Ok(Kind::Dto),
            "service" | "record-service" | "svc" => Ok(Kind::Service),
            other => Err(DomainError::UnsupportedKind {
                kind: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_canonical_names() {
        assert_eq!(Kind::from_str("dto").unwrap(), Kind::Dto);
        assert_eq!(Kind::from_str("service").unwrap(), Kind::Service);
    }

    #[test]
    fn kind_parses_aliases_case_insensitively() {
        assert_eq!(Kind::from_str("DTO").unwrap(), Kind::Dto);
        assert_eq!(Kind::from_str("data-carrier").unwrap(), Kind::Dto);
        assert_eq!(Kind::from_str(" svc ").unwrap(), Kind::Service);
        assert_eq!(Kind::from_str("Record-Service").unwrap(), Kind::Service);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = Kind::from_str("controller").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedKind {
                kind: "controller".into()
            }
        );
    }

    #[test]
    fn display_matches_as_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
