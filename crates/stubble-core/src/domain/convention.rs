//! Kind convention registry.
//!
//! # Design Rationale
//!
//! Everything that distinguishes one kind from another (namespace root,
//! directory root, type suffix, file extension, the strippable root token)
//! lives in a single static registry entry. Mapping a resolved name to its
//! blueprint is a table lookup plus string joins; there are no per-kind
//! `match` arms anywhere in the pipeline.
//!
//! # Adding a New Kind
//!
//! 1. Add a variant to [`Kind`] in `kind.rs`
//! 2. Add one [`KindConvention`] entry to [`CONVENTION_REGISTRY`]
//! 3. Add a template body in the adapters crate
//! 4. That's it; no other files change

use std::path::PathBuf;

use crate::domain::error::DomainError;
use crate::domain::kind::Kind;
use crate::domain::name::ResolvedName;

// ── Convention definitions ───────────────────────────────────────────────────

/// Describes every naming convention for one kind.
///
/// This is the single source of truth: the resolver reads `root_token`, the
/// mapper reads the rest, and nothing else encodes per-kind knowledge.
#[derive(Debug, Clone, Copy)]
pub struct KindConvention {
    /// The kind this entry describes.
    pub kind: Kind,

    /// Leading segment stripped when the caller re-types the destination
    /// root, e.g. `Service/User` for the service kind. Matched
    /// case-insensitively, and only when further segments follow.
    pub root_token: &'static str,

    /// Namespace root the segments are appended to, e.g. `App.Services`.
    pub root_namespace: &'static str,

    /// Joins the namespace root and each segment.
    pub namespace_separator: &'static str,

    /// Directory root under the application root, e.g. `Services`.
    pub root_dir: &'static str,

    /// Appended to the leaf to form the type name, e.g. `Service`.
    pub type_suffix: &'static str,

    /// Generated file extension, without the dot.
    pub source_ext: &'static str,

    /// Whether artifacts of this kind wrap a persisted record. Entity-backed
    /// templates receive the model token (the bare leaf); others do not.
    pub entity_backed: bool,
}

/// Single source of truth for kind conventions.
///
/// To add a new kind: add one entry here. No `match` arms elsewhere.
pub static CONVENTION_REGISTRY: &[KindConvention] = &[
    KindConvention {
        kind: Kind::Dto,
        root_token: "Dto",
        root_namespace: "App.Dto",
        namespace_separator: ".",
        root_dir: "Dto",
        type_suffix: "Dto",
        source_ext: "rs",
        entity_backed: false,
    },
    KindConvention {
        kind: Kind::Service,
        root_token: "Service",
        root_namespace: "App.Services",
        namespace_separator: ".",
        root_dir: "Services",
        type_suffix: "Service",
        source_ext: "rs",
        entity_backed: true,
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────

/// Find the convention entry for a kind.
///
/// Fails with [`DomainError::UnsupportedKind`] when the kind has no entry.
/// With the built-in registry that cannot happen (the
/// `assert_registry_integrity` test guarantees coverage), but the error is
/// part of the pipeline's contract, not a panic.
pub fn convention_for(kind: Kind) -> Result<&'static KindConvention, DomainError> {
    lookup(CONVENTION_REGISTRY, kind).ok_or_else(|| DomainError::UnsupportedKind {
        kind: kind.to_string(),
    })
}

fn lookup(registry: &[KindConvention], kind: Kind) -> Option<&KindConvention> {
    registry.iter().find(|def| def.kind == kind)
}

// ── Blueprint derivation ─────────────────────────────────────────────────────

/// Everything the mapper derives for one artifact: what the type is called,
/// which namespace it belongs to, and where its file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    /// Leaf plus the kind's suffix, e.g. `InvoiceService`.
    pub type_name: String,

    /// Namespace root joined with each segment, e.g. `App.Services.Admin`.
    pub namespace: String,

    /// Path below the application root, e.g. `Services/Admin/InvoiceService.rs`.
    pub relative_path: PathBuf,
}

impl Blueprint {
    /// Derive the blueprint for a resolved name under a kind's conventions.
    ///
    /// Pure string and path joining; segments keep their spelling and order.
    pub fn derive(name: &ResolvedName, convention: &KindConvention) -> Self {
        let type_name = format!("{}{}", name.leaf, convention.type_suffix);

        let mut namespace = String::from(convention.root_namespace);
        for segment in &name.segments {
            namespace.push_str(convention.namespace_separator);
            namespace.push_str(segment);
        }

        let mut relative_path = PathBuf::from(convention.root_dir);
        for segment in &name.segments {
            relative_path.push(segment);
        }
        relative_path.push(format!("{type_name}.{}", convention.source_ext));

        Self {
            type_name,
            namespace,
            relative_path,
        }
    }
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the convention registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches registration errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for kind in Kind::ALL {
        let matches = CONVENTION_REGISTRY
            .iter()
            .filter(|def| def.kind == *kind)
            .count();
        assert!(
            matches == 1,
            "Kind {kind:?} must have exactly one convention entry, found {matches}"
        );
    }

    for def in CONVENTION_REGISTRY {
        assert!(
            !def.root_token.is_empty(),
            "{:?}: root_token must not be empty",
            def.kind
        );
        assert!(
            !def.root_namespace.is_empty(),
            "{:?}: root_namespace must not be empty",
            def.kind
        );
        assert!(
            !def.namespace_separator.is_empty(),
            "{:?}: namespace_separator must not be empty",
            def.kind
        );
        assert!(
            !def.root_dir.is_empty() && !PathBuf::from(def.root_dir).is_absolute(),
            "{:?}: root_dir must be a non-empty relative path",
            def.kind
        );
        assert!(
            !def.type_suffix.is_empty(),
            "{:?}: type_suffix must not be empty",
            def.kind
        );
        assert!(
            !def.source_ext.is_empty() && !def.source_ext.starts_with('.'),
            "{:?}: source_ext must be a bare extension",
            def.kind
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn every_kind_has_a_convention() {
        for kind in Kind::ALL {
            assert!(convention_for(*kind).is_ok());
        }
    }

    #[test]
    fn lookup_on_an_empty_registry_misses() {
        assert!(lookup(&[], Kind::Dto).is_none());
        assert!(lookup(&[], Kind::Service).is_none());
    }

    // ── service conventions ──────────────────────────────────────────────────

    #[test]
    fn stripped_service_prefix_maps_to_the_plain_blueprint() {
        let convention = convention_for(Kind::Service).unwrap();
        let name = ResolvedName::parse("Service/User", convention.root_token).unwrap();
        assert!(name.segments.is_empty());
        assert_eq!(name.leaf, "User");

        let blueprint = Blueprint::derive(&name, convention);
        assert_eq!(blueprint.type_name, "UserService");
        assert_eq!(blueprint.namespace, "App.Services");
        assert_eq!(
            blueprint.relative_path,
            Path::new("Services").join("UserService.rs")
        );
    }

    #[test]
    fn nested_service_blueprint_keeps_segment_order() {
        let convention = convention_for(Kind::Service).unwrap();
        let name = ResolvedName::parse("Admin/Invoice", convention.root_token).unwrap();

        let blueprint = Blueprint::derive(&name, convention);
        assert_eq!(blueprint.type_name, "InvoiceService");
        assert_eq!(blueprint.namespace, "App.Services.Admin");
        assert_eq!(
            blueprint.relative_path,
            Path::new("Services").join("Admin").join("InvoiceService.rs")
        );
    }

    // ── dto conventions ──────────────────────────────────────────────────────

    #[test]
    fn dto_blueprint_uses_the_dto_row() {
        let convention = convention_for(Kind::Dto).unwrap();
        let name = ResolvedName::parse("User/CreateUser", convention.root_token).unwrap();

        let blueprint = Blueprint::derive(&name, convention);
        assert_eq!(blueprint.type_name, "CreateUserDto");
        assert_eq!(blueprint.namespace, "App.Dto.User");
        assert_eq!(
            blueprint.relative_path,
            Path::new("Dto").join("User").join("CreateUserDto.rs")
        );
    }

    #[test]
    fn namespace_without_segments_is_the_root_alone() {
        let convention = convention_for(Kind::Dto).unwrap();
        let name = ResolvedName::parse("Invoice", convention.root_token).unwrap();

        let blueprint = Blueprint::derive(&name, convention);
        assert_eq!(blueprint.namespace, "App.Dto");
        assert_eq!(
            blueprint.relative_path,
            Path::new("Dto").join("InvoiceDto.rs")
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let convention = convention_for(Kind::Service).unwrap();
        let name = ResolvedName::parse("Admin/Invoice", convention.root_token).unwrap();

        assert_eq!(
            Blueprint::derive(&name, convention),
            Blueprint::derive(&name, convention)
        );
    }
}
