// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stubble.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Conventions as data**: Per-kind rules live in one registry
//!
// Public API - what the world sees
pub mod convention;
pub mod error;
pub mod kind;
pub mod name;
pub mod template;

// Re-exports for convenience
pub use convention::{Blueprint, CONVENTION_REGISTRY, KindConvention, convention_for};
pub use error::DomainError;
pub use kind::Kind;
pub use name::ResolvedName;
pub use template::{Template, TemplateSource, TokenValues, tokens};

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Cross-module pipeline (resolve → derive → render, no filesystem)
    // ========================================================================

    fn render_for(raw: &str, kind: Kind, body: &'static str) -> (Blueprint, String) {
        let convention = convention_for(kind).unwrap();
        let name = ResolvedName::parse(raw, convention.root_token).unwrap();
        let blueprint = Blueprint::derive(&name, convention);
        let mut values = TokenValues::new(&blueprint.namespace, &blueprint.type_name);
        if convention.entity_backed {
            values = values.with_model(&name.leaf);
        }
        let rendered = Template::new_static(kind, body).render(&values);
        (blueprint, rendered)
    }

    #[test]
    fn nested_service_renders_all_three_tokens() {
        let (blueprint, rendered) = render_for(
            "Admin/Invoice",
            Kind::Service,
            "{{ namespace }} | {{ class }} | {{ model }}",
        );

        assert_eq!(rendered, "App.Services.Admin | InvoiceService | Invoice");
        assert_eq!(
            blueprint.relative_path,
            Path::new("Services").join("Admin").join("InvoiceService.rs")
        );
    }

    #[test]
    fn dto_pipeline_leaves_the_model_token_verbatim() {
        let (blueprint, rendered) = render_for(
            "User/CreateUser",
            Kind::Dto,
            "{{ namespace }}::{{ class }} {{ model }}",
        );

        assert_eq!(rendered, "App.Dto.User::CreateUserDto {{ model }}");
        assert_eq!(blueprint.type_name, "CreateUserDto");
    }

    #[test]
    fn separator_spelling_does_not_change_the_blueprint() {
        let forward = render_for("Admin/Invoice", Kind::Service, "{{ class }}");
        let backward = render_for("Admin\\Invoice", Kind::Service, "{{ class }}");
        assert_eq!(forward, backward);
    }

    #[test]
    fn kind_round_trips_through_its_string_form() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_str(kind.as_str()).unwrap(), *kind);
        }
    }
}
