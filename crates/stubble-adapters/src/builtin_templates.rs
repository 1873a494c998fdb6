//! Built-in templates.
//!
//! One fixed template body per kind, embedded in the binary. Bodies are
//! plain source text with the literal tokens `{{ namespace }}`,
//! `{{ class }}`, and `{{ model }}`; rendering replaces tokens and nothing
//! else, so what you read here is byte-for-byte what lands on disk.
//!
//! # What the generated files assume
//!
//! Generated artifacts implement the `stubble-runtime` contracts:
//!
//! - A data carrier starts with an empty field list. The author declares
//!   struct fields and mirrors them in `fields()`.
//! - A record service binds its entity as `crate::models::<Model>`, where
//!   the model name is the bare leaf of the artifact name. The model has
//!   to implement `stubble_runtime::Record` for the service to compile.

use stubble_core::domain::{Kind, Template};

// ── Template bodies ──────────────────────────────────────────────────────────

const DTO_BODY: &str = r#"//! {{ class }} data carrier.
//!
//! Logical namespace: {{ namespace }}

use serde::{Deserialize, Serialize};
use stubble_runtime::DataCarrier;

/// Value object carrying the {{ class }} payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct {{ class }} {
    // Declare the payload fields here, then list them in fields().
}

impl DataCarrier for {{ class }} {
    fn fields() -> &'static [&'static str] {
        &[]
    }
}
"#;

const SERVICE_BODY: &str = r#"//! {{ class }} record service.
//!
//! Logical namespace: {{ namespace }}

use stubble_runtime::RecordService;

use crate::models::{{ model }};

/// Manages a single {{ model }} record.
pub struct {{ class }} {
    record: {{ model }},
}

impl RecordService for {{ class }} {
    type Record = {{ model }};

    fn from_record(record: {{ model }}) -> Self {
        Self { record }
    }

    fn record(&self) -> &{{ model }} {
        &self.record
    }

    fn record_mut(&mut self) -> &mut {{ model }} {
        &mut self.record
    }

    fn set_record(&mut self, record: {{ model }}) {
        self.record = record;
    }
}
"#;

// ── Registry ─────────────────────────────────────────────────────────────────

/// Every template that ships with the binary, one per kind.
pub static BUILTIN_TEMPLATES: &[Template] = &[
    Template::new_static(Kind::Dto, DTO_BODY),
    Template::new_static(Kind::Service, SERVICE_BODY),
];

/// Assert that the template registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_template_integrity() {
    for kind in Kind::ALL {
        let matches = BUILTIN_TEMPLATES
            .iter()
            .filter(|template| template.kind == *kind)
            .count();
        assert!(
            matches == 1,
            "Kind {kind:?} must have exactly one template, found {matches}"
        );
    }

    for template in BUILTIN_TEMPLATES {
        let body = template.body.as_str();
        assert!(
            !body.is_empty() && body.ends_with('\n'),
            "{:?}: template body must be non-empty and newline-terminated",
            template.kind
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use stubble_core::domain::{TokenValues, tokens};

    use super::*;

    fn body_for(kind: Kind) -> &'static str {
        match kind {
            Kind::Dto => DTO_BODY,
            Kind::Service => SERVICE_BODY,
        }
    }

    #[test]
    fn registry_is_internally_consistent() {
        assert_template_integrity();
    }

    #[test]
    fn every_body_names_its_namespace_and_class() {
        for kind in Kind::ALL {
            let body = body_for(*kind);
            assert!(body.contains(tokens::NAMESPACE), "{kind:?} lacks namespace");
            assert!(body.contains(tokens::CLASS), "{kind:?} lacks class");
        }
    }

    #[test]
    fn only_the_service_body_references_a_model() {
        assert!(SERVICE_BODY.contains(tokens::MODEL));
        assert!(!DTO_BODY.contains(tokens::MODEL));
    }

    #[test]
    fn rendered_service_binds_the_entity() {
        let template = Template::new_static(Kind::Service, SERVICE_BODY);
        let rendered = template.render(
            &TokenValues::new("App.Services", "UserService").with_model("User"),
        );

        assert!(rendered.contains("use crate::models::User;"));
        assert!(rendered.contains("pub struct UserService {"));
        assert!(rendered.contains("impl RecordService for UserService {"));
        assert!(rendered.contains("type Record = User;"));
        assert!(!rendered.contains("{{ "), "tokens left unrendered");
    }

    #[test]
    fn rendered_dto_declares_the_carrier() {
        // No model value: dto artifacts are not entity-backed.
        let template = Template::new_static(Kind::Dto, DTO_BODY);
        let rendered = template.render(&TokenValues::new("App.Dto.User", "CreateUserDto"));

        assert!(rendered.contains("//! CreateUserDto data carrier."));
        assert!(rendered.contains("Logical namespace: App.Dto.User"));
        assert!(rendered.contains("pub struct CreateUserDto {"));
        assert!(rendered.contains("impl DataCarrier for CreateUserDto {"));
        assert!(!rendered.contains("{{ "), "tokens left unrendered");
    }
}
