//! Template store over the compiled-in registry.

use stubble_core::application::ApplicationError;
use stubble_core::application::ports::TemplateStore;
use stubble_core::domain::{Kind, Template};
use stubble_core::error::StubbleResult;

use crate::builtin_templates::BUILTIN_TEMPLATES;

/// Store backed by [`BUILTIN_TEMPLATES`].
///
/// Lookup is a scan of a two-entry slice; there is nothing to configure
/// and no I/O to fail.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    /// Create a new built-in template store.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuiltinTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for BuiltinTemplates {
    fn get(&self, kind: Kind) -> StubbleResult<Template> {
        BUILTIN_TEMPLATES
            .iter()
            .find(|template| template.kind == kind)
            .cloned()
            .ok_or_else(|| ApplicationError::TemplateNotFound { kind }.into())
    }

    fn list(&self) -> StubbleResult<Vec<Template>> {
        Ok(BUILTIN_TEMPLATES.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_resolves_to_its_template() {
        let store = BuiltinTemplates::new();
        for kind in Kind::ALL {
            let template = store.get(*kind).unwrap();
            assert_eq!(template.kind, *kind);
        }
    }

    #[test]
    fn list_returns_one_template_per_kind() {
        let store = BuiltinTemplates::new();
        let templates = store.list().unwrap();
        assert_eq!(templates.len(), Kind::ALL.len());
    }
}
