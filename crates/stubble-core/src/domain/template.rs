//! Templates and token rendering.
//!
//! A [`Template`] is one fixed body of source text keyed by [`Kind`].
//! Rendering is literal token replacement, not a templating language.
//! The full token vocabulary is [`tokens`]; anything else in the body,
//! including tokens this version does not know, passes through verbatim so
//! older binaries never corrupt newer template text.

use crate::domain::kind::Kind;

/// The token vocabulary.
///
/// Tokens are matched as exact text, spaces included. `{{class}}` is not a
/// token and survives rendering untouched.
pub mod tokens {
    /// The artifact's namespace, e.g. `App.Services.Admin`.
    pub const NAMESPACE: &str = "{{ namespace }}";
    /// The suffixed type name, e.g. `InvoiceService`.
    pub const CLASS: &str = "{{ class }}";
    /// The bare leaf name, e.g. `Invoice`. Only entity-backed templates
    /// reference it.
    pub const MODEL: &str = "{{ model }}";
}

// ── Template source ──────────────────────────────────────────────────────────

/// Where a template body lives.
///
/// Built-in templates are `Static` (embedded in the binary); `Owned` exists
/// so tests can build bodies at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// One kind's template: the fixed body its artifacts are rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub kind: Kind,
    pub body: TemplateSource,
}

impl Template {
    /// Build a template over an embedded body. `const` so the built-in set
    /// can live in a `static` registry.
    pub const fn new_static(kind: Kind, body: &'static str) -> Self {
        Self {
            kind,
            body: TemplateSource::Static(body),
        }
    }

    /// Render the body against the supplied token values.
    ///
    /// Every occurrence of each supplied token is replaced. A token without
    /// a value, and any unrecognized token, is left in place.
    pub fn render(&self, values: &TokenValues) -> String {
        let mut output = self.body.as_str().to_string();
        output = output.replace(tokens::NAMESPACE, &values.namespace);
        output = output.replace(tokens::CLASS, &values.class);
        if let Some(model) = &values.model {
            output = output.replace(tokens::MODEL, model);
        }
        output
    }
}

// ── Token values ─────────────────────────────────────────────────────────────

/// Values substituted into a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValues {
    pub namespace: String,
    pub class: String,
    /// Bare leaf name; absent when no entity backs the artifact.
    pub model: Option<String>,
}

impl TokenValues {
    pub fn new(namespace: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class: class.into(),
            model: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
