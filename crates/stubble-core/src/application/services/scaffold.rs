//! Scaffold service - main application orchestrator.
//!
//! This service coordinates the entire generation pipeline:
//! 1. Look up the kind's conventions
//! 2. Resolve the raw name against them
//! 3. Derive the blueprint (type name, namespace, relative path)
//! 4. Render the kind's template
//! 5. Materialize the file under the application root
//!
//! Steps 1 through 4 are pure; [`ScaffoldService::plan`] stops there, which
//! is what dry runs print. [`ScaffoldService::generate`] runs all five.
//!
//! It implements the driving use case and talks to the world through the
//! driven ports only.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::ports::{Filesystem, TemplateStore};
use crate::domain::{Blueprint, Kind, ResolvedName, TokenValues, convention_for};
use crate::error::StubbleResult;

/// Everything `generate` is about to do, computed without any filesystem
/// effect. Same inputs, same plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub kind: Kind,
    pub type_name: String,
    pub namespace: String,
    /// Path below the application root.
    pub relative_path: PathBuf,
    /// Fully rendered file content.
    pub content: String,
}

/// A successfully written artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffolded {
    pub kind: Kind,
    pub type_name: String,
    pub namespace: String,
    pub relative_path: PathBuf,
    pub absolute_path: PathBuf,
}

/// Main scaffolding service.
///
/// Orchestrates name resolution, convention mapping, rendering, and the
/// final write.
pub struct ScaffoldService {
    templates: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(templates: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Run the pure pipeline stages for `raw_name` under `kind`.
    ///
    /// Nothing is written; callers that only want to show what would happen
    /// stop here.
    pub fn plan(&self, raw_name: &str, kind: Kind) -> StubbleResult<Plan> {
        // 1. Conventions for the kind
        let convention = convention_for(kind)?;

        // 2. Resolve the raw name
        let name = ResolvedName::parse(raw_name, convention.root_token)?;

        // 3. Derive the blueprint
        let blueprint = Blueprint::derive(&name, convention);
        debug!(
            type_name = %blueprint.type_name,
            namespace = %blueprint.namespace,
            "Blueprint derived"
        );

        // 4. Render the template
        let template = self.templates.get(kind)?;
        let mut values = TokenValues::new(&blueprint.namespace, &blueprint.type_name);
        if convention.entity_backed {
            values = values.with_model(&name.leaf);
        }
        let content = template.render(&values);

        Ok(Plan {
            kind,
            type_name: blueprint.type_name,
            namespace: blueprint.namespace,
            relative_path: blueprint.relative_path,
            content,
        })
    }

    /// Scaffold one artifact: plan it, then write it under `app_root`.
    ///
    /// This is the main use case. An existing destination file fails the
    /// call and is left untouched.
    #[instrument(skip_all, fields(kind = %kind, name = raw_name))]
    pub fn generate(
        &self,
        raw_name: &str,
        kind: Kind,
        app_root: &Path,
    ) -> StubbleResult<Scaffolded> {
        let plan = self.plan(raw_name, kind)?;
        info!(
            type_name = %plan.type_name,
            path = %plan.relative_path.display(),
            "Plan ready"
        );

        // 5. Materialize
        let absolute_path = self.materialize(&plan, app_root)?;
        info!(path = %absolute_path.display(), "Artifact created");

        Ok(Scaffolded {
            kind: plan.kind,
            type_name: plan.type_name,
            namespace: plan.namespace,
            relative_path: plan.relative_path,
            absolute_path,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write a plan's content under the application root.
    ///
    /// Parent directories are created first; the file itself is created
    /// exclusively, so a concurrent race on one path has exactly one winner.
    fn materialize(&self, plan: &Plan, app_root: &Path) -> StubbleResult<PathBuf> {
        let absolute_path = app_root.join(&plan.relative_path);

        if let Some(parent) = absolute_path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        self.filesystem.write_new(&absolute_path, &plan.content)?;

        Ok(absolute_path)
    }
}
