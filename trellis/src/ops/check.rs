//! Check operation - schema validation.

use std::path::Path;

use eyre::Result;
use trellis_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use trellis_manifest::AppDefinition;

use super::format_diagnostic;
use crate::reports::{CheckReport, SchemaSummary};

/// Execute the check operation.
///
/// Runs the pipeline to validate the schema and returns its diagnostics.
/// Lint errors are reported, not returned: only a phase failing without
/// leaving an error diagnostic is an `Err`.
pub fn check(app: &AppDefinition, config_path: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(app.clone());
    if let Err(err) = Pipeline::new().run_with(&mut ctx)
        && !ctx.has_errors()
    {
        return Err(err.wrap_err("Validation failed"));
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        summary: summarize(app),
    })
}

fn summarize(app: &AppDefinition) -> SchemaSummary {
    SchemaSummary {
        name: app.app.name.clone(),
        version: app.app.version.clone(),
        description: app.app.description.clone(),
        entities: app.entities.keys().cloned().collect(),
        views: app
            .views
            .iter()
            .map(|(name, view)| {
                (
                    name.clone(),
                    view.kind().to_string(),
                    view.entity().map(String::from),
                )
            })
            .collect(),
        workflow_count: app.workflows.len(),
    }
}
