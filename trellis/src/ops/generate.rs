//! Generate operation - view modules from the schema.

use std::path::Path;

use eyre::{Context, Result};
use trellis_codegen::{
    BatchOutput, generate_all,
    paths::{PathCategory, PathResolver, view_file_name},
    pipeline::{CompilationContext, Pipeline, SnapshotPlugin},
};
use trellis_codegen_react::{ReactGenerator, RenderContext, template_loader, write_modules};
use trellis_manifest::TrellisFile;

use super::format_diagnostic;
use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Pipeline snapshots land here, under the project root.
const DEBUG_DIR: &str = ".trellis/debug";

/// Options for the generate operation.
#[derive(Debug, Default)]
pub struct GenerateOptions<'a> {
    /// Overrides `paths.output`.
    pub output: Option<&'a Path>,
    /// Only these views; every view when empty.
    pub views: &'a [String],
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Overwrite modules that already exist.
    pub force: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
    /// Overrides `codegen.runtime`.
    pub runtime: Option<&'a str>,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the schema, generates the requested views and
/// writes them with the no-clobber rule. A failing view never stops the
/// others; it is listed in the report.
pub fn generate(file: &TrellisFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let app = file.app();

    let mut resolver = PathResolver::new(file.base_dir(), &app.paths)
        .wrap_err("Failed to resolve project paths")?;
    if let Some(output) = opts.output {
        let output = std::path::absolute(output)
            .wrap_err_with(|| format!("Invalid output path {}", output.display()))?;
        resolver = resolver.with_output(output);
    }

    let debug_dir = resolver.root().join(DEBUG_DIR);
    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }

    let mut report = GenerateReport {
        app_name: app.app.name.clone(),
        app_version: app.app.version.clone(),
        errors: Vec::new(),
        warnings: Vec::new(),
        failures: Vec::new(),
        debug_dir: opts.visualize.then(|| debug_dir.clone()),
        result: None,
    };

    let mut ctx = CompilationContext::new(app.clone());
    let outcome = pipeline.run_with(&mut ctx);
    report.warnings = ctx.warnings().map(format_diagnostic).collect();
    report.errors = ctx.errors().map(format_diagnostic).collect();
    if let Err(err) = outcome {
        if report.errors.is_empty() {
            return Err(err.wrap_err("Pipeline failed"));
        }
        return Ok(report);
    }

    let mut context = RenderContext::from_config(&app.codegen);
    if let Some(runtime) = opts.runtime {
        context.runtime_module = runtime.to_string();
    }
    let extension = context.extension.clone();
    let loader = template_loader()
        .with_extension(&extension)
        .with_templates_dir(resolver.resolve(PathCategory::Templates))
        .with_views_dir(resolver.resolve(PathCategory::Views));
    let generator = ReactGenerator::new(context)
        .with_loader(loader)
        .with_app(&app.app)
        .wrap_err("Failed to serialize [app] metadata")?;

    let output = generate_all(&generator, app, opts.views);
    report.failures = failures(&output);

    let output_dir = resolver.resolve(PathCategory::Output);
    report.result = Some(if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: output
                .generated
                .iter()
                .map(|view| PreviewFile {
                    path: display_path(&output_dir, &view.name, &extension),
                    content: view.source.clone(),
                })
                .collect(),
        })
    } else {
        let results = write_modules(&output.generated, &output_dir, &extension, opts.force)?;
        let (written, skipped): (Vec<_>, Vec<_>) =
            results.into_iter().partition(|(_, result)| result.is_written());

        GenerationResult::Written(WrittenResult {
            output_dir,
            written: file_names(written, &extension),
            skipped: file_names(skipped, &extension),
        })
    });

    Ok(report)
}

fn failures(output: &BatchOutput) -> Vec<(String, String)> {
    output
        .failures
        .iter()
        .map(|failure| (failure.name.clone(), failure.error.to_string()))
        .collect()
}

fn display_path(output_dir: &Path, view: &str, extension: &str) -> String {
    output_dir
        .join(view_file_name(view, extension))
        .display()
        .to_string()
}

fn file_names<T>(results: Vec<(String, T)>, extension: &str) -> Vec<String> {
    results
        .into_iter()
        .map(|(name, _)| view_file_name(&name, extension))
        .collect()
}
