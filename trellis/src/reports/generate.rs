//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from view generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Application name from the manifest.
    pub app_name: String,

    /// Application version from the manifest.
    pub app_version: String,

    /// Error diagnostics that stopped generation.
    pub errors: Vec<String>,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Views that failed to generate, with the reason.
    pub failures: Vec<(String, String)>,

    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,

    /// Generation result, absent when the pipeline rejected the schema.
    pub result: Option<GenerationResult>,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Modules were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when modules were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Newly written module files.
    pub written: Vec<String>,
    /// Existing module files left untouched.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Modules that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A module in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Output path.
    pub path: String,
    /// Module source.
    pub content: String,
}

impl GenerateReport {
    /// Whether every requested view was generated.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.failures.is_empty()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(debug_dir) = &self.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            Some(GenerationResult::Written(written)) => self.render_written(out, written),
            Some(GenerationResult::Preview(preview)) => self.render_preview(out, preview),
            None => {}
        }

        if !self.failures.is_empty() {
            out.newline();
            out.section(&format!("Failed views ({})", self.failures.len()));
            for (name, reason) in &self.failures {
                out.failed_item(&format!("{}: {}", name, reason));
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!("{} v{}", self.app_name, self.app_version));
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for file in &written.written {
                out.added_item(file);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Unchanged (already exists, use --force to overwrite)");
            for file in &written.skipped {
                out.skipped_item(file);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        let count = preview.files.len();
        out.preformatted(&format!(
            "{} module{} would be generated",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}
