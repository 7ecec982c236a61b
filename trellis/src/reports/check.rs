//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// What the schema declares.
    pub summary: SchemaSummary,
}

/// Application metadata and declaration counts.
#[derive(Debug, Default)]
pub struct SchemaSummary {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub entities: Vec<String>,
    /// `(name, kind, entity)` in declaration order
    pub views: Vec<(String, String, Option<String>)>,
    pub workflow_count: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        self.summary.render(out);
    }
}

impl SchemaSummary {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("  {} v{}", self.name, self.version));
        if let Some(desc) = &self.description {
            out.preformatted(&format!("  {}", desc));
        }
        out.newline();

        out.preformatted(&format!(
            "  {}: {}",
            plural(self.entities.len(), "entity", "entities"),
            self.entities.join(", ")
        ));
        out.preformatted(&format!(
            "  {}",
            plural(self.workflow_count, "workflow", "workflows")
        ));
        out.preformatted(&format!("  {}:", plural(self.views.len(), "view", "views")));
        for (name, kind, entity) in &self.views {
            match entity {
                Some(entity) => out.preformatted(&format!("    {} ({}, {})", name, kind, entity)),
                None => out.preformatted(&format!("    {} ({})", name, kind)),
            }
        }
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
