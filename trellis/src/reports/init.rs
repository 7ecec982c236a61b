//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project initialisation.
#[derive(Debug)]
pub struct InitReport {
    /// Manifest location.
    pub manifest: PathBuf,
    /// Project directory, relative to where `init` ran.
    pub project_dir: PathBuf,
    /// Starter used for the manifest.
    pub starter: String,
    /// False when a manifest already existed and was left untouched.
    pub created: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.created {
            out.warning(&format!(
                "{} already exists, leaving it untouched",
                self.manifest.display()
            ));
            return;
        }

        out.preformatted(&format!(
            "Created {} ({} starter)",
            self.manifest.display(),
            self.starter
        ));
        out.newline();
        out.preformatted("Next steps:");
        if self.project_dir != PathBuf::from(".") {
            out.preformatted(&format!("  cd {}", self.project_dir.display()));
        }
        out.preformatted("  trellis check");
        out.preformatted("  trellis generate");
    }
}
