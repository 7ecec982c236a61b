//! Init operation - starter manifest.

use std::path::Path;

use eyre::{Context, Result};
use trellis_core::File;
use trellis_manifest::MANIFEST_FILENAME;

use crate::{reports::InitReport, starter::Starter};

/// Execute the init operation.
///
/// Writes `trellis.toml` into `dir` from `starter`. An existing manifest is
/// never overwritten.
pub fn init(name: &str, dir: &Path, starter: Starter) -> Result<InitReport> {
    let manifest = dir.join(MANIFEST_FILENAME);
    let result = File::new(&manifest, starter.manifest(name))
        .write()
        .wrap_err_with(|| format!("Failed to write {}", manifest.display()))?;

    tracing::debug!(path = %manifest.display(), ?result, "wrote starter manifest");

    Ok(InitReport {
        manifest,
        project_dir: dir.to_path_buf(),
        starter: starter.label().to_string(),
        created: result.is_written(),
    })
}
