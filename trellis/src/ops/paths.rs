//! Paths operation - resolved project locations.

use eyre::{Context, Result};
use trellis_codegen::paths::PathResolver;
use trellis_manifest::TrellisFile;

use crate::reports::PathsReport;

/// Execute the paths operation.
pub fn paths(file: &TrellisFile) -> Result<PathsReport> {
    let mut resolver = PathResolver::new(file.base_dir(), &file.app().paths)
        .wrap_err("Failed to resolve project paths")?;
    if let Some(manifest) = file.path().file_name() {
        resolver = resolver.with_manifest(manifest);
    }

    let locations = resolver
        .all()
        .into_iter()
        .map(|(category, path)| {
            let exists = path.exists();
            (category.to_string(), path, exists)
        })
        .collect();

    Ok(PathsReport {
        root: resolver.root().to_path_buf(),
        locations,
        watch: resolver.watch_paths(),
    })
}
