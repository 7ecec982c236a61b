use std::path::{Path, PathBuf};

use crate::{AppDefinition, Error, Result};

/// A `trellis.toml` on disk with both raw content and the parsed definition.
pub struct TrellisFile {
    path: PathBuf,
    content: String,
    app: AppDefinition,
}

impl TrellisFile {
    /// Open and parse a manifest file, merging its entity directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let app = AppDefinition::from_file(&path)?;

        Ok(Self { path, content, app })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that relative `[paths]` entries are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed application definition.
    pub fn app(&self) -> &AppDefinition {
        &self.app
    }

    /// Take the parsed application definition.
    pub fn into_app(self) -> AppDefinition {
        self.app
    }
}
