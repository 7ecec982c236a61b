//! Resolution of the configured source and output locations.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use trellis_manifest::PathsConfig;

/// A logical location category from the `[paths]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathCategory {
    Entities,
    Templates,
    Extensions,
    Views,
    Components,
    Output,
}

impl PathCategory {
    pub const ALL: [PathCategory; 6] = [
        PathCategory::Entities,
        PathCategory::Templates,
        PathCategory::Extensions,
        PathCategory::Views,
        PathCategory::Components,
        PathCategory::Output,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathCategory::Entities => "entities",
            PathCategory::Templates => "templates",
            PathCategory::Extensions => "extensions",
            PathCategory::Views => "views",
            PathCategory::Components => "components",
            PathCategory::Output => "output",
        }
    }

    /// Whether changes under this location should trigger regeneration.
    pub fn is_watched(&self) -> bool {
        matches!(
            self,
            PathCategory::Entities
                | PathCategory::Templates
                | PathCategory::Extensions
                | PathCategory::Views
        )
    }
}

impl fmt::Display for PathCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps logical categories to absolute locations under a project root.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResolver {
    root: PathBuf,
    paths: PathsConfig,
    manifest: Option<PathBuf>,
}

impl PathResolver {
    /// Create a resolver rooted at `root` (made absolute against the
    /// current directory).
    pub fn new(root: impl AsRef<Path>, paths: &PathsConfig) -> std::io::Result<Self> {
        Ok(Self {
            root: std::path::absolute(root.as_ref())?,
            paths: paths.clone(),
            manifest: None,
        })
    }

    /// Record the manifest file so it is part of the watch list.
    pub fn with_manifest(mut self, manifest: impl AsRef<Path>) -> Self {
        self.manifest = Some(self.root.join(manifest.as_ref()));
        self
    }

    /// Override the generated-output root.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.paths.output = output.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a category. Absolute configured paths are kept.
    pub fn resolve(&self, category: PathCategory) -> PathBuf {
        let relative = match category {
            PathCategory::Entities => &self.paths.entities,
            PathCategory::Templates => &self.paths.templates,
            PathCategory::Extensions => &self.paths.extensions,
            PathCategory::Views => &self.paths.views,
            PathCategory::Components => &self.paths.components,
            PathCategory::Output => &self.paths.output,
        };
        self.root.join(relative)
    }

    /// Every category with its resolved location.
    pub fn all(&self) -> Vec<(PathCategory, PathBuf)> {
        PathCategory::ALL
            .iter()
            .map(|category| (*category, self.resolve(*category)))
            .collect()
    }

    /// Locations whose changes should trigger regeneration.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = PathCategory::ALL
            .iter()
            .filter(|category| category.is_watched())
            .map(|category| self.resolve(*category))
            .collect();
        paths.extend(self.manifest.clone());
        paths
    }

    /// Output file of a generated view module.
    pub fn view_output_path(&self, view_name: &str, extension: &str) -> PathBuf {
        self.resolve(PathCategory::Output)
            .join(view_file_name(view_name, extension))
    }
}

/// File name of a generated view module (e.g. `TaskList.jsx`).
pub fn view_file_name(view_name: &str, extension: &str) -> String {
    format!("{}.{}", trellis_core::to_pascal_case(view_name), extension)
}
