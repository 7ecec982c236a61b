//! `[app]`, `[paths]` and `[codegen]` sections.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default module the generated views import their runtime primitives from.
pub const DEFAULT_RUNTIME_MODULE: &str = "@trellis/runtime";

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppMeta {
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl AppMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            description: None,
        }
    }
}

/// Logical source and output locations, relative to the manifest directory.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// One file per entity definition
    pub entities: PathBuf,
    /// App-owned skeleton overrides
    pub templates: PathBuf,
    pub extensions: PathBuf,
    /// Static markup used by the template fallback chain
    pub views: PathBuf,
    pub components: PathBuf,
    /// Root of the generated modules
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            entities: PathBuf::from("entities"),
            templates: PathBuf::from("templates"),
            extensions: PathBuf::from("extensions"),
            views: PathBuf::from("views"),
            components: PathBuf::from("components"),
            output: PathBuf::from("src/generated"),
        }
    }
}

/// Code generation settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Module providing hooks and UI primitives to generated views
    pub runtime: String,
    /// File extension of generated modules, without the dot
    pub extension: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME_MODULE.to_string(),
            extension: "jsx".to_string(),
        }
    }
}
