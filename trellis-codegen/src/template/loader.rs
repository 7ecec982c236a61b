//! Template resolution through a fallback chain.
//!
//! [`TemplateLoader::load`] never fails. Resolution order, first match wins:
//!
//! 1. app-owned override `<templates>/<name>.<ext>`
//! 2. built-in skeleton shipped with the backend
//! 3. static markup `<views>/<name>.html`, with `{{variable}}` tokens filled
//!    from the [`TemplateContext`]
//! 4. a backend fallback for well-known names, else a generic placeholder
//!
//! Unreadable files are logged and skipped.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

/// Built-in templates a code generation backend ships with.
pub trait TemplateSet: Send + Sync {
    /// Skeleton template for `name`, if the backend ships one.
    fn skeleton(&self, name: &str) -> Option<&'static str>;

    /// Hard-coded fallback for a well-known name (e.g. `not-found`).
    fn fallback(&self, name: &str) -> Option<String>;

    /// Minimal placeholder for any other name.
    fn placeholder(&self, name: &str) -> String;
}

/// Where a loaded template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Override(PathBuf),
    Builtin,
    Markup(PathBuf),
    Fallback,
    Placeholder,
}

impl TemplateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateSource::Override(_) => "override",
            TemplateSource::Builtin => "builtin",
            TemplateSource::Markup(_) => "markup",
            TemplateSource::Fallback => "fallback",
            TemplateSource::Placeholder => "placeholder",
        }
    }
}

/// A resolved template.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTemplate {
    pub name: String,
    pub source: TemplateSource,
    pub text: String,
}

/// Values available to `{{variable}}` tokens in static markup.
///
/// Lookup order: `values`, then the `view` object, then the `app` object.
/// Dotted names (`{{app.name}}`, `{{route}}`) address nested keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    pub values: IndexMap<String, String>,
    pub view: Value,
    pub app: Value,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with_view(mut self, view: Value) -> Self {
        self.view = view;
        self
    }

    pub fn with_app(mut self, app: Value) -> Self {
        self.app = app;
        self
    }

    /// Look up a variable through the three layers.
    pub fn lookup(&self, name: &str) -> Option<String> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        lookup_path(&self.view, name)
            .or_else(|| lookup_path(&self.app, name))
            .or_else(|| {
                name.strip_prefix("view.")
                    .and_then(|rest| lookup_path(&self.view, rest))
            })
            .or_else(|| {
                name.strip_prefix("app.")
                    .and_then(|rest| lookup_path(&self.app, rest))
            })
    }

    /// Replace every `{{variable}}` with its value; unmatched tokens stay.
    pub fn render_markup(&self, markup: &str) -> String {
        let mut out = String::with_capacity(markup.len());
        let mut rest = markup;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let name = after_open[..end].trim();
            match self.lookup(name) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

fn lookup_path(root: &Value, path: &str) -> Option<String> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    match current {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(current.to_string()),
        other => serde_json::to_string(other).ok(),
    }
}

/// Resolves named templates through the fallback chain.
pub struct TemplateLoader {
    set: Box<dyn TemplateSet>,
    templates_dir: Option<PathBuf>,
    views_dir: Option<PathBuf>,
    extension: String,
}

impl TemplateLoader {
    /// Create a loader backed only by the backend's built-in templates.
    pub fn new(set: impl TemplateSet + 'static) -> Self {
        Self {
            set: Box::new(set),
            templates_dir: None,
            views_dir: None,
            extension: "jsx".to_string(),
        }
    }

    /// Directory of app-owned template overrides.
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    /// Directory of static markup files.
    pub fn with_views_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.views_dir = Some(dir.into());
        self
    }

    /// Extension of override templates, without the dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Resolve `name` and return its text.
    pub fn load_text(&self, name: &str, ctx: &TemplateContext) -> String {
        self.load(name, ctx).text
    }

    /// Resolve `name` through the fallback chain.
    pub fn load(&self, name: &str, ctx: &TemplateContext) -> LoadedTemplate {
        let (source, text) = self.resolve(name, ctx);
        tracing::debug!(template = name, source = source.as_str(), "resolved template");
        LoadedTemplate {
            name: name.to_string(),
            source,
            text,
        }
    }

    fn resolve(&self, name: &str, ctx: &TemplateContext) -> (TemplateSource, String) {
        if let Some(dir) = &self.templates_dir {
            let path = dir.join(format!("{}.{}", name, self.extension));
            if let Some(text) = read_optional(&path) {
                return (TemplateSource::Override(path), text);
            }
        }

        if let Some(text) = self.set.skeleton(name) {
            return (TemplateSource::Builtin, text.to_string());
        }

        if let Some(dir) = &self.views_dir {
            let path = dir.join(format!("{}.html", name));
            if let Some(markup) = read_optional(&path) {
                return (TemplateSource::Markup(path), ctx.render_markup(&markup));
            }
        }

        match self.set.fallback(name) {
            Some(text) => (TemplateSource::Fallback, text),
            None => (TemplateSource::Placeholder, self.set.placeholder(name)),
        }
    }
}

/// Read a file if it exists; read failures are logged and treated as absent.
fn read_optional(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable template");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    struct Builtins;

    impl TemplateSet for Builtins {
        fn skeleton(&self, name: &str) -> Option<&'static str> {
            (name == "list-view").then_some("builtin list")
        }

        fn fallback(&self, name: &str) -> Option<String> {
            (name == "not-found").then(|| "fallback not-found".to_string())
        }

        fn placeholder(&self, name: &str) -> String {
            format!("placeholder {}", name)
        }
    }

    #[test]
    fn test_override_wins_over_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("list-view.jsx"), "custom list").unwrap();

        let loader = TemplateLoader::new(Builtins).with_templates_dir(temp.path());
        let loaded = loader.load("list-view", &TemplateContext::new());

        assert_eq!(loaded.text, "custom list");
        assert!(matches!(loaded.source, TemplateSource::Override(_)));
    }

    #[test]
    fn test_builtin_when_no_override() {
        let temp = TempDir::new().unwrap();
        let loader = TemplateLoader::new(Builtins).with_templates_dir(temp.path());

        let loaded = loader.load("list-view", &TemplateContext::new());
        assert_eq!(loaded.source, TemplateSource::Builtin);
        assert_eq!(loaded.text, "builtin list");
    }

    #[test]
    fn test_markup_with_context_layers() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("About.html"),
            "<h1>{{ title }}</h1><p>{{route}} {{name}} {{version}} {{missing}}</p>",
        )
        .unwrap();

        let ctx = TemplateContext::new()
            .with_value("title", "About us")
            .with_view(json!({ "title": "ignored", "route": "/about" }))
            .with_app(json!({ "name": "tasks", "version": "0.1.0" }));
        let loader = TemplateLoader::new(Builtins).with_views_dir(temp.path());
        let loaded = loader.load("About", &ctx);

        assert!(matches!(loaded.source, TemplateSource::Markup(_)));
        assert_eq!(
            loaded.text,
            "<h1>About us</h1><p>/about tasks 0.1.0 {{missing}}</p>"
        );
    }

    #[test]
    fn test_fallback_and_placeholder() {
        let loader = TemplateLoader::new(Builtins)
            .with_templates_dir("/nonexistent/templates")
            .with_views_dir("/nonexistent/views");

        let ctx = TemplateContext::new();
        assert_eq!(loader.load_text("not-found", &ctx), "fallback not-found");

        let loaded = loader.load("Reports", &ctx);
        assert_eq!(loaded.source, TemplateSource::Placeholder);
        assert_eq!(loaded.text, "placeholder Reports");
    }

    #[test]
    fn test_render_markup_unterminated() {
        let ctx = TemplateContext::new().with_value("a", "1");
        assert_eq!(ctx.render_markup("{{a}} {{b"), "1 {{b");
    }

    #[test]
    fn test_lookup_prefixed_paths() {
        let ctx = TemplateContext::new().with_app(json!({ "name": "tasks" }));
        assert_eq!(ctx.lookup("app.name").as_deref(), Some("tasks"));
        assert_eq!(ctx.lookup("view.name"), None);
    }
}
