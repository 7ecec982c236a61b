//! The application definition and its parsing from `trellis.toml` / JSON.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    AppMeta, CodegenConfig, EntityDefinition, Error, FieldType, PathsConfig, Result,
    ViewDefinition, WorkflowDefinition, error::SourceContext, validate::ParseContext,
};

/// Default manifest filename.
pub const MANIFEST_FILENAME: &str = "trellis.toml";

/// Source format of a manifest or entity file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// Detect the format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Toml,
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(self, ctx: &SourceContext) -> Result<T> {
        match self {
            SourceFormat::Toml => toml::from_str(ctx.src()).map_err(|e| ctx.toml_error(e)),
            SourceFormat::Json => serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e)),
        }
    }
}

/// Root of a declarative application schema.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppDefinition {
    pub app: AppMeta,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub codegen: CodegenConfig,

    /// Entities in declaration order
    #[serde(default)]
    pub entities: IndexMap<String, EntityDefinition>,

    /// Views in declaration order
    #[serde(default)]
    pub views: IndexMap<String, ViewDefinition>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub workflows: IndexMap<String, WorkflowDefinition>,
}

impl AppDefinition {
    /// Create an empty application.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            app: AppMeta::new(name),
            paths: PathsConfig::default(),
            codegen: CodegenConfig::default(),
            entities: IndexMap::new(),
            views: IndexMap::new(),
            workflows: IndexMap::new(),
        }
    }

    /// Add an entity keyed by its name.
    pub fn with_entity(mut self, entity: EntityDefinition) -> Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    /// Add a view.
    pub fn with_view(mut self, name: impl Into<String>, view: ViewDefinition) -> Self {
        self.views.insert(name.into(), view);
        self
    }

    /// Add a workflow.
    pub fn with_workflow(mut self, mut workflow: WorkflowDefinition) -> Self {
        if workflow.name.is_empty() {
            workflow.name = format!("{}Workflow", workflow.entity);
        }
        self.workflows.insert(workflow.name.clone(), workflow);
        self
    }

    pub fn name(&self) -> &str {
        &self.app.name
    }

    pub fn entity(&self, name: &str) -> Option<&EntityDefinition> {
        self.entities.get(name)
    }

    /// The entity a view is bound to, if it exists.
    pub fn view_entity(&self, view: &ViewDefinition) -> Option<&EntityDefinition> {
        view.entity().and_then(|name| self.entities.get(name))
    }

    /// Views bound to `entity`, in declaration order.
    pub fn views_for_entity<'a>(
        &'a self,
        entity: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a ViewDefinition)> {
        self.views
            .iter()
            .filter(move |(_, view)| view.entity() == Some(entity))
    }

    /// Parse a manifest file.
    ///
    /// JSON is selected by a `.json` extension. Entity files found in the
    /// configured `paths.entities` directory (relative to the manifest) are
    /// merged before validation.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let filename = path.display().to_string();
        let format = SourceFormat::from_path(path);

        let mut app = parse_source(&content, &filename, format)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        app.merge_entity_dir(&base.join(&app.paths.entities))?;
        validate_app(&app, &content, &filename)?;
        Ok(app)
    }

    /// Parse a TOML manifest with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename, SourceFormat::Toml)
    }

    /// Parse a JSON manifest.
    pub fn from_json(content: &str) -> Result<Self> {
        parse_manifest(content, "trellis.json", SourceFormat::Json)
    }

    /// Merge one-file-per-entity definitions from `dir`, in file-name order.
    ///
    /// A missing directory is not an error.
    pub fn merge_entity_dir(&mut self, dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                matches!(
                    path.extension().and_then(|ext| ext.to_str()),
                    Some("toml" | "json")
                )
            })
            .collect();
        files.sort();

        for file in files {
            let entity = load_entity_file(&file)?;
            if self.entities.contains_key(&entity.name) {
                return Err(Box::new(Error::DuplicateEntity {
                    name: entity.name,
                    path: file,
                }));
            }
            tracing::debug!(entity = %entity.name, path = %file.display(), "merged entity file");
            self.entities.insert(entity.name.clone(), entity);
        }
        Ok(())
    }

    /// Fill definition names from their map keys.
    fn fill_names(&mut self) {
        for (name, entity) in self.entities.iter_mut() {
            entity.name = name.clone();
        }
        for (name, workflow) in self.workflows.iter_mut() {
            workflow.name = name.clone();
        }
    }
}

impl FromStr for AppDefinition {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILENAME, SourceFormat::Toml)
    }
}

fn load_entity_file(path: &Path) -> Result<EntityDefinition> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let ctx = SourceContext::new(content, path.display().to_string());
    let mut entity: EntityDefinition = SourceFormat::from_path(path).parse(&ctx)?;

    if entity.name.is_empty() {
        entity.name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
    }

    let parse_ctx = ParseContext::new(ctx.src(), ctx.filename());
    parse_ctx.validate_name(&entity.name, "entity")?;
    let fields_ctx = parse_ctx.push(&entity.name);
    for name in entity.fields.keys() {
        fields_ctx.validate_field_name(name)?;
    }
    Ok(entity)
}

fn parse_source(content: &str, filename: &str, format: SourceFormat) -> Result<AppDefinition> {
    let ctx = SourceContext::new(content, filename);
    let mut app: AppDefinition = format.parse(&ctx)?;
    app.fill_names();
    Ok(app)
}

/// Parse and validate a manifest from content.
pub fn parse_manifest(content: &str, filename: &str, format: SourceFormat) -> Result<AppDefinition> {
    let app = parse_source(content, filename, format)?;
    validate_app(&app, content, filename)?;
    Ok(app)
}

/// Structural validation after parsing.
fn validate_app(app: &AppDefinition, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let known: Vec<&str> = app.entities.keys().map(String::as_str).collect();

    for (name, entity) in &app.entities {
        ctx.validate_name(name, "entity")?;

        let entity_ctx = ctx.push(name);
        for (field_name, field) in &entity.fields {
            entity_ctx.validate_field_name(field_name)?;

            if field.field_type != FieldType::Relation {
                continue;
            }
            match field.to.as_deref() {
                None => {
                    return Err(ctx.source_context().validation_error(
                        format!(
                            "relation field '{}.{}' must declare its target with `to`",
                            name, field_name
                        ),
                        ctx.find_span(field_name),
                    ));
                }
                Some(to) if !app.entities.contains_key(to) => {
                    return Err(ctx.source_context().unknown_entity_error(
                        format!("relation field '{}.{}'", name, field_name),
                        to,
                        &known,
                        ctx.find_value_span("to", to),
                    ));
                }
                Some(_) => {}
            }
        }
    }

    for (name, view) in &app.views {
        ctx.validate_name(name, "view")?;

        match view.entity() {
            Some(entity) if !app.entities.contains_key(entity) => {
                return Err(ctx.source_context().unknown_entity_error(
                    format!("view '{}'", name),
                    entity,
                    &known,
                    ctx.find_value_span("entity", entity),
                ));
            }
            None if view.requires_entity() => {
                return Err(ctx.source_context().validation_error(
                    format!("{} view '{}' must declare an entity", view.kind(), name),
                    ctx.find_span(name),
                ));
            }
            _ => {}
        }
    }

    for (name, workflow) in &app.workflows {
        ctx.validate_name(name, "workflow")?;

        if !app.entities.contains_key(&workflow.entity) {
            return Err(ctx.source_context().unknown_entity_error(
                format!("workflow '{}'", name),
                &workflow.entity,
                &known,
                ctx.find_value_span("entity", &workflow.entity),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::ViewKind;

    const MANIFEST: &str = r#"
[app]
name = "tasks"

[entities.Task.fields]
id = { type = "uuid", auto = true }
title = { type = "string", required = true }
status = { type = "enum", options = ["todo", "in-progress", "done"], required = true }
priority = { type = "enum", values = ["low", "medium", "high"] }

[views.TaskList]
type = "list"
entity = "Task"

[views.TaskBoard]
type = "kanban"
entity = "Task"
groupBy = "priority"
"#;

    #[test]
    fn test_parse_manifest() {
        let app: AppDefinition = MANIFEST.parse().unwrap();

        assert_eq!(app.name(), "tasks");
        assert_eq!(app.app.version, "0.1.0");
        assert_eq!(app.codegen.extension, "jsx");

        let task = app.entity("Task").unwrap();
        assert_eq!(task.name, "Task");
        assert_eq!(
            task.fields.keys().collect::<Vec<_>>(),
            ["id", "title", "status", "priority"]
        );

        let kinds: Vec<_> = app.views.values().map(|v| v.kind()).collect();
        assert_eq!(kinds, vec![ViewKind::List, ViewKind::Kanban]);
        assert_eq!(app.views_for_entity("Task").count(), 2);
    }

    #[test]
    fn test_unknown_view_entity() {
        let src = r#"
[app]
name = "tasks"

[views.TaskList]
type = "list"
entity = "Tsk"
"#;
        let err = src.parse::<AppDefinition>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "view 'TaskList' references unknown entity 'Tsk'"
        );
        match *err {
            Error::UnknownEntity { span, .. } => assert!(span.is_some()),
            _ => panic!("Expected UnknownEntity"),
        }
    }

    #[test]
    fn test_view_without_entity() {
        let src = r#"
[app]
name = "tasks"

[views.TaskList]
type = "list"

[views.About]
type = "custom"
"#;
        let err = src.parse::<AppDefinition>().unwrap_err();
        assert_eq!(err.to_string(), "list view 'TaskList' must declare an entity");
    }

    #[test]
    fn test_relation_target_must_exist() {
        let src = r#"
[app]
name = "tasks"

[entities.Task.fields]
owner = { type = "relation", to = "User" }
"#;
        let err = src.parse::<AppDefinition>().unwrap_err();
        assert!(matches!(*err, Error::UnknownEntity { .. }));
    }

    #[test]
    fn test_reserved_field_name() {
        let src = r#"
[app]
name = "tasks"

[entities.Task.fields]
class = { type = "string" }
"#;
        let err = src.parse::<AppDefinition>().unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_parse_json_manifest() {
        let src = r#"{
  "app": { "name": "tasks" },
  "entities": {
    "Task": { "fields": { "title": { "type": "string" }, "due": { "type": "date" } } }
  },
  "views": { "TaskCalendar": { "type": "calendar", "entity": "Task", "dateField": "due" } }
}"#;
        let app = AppDefinition::from_json(src).unwrap();
        assert_eq!(
            app.entity("Task").unwrap().fields.keys().collect::<Vec<_>>(),
            ["title", "due"]
        );
        assert_eq!(app.views["TaskCalendar"].kind(), ViewKind::Calendar);
    }

    #[test]
    fn test_json_error_has_span() {
        let err = AppDefinition::from_json("{\n  \"app\": 1\n}").unwrap_err();
        match *err {
            Error::Json { span, .. } => assert!(span.is_some()),
            _ => panic!("Expected Json error"),
        }
    }

    #[test]
    fn test_from_file_merges_entity_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("trellis.toml"),
            "[app]\nname = \"crm\"\n\n[views.ContactList]\ntype = \"list\"\nentity = \"Contact\"\n",
        )
        .unwrap();
        fs::create_dir(temp.path().join("entities")).unwrap();
        fs::write(
            temp.path().join("entities/Contact.toml"),
            "[fields.name]\ntype = \"string\"\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("entities/Company.json"),
            r#"{ "fields": { "name": { "type": "string" } } }"#,
        )
        .unwrap();

        let app = AppDefinition::from_file(temp.path().join("trellis.toml")).unwrap();

        assert_eq!(
            app.entities.keys().collect::<Vec<_>>(),
            ["Company", "Contact"]
        );
    }

    #[test]
    fn test_from_file_duplicate_entity() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("trellis.toml"),
            "[app]\nname = \"crm\"\n\n[entities.Contact.fields]\nname = { type = \"string\" }\n",
        )
        .unwrap();
        fs::create_dir(temp.path().join("entities")).unwrap();
        fs::write(
            temp.path().join("entities/Contact.toml"),
            "[fields.email]\ntype = \"string\"\n",
        )
        .unwrap();

        let err = AppDefinition::from_file(temp.path().join("trellis.toml")).unwrap_err();
        assert!(matches!(*err, Error::DuplicateEntity { ref name, .. } if name == "Contact"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = AppDefinition::from_file("/nonexistent/trellis.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
