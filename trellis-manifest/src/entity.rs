//! Entity definitions and their UI configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::{FieldDefinition, FieldType, is_system_field};

/// Field names promoted to a title slot when no primary display field is set.
const TITLE_LIKE_FIELDS: &[&str] = &["title", "name", "label", "subject", "summary"];

/// A named record type with typed fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDefinition {
    /// Entity name, filled from the manifest key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: IndexMap<String, FieldDefinition>,

    /// Named actions that commit a fixed field-update map
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub behaviors: IndexMap<String, Behavior>,

    #[serde(default)]
    pub permissions: Permissions,

    #[serde(default)]
    pub ui: EntityUi,
}

impl EntityDefinition {
    /// Create an empty entity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a field, keeping declaration order.
    pub fn field(mut self, name: impl Into<String>, field: FieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Look up a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Whether `name` is a system field of this entity.
    ///
    /// Unknown names fall back to the reserved-name rule.
    pub fn is_system(&self, name: &str) -> bool {
        match self.fields.get(name) {
            Some(field) => is_system_field(name, field),
            None => crate::field::SYSTEM_FIELD_NAMES.contains(&name),
        }
    }

    /// Field names in declaration order, without `id`.
    ///
    /// This is the default column and display order.
    pub fn display_field_names(&self) -> Vec<String> {
        self.fields
            .keys()
            .filter(|name| name.as_str() != "id")
            .cloned()
            .collect()
    }

    /// Non-system field names in declaration order.
    pub fn editable_field_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(name, field)| !is_system_field(name, field))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Enum fields in declaration order.
    pub fn enum_fields(&self) -> impl Iterator<Item = (&String, &FieldDefinition)> {
        self.fields.iter().filter(|(_, field)| field.is_enum())
    }

    /// The field shown as a record's title.
    ///
    /// Prefers the configured primary display field, then a conventional
    /// title-like name, then the first string field.
    pub fn title_field(&self) -> Option<&str> {
        if let Some(primary) = self.ui.display.primary.as_deref() {
            if self.fields.contains_key(primary) {
                return Some(primary);
            }
        }

        TITLE_LIKE_FIELDS
            .iter()
            .find(|name| self.fields.contains_key(**name))
            .copied()
            .or_else(|| {
                self.fields
                    .iter()
                    .find(|(name, field)| {
                        field.field_type == FieldType::String && !is_system_field(name, field)
                    })
                    .map(|(name, _)| name.as_str())
            })
    }
}

/// A named action committing a field-update map (e.g. "complete" sets
/// `status = "done"`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Behavior {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Field name to the value it is set to
    #[serde(default)]
    pub updates: IndexMap<String, Value>,
}

/// Roles allowed to perform each action. Empty means unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub create: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub read: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete: Vec<String>,
}

impl Permissions {
    /// Whether an action is restricted to specific roles.
    pub fn is_restricted(&self, action: &str) -> bool {
        let roles = match action {
            "create" => &self.create,
            "read" => &self.read,
            "update" => &self.update,
            "delete" => &self.delete,
            _ => return false,
        };
        !roles.is_empty()
    }
}

/// Presentation configuration of an entity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityUi {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub detail: DetailConfig,
}

/// How a single record is summarised.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
}

/// Color-coding driven by one field's value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    pub field: String,
    /// Field value to color name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub map: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filterable: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub searchable: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<DetailSection>,
}

/// A titled group of fields on a detail page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailSection {
    pub title: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> EntityDefinition {
        EntityDefinition::new("Task")
            .field("id", FieldDefinition::new(FieldType::Uuid).auto())
            .field("title", FieldDefinition::new(FieldType::String).required())
            .field(
                "status",
                FieldDefinition::enumeration(["todo", "in-progress", "done"]).required(),
            )
            .field("createdAt", FieldDefinition::new(FieldType::Datetime))
    }

    #[test]
    fn test_display_field_names_keep_order_without_id() {
        assert_eq!(
            task().display_field_names(),
            vec!["title", "status", "createdAt"]
        );
    }

    #[test]
    fn test_editable_field_names_skip_system() {
        assert_eq!(task().editable_field_names(), vec!["title", "status"]);
    }

    #[test]
    fn test_title_field() {
        assert_eq!(task().title_field(), Some("title"));

        let mut entity = task();
        entity.ui.display.primary = Some("status".into());
        assert_eq!(entity.title_field(), Some("status"));

        let untitled = EntityDefinition::new("Note")
            .field("body", FieldDefinition::new(FieldType::Text))
            .field("author", FieldDefinition::new(FieldType::String));
        assert_eq!(untitled.title_field(), Some("author"));
    }

    #[test]
    fn test_permissions() {
        let permissions = Permissions {
            delete: vec!["admin".into()],
            ..Default::default()
        };
        assert!(permissions.is_restricted("delete"));
        assert!(!permissions.is_restricted("update"));
        assert!(!permissions.is_restricted("archive"));
    }

    #[test]
    fn test_deserialize_ui_and_behaviors() {
        let entity: EntityDefinition = toml::from_str(
            r#"
            [fields.title]
            type = "string"

            [fields.status]
            type = "enum"
            options = ["todo", "done"]

            [behaviors.complete]
            label = "Mark done"
            updates = { status = "done" }

            [ui.display]
            primary = "title"
            color = { field = "status" }

            [ui.list]
            searchable = ["title"]
            "#,
        )
        .unwrap();

        assert_eq!(entity.fields.keys().collect::<Vec<_>>(), ["title", "status"]);
        assert_eq!(
            entity.behaviors["complete"].updates["status"],
            Value::String("done".into())
        );
        assert_eq!(entity.ui.display.color.as_ref().unwrap().field, "status");
        assert_eq!(entity.ui.list.searchable, vec!["title"]);
    }
}
