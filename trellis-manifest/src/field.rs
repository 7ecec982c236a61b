//! Field definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field names that are always treated as system-managed.
pub const SYSTEM_FIELD_NAMES: &[&str] = &["id", "createdAt", "updatedAt", "created_at", "updated_at"];

/// Primitive type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Text,
    Number,
    Integer,
    Boolean,
    Date,
    Datetime,
    Json,
    Uuid,
    Enum,
    Relation,
}

impl FieldType {
    /// Returns the type identifier as written in the manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Datetime => "datetime",
            FieldType::Json => "json",
            FieldType::Uuid => "uuid",
            FieldType::Enum => "enum",
            FieldType::Relation => "relation",
        }
    }

    /// Whether values of this type are numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Integer)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed field of an entity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub unique: bool,

    /// Default value used to seed create forms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Allowed values of an enum field
    #[serde(default, alias = "values", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    /// Target entity of a relation field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Whether a relation holds many references
    #[serde(default)]
    pub many: bool,

    /// Display label (defaults to the capitalized field name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Presentation hint for string fields (e.g. "email", "url")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Value is produced by the storage layer
    #[serde(default, alias = "generated")]
    pub auto: bool,
}

impl FieldDefinition {
    /// Create a field of the given type with every attribute defaulted.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            unique: false,
            default: None,
            options: Vec::new(),
            to: None,
            many: false,
            label: None,
            format: None,
            auto: false,
        }
    }

    /// Create an enum field with the given options.
    pub fn enumeration<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field = Self::new(FieldType::Enum);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    /// Create a relation field pointing at `to`.
    pub fn relation(to: impl Into<String>) -> Self {
        let mut field = Self::new(FieldType::Relation);
        field.to = Some(to.into());
        field
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the field as storage-generated.
    pub fn auto(mut self) -> Self {
        self.auto = true;
        self
    }

    pub fn is_enum(&self) -> bool {
        self.field_type == FieldType::Enum
    }

    /// Whether this string field should be edited as an email address.
    ///
    /// Honors an explicit `format`, otherwise falls back to the field name.
    pub fn is_email(&self, name: &str) -> bool {
        if self.field_type != FieldType::String {
            return false;
        }
        match self.format.as_deref() {
            Some(format) => format == "email",
            None => name.to_lowercase().contains("email"),
        }
    }
}

/// Whether a field is system-managed: auto-generated or one of the reserved
/// bookkeeping names.
pub fn is_system_field(name: &str, field: &FieldDefinition) -> bool {
    field.auto || SYSTEM_FIELD_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_enum_values_alias() {
        let field: FieldDefinition =
            toml::from_str(r#"type = "enum"
values = ["low", "high"]"#)
                .unwrap();
        assert!(field.is_enum());
        assert_eq!(field.options, vec!["low", "high"]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let field: FieldDefinition = toml::from_str(r#"type = "string""#).unwrap();
        assert!(!field.required);
        assert!(!field.many);
        assert!(field.default.is_none());
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_system_fields() {
        let plain = FieldDefinition::new(FieldType::String);
        assert!(is_system_field("id", &plain));
        assert!(is_system_field("createdAt", &plain));
        assert!(is_system_field("updatedAt", &plain));
        assert!(!is_system_field("title", &plain));
        assert!(is_system_field("slug", &FieldDefinition::new(FieldType::String).auto()));
    }

    #[test]
    fn test_is_email() {
        let field = FieldDefinition::new(FieldType::String);
        assert!(field.is_email("contactEmail"));
        assert!(!field.is_email("title"));

        let mut explicit = FieldDefinition::new(FieldType::String);
        explicit.format = Some("url".into());
        assert!(!explicit.is_email("email"));
    }
}
