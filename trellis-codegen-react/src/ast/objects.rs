//! JavaScript object literal builder.

use serde_json::Value;
use trellis_codegen::builder::CodeBuilder;

use super::{arrays::JsArray, js_string, property_key};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
    /// An array literal.
    Array(JsArray),
}

impl PropertyValue {
    fn inline(&self) -> String {
        match self {
            PropertyValue::String(s) => js_string(s),
            PropertyValue::Raw(s) => s.clone(),
            PropertyValue::Object(obj) => obj.build_inline(),
            PropertyValue::Array(arr) => arr.build(),
        }
    }
}

/// Builder for JavaScript object literals.
///
/// Keys that are not valid identifiers are quoted when rendered.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
        self
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::String(value.into()))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, PropertyValue::Raw(value.into()))
    }

    /// Add a property with a nested object value.
    pub fn object(self, key: impl Into<String>, value: JsObject) -> Self {
        self.push(key, PropertyValue::Object(value))
    }

    /// Add an array property.
    pub fn array(self, key: impl Into<String>, value: JsArray) -> Self {
        self.push(key, PropertyValue::Array(value))
    }

    /// Add a property with a JSON value (converted to a JavaScript literal).
    pub fn json(self, key: impl Into<String>, value: &Value) -> Self {
        match value {
            Value::String(s) => self.string(key, s),
            other => self.raw(key, other.to_string()),
        }
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the object literal to a CodeBuilder, one property per line.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.properties.is_empty() {
            return builder.raw("{}");
        }

        let builder = builder.line("{").indent();
        let builder = self.render_properties(builder);
        builder.dedent().raw("}")
    }

    fn render_properties(&self, builder: CodeBuilder) -> CodeBuilder {
        self.properties
            .iter()
            .fold(builder, |b, prop| match &prop.value {
                PropertyValue::Object(obj) if !obj.is_empty() => {
                    let b = b.line(&format!("{}: {{", property_key(&prop.key))).indent();
                    let b = obj.render_properties(b);
                    b.dedent().line("},")
                }
                value => b.line(&format!("{}: {},", property_key(&prop.key), value.inline())),
            })
    }

    /// Build the object as a multi-line string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::jsx()).build()
    }

    /// Build the object on a single line (e.g. `{ id: "low", title: "Low" }`).
    pub fn build_inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }

        let properties = self
            .properties
            .iter()
            .map(|prop| format!("{}: {}", property_key(&prop.key), prop.value.inline()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", properties)
    }
}
