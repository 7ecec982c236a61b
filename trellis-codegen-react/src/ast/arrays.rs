//! JavaScript array literal builder.

use super::{js_string, objects::JsObject};

/// An element in a JavaScript array literal.
#[derive(Debug, Clone)]
pub enum ArrayElement {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// An object literal, rendered inline.
    Object(JsObject),
}

impl ArrayElement {
    fn build(&self) -> String {
        match self {
            ArrayElement::String(s) => js_string(s),
            ArrayElement::Raw(s) => s.clone(),
            ArrayElement::Object(obj) => obj.build_inline(),
        }
    }
}

/// Builder for JavaScript array literals.
#[derive(Debug, Clone, Default)]
pub struct JsArray {
    elements: Vec<ArrayElement>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array from string values (will be quoted).
    pub fn from_strings<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter
                .into_iter()
                .map(|s| ArrayElement::String(s.into()))
                .collect(),
        }
    }

    /// Add a string element (will be quoted).
    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::String(value.into()));
        self
    }

    /// Add a raw expression element (will not be quoted).
    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::Raw(value.into()));
        self
    }

    /// Add an object element.
    pub fn object(mut self, value: JsObject) -> Self {
        self.elements.push(ArrayElement::Object(value));
        self
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Build the array literal on a single line.
    pub fn build(&self) -> String {
        let elements_str = self
            .elements
            .iter()
            .map(ArrayElement::build)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", elements_str)
    }

    /// Build the array with one element per line.
    pub fn build_multiline(&self) -> String {
        if self.elements.is_empty() {
            return "[]".to_string();
        }

        let mut out = String::from("[\n");
        for element in &self.elements {
            out.push_str("  ");
            out.push_str(&element.build());
            out.push_str(",\n");
        }
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        assert_eq!(JsArray::new().build(), "[]");
        assert_eq!(JsArray::new().build_multiline(), "[]");
    }

    #[test]
    fn test_string_array() {
        let arr = JsArray::from_strings(["todo", "in-progress"]).build();
        assert_eq!(arr, "[\"todo\", \"in-progress\"]");
    }

    #[test]
    fn test_mixed_array() {
        let arr = JsArray::new().string("name").raw("123").build();
        assert_eq!(arr, "[\"name\", 123]");
    }

    #[test]
    fn test_multiline_objects() {
        let arr = JsArray::new()
            .object(JsObject::new().string("id", "low"))
            .object(JsObject::new().string("id", "high"))
            .build_multiline();
        assert_eq!(arr, "[\n  { id: \"low\" },\n  { id: \"high\" },\n]");
    }
}
