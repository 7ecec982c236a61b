//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the source content, filename and the current path through the
/// manifest so nested validation can report where it is.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "trellis.toml");
/// ctx.validate_name("TaskList", "view")?;
///
/// let fields = ctx.push("Task");
/// fields.validate_field_name("dueDate")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Task", "fields"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'Task'" or just "entity" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Find the span of a `key = "value"` assignment's value.
    pub fn find_value_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Validate a view or entity name.
    ///
    /// These become component and module names, so dashes are accepted and
    /// converted during generation.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        self.check(name, kind, validate_identifier(name, true))
    }

    /// Validate a field name.
    ///
    /// Field names are emitted verbatim as object keys and property accesses,
    /// so they must be plain identifiers.
    pub fn validate_field_name(&self, name: &str) -> Result<()> {
        self.check(name, "field", validate_identifier(name, false))
    }

    fn check(&self, name: &str, kind: &str, reason: Option<&'static str>) -> Result<()> {
        if is_js_reserved(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = reason {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// JavaScript reserved words that cannot be used as identifiers
pub(crate) const JS_RESERVED: &[&str] = &[
    // Keywords
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
    "instanceof", "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var",
    "void", "while", "with", "yield",
    // Strict mode and future reserved
    "enum", "implements", "interface", "let", "package", "private", "protected", "public",
    "static", "await",
    // Literals
    "null", "true", "false",
];

/// Check if a name is a JavaScript reserved word
pub(crate) fn is_js_reserved(name: &str) -> bool {
    JS_RESERVED.contains(&name)
}

/// Find the span of a name in the manifest source.
///
/// Searches TOML table headers (`.name]`, `.name.`), inline tables
/// (`{ name =`, `, name =`) and JSON object keys (`"name":`).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table headers, skip the leading dot
    let header_patterns = [format!(".{}]", name), format!(".{}.", name)];
    for pattern in &header_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    let inline_patterns = [
        (format!("{{ {} ", name), 2usize),
        (format!("{{ {}=", name), 2usize),
        (format!("{{{}=", name), 1usize),
        (format!(", {} ", name), 2usize),
        (format!(", {}=", name), 2usize),
        (format!(",{}=", name), 1usize),
    ];
    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    // Bare key at the start of a line
    let line_key = format!("\n{} =", name);
    if let Some(pos) = src.find(&line_key) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    let json_key = format!("\"{}\":", name);
    if let Some(pos) = src.find(&json_key) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    None
}

/// Find the span of the quoted value in `key = "value"` (TOML) or
/// `"key": "value"` (JSON).
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let candidates = [
        format!("{} = \"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("\"{}\": \"{}\"", key, value),
        format!("\"{}\":\"{}\"", key, value),
    ];
    for pattern in &candidates {
        if let Some(pos) = src.find(pattern.as_str()) {
            let start = pos + pattern.len() - value.len() - 1;
            return Some(SourceSpan::from((start, value.len())));
        }
    }
    None
}

/// Validate that a name is a valid JavaScript identifier.
///
/// Returns None if valid, Some(reason) if invalid. With `allow_dashes`,
/// single inner dashes are accepted (`task-board`).
pub(crate) fn validate_identifier(name: &str, allow_dashes: bool) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, `_` or `$`"),
        None => return Some("name cannot be empty"),
    }

    if is_js_reserved(name) {
        return Some("name is a JavaScript reserved word");
    }

    let mut prev_was_dash = false;
    for c in chars {
        if c == '-' && allow_dashes {
            if prev_was_dash {
                return Some("name cannot contain consecutive dashes");
            }
            prev_was_dash = true;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            prev_was_dash = false;
        } else if allow_dashes {
            return Some("name must contain only letters, numbers, `_`, `$` and dashes");
        } else {
            return Some("name must contain only letters, numbers, `_` and `$`");
        }
    }

    if prev_was_dash {
        return Some("name cannot end with a dash");
    }

    None
}
