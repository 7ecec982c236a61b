//! Literal encoding for values spliced into generated source.

use trellis_codegen::resolve::ID_SEGMENT;

/// A double-quoted JavaScript string literal.
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Whether `name` can be used as a bare identifier or property name.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Property access: `record.title`, or `record["due-date"]` when the field
/// is not a valid identifier.
pub fn member(object: &str, field: &str) -> String {
    if is_identifier(field) {
        format!("{}.{}", object, field)
    } else {
        format!("{}[{}]", object, js_string(field))
    }
}

/// Key of an object literal property.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        js_string(name)
    }
}

/// Text placed between JSX tags. Text containing JSX syntax characters is
/// wrapped in an expression container.
pub fn jsx_text(text: &str) -> String {
    if text.contains(['{', '}', '<', '>']) {
        format!("{{{}}}", js_string(text))
    } else {
        text.to_string()
    }
}

/// Expression for a route pattern with its id segment bound to `id_expr`.
///
/// `/tasks/:id/edit` with `record.id` becomes `` `/tasks/${record.id}/edit` ``;
/// patterns without an id segment become plain string literals.
pub fn route_expr(pattern: &str, id_expr: &str) -> String {
    if !pattern.contains(ID_SEGMENT) {
        return js_string(pattern);
    }

    let escaped = pattern
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");
    format!(
        "`{}`",
        escaped.replace(ID_SEGMENT, &format!("${{{}}}", id_expr))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("Todo"), "\"Todo\"");
        assert_eq!(js_string("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("dueDate"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("due-date"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_member_and_property_key() {
        assert_eq!(member("record", "title"), "record.title");
        assert_eq!(member("record", "due-date"), "record[\"due-date\"]");
        assert_eq!(property_key("statusDone"), "statusDone");
        assert_eq!(property_key("in-progress"), "\"in-progress\"");
    }

    #[test]
    fn test_jsx_text() {
        assert_eq!(jsx_text("New Task"), "New Task");
        assert_eq!(jsx_text("Tasks {beta}"), "{\"Tasks {beta}\"}");
    }

    #[test]
    fn test_route_expr() {
        assert_eq!(route_expr("/tasks", "record.id"), "\"/tasks\"");
        assert_eq!(
            route_expr("/tasks/:id/edit", "record.id"),
            "`/tasks/${record.id}/edit`"
        );
    }
}
