//! Shared string utilities for code generation.

/// Split an identifier into lowercase words.
///
/// Word boundaries are `_`, `-`, whitespace and lower-to-upper case changes,
/// so `"dueDate"`, `"due_date"` and `"due-date"` all yield `["due", "date"]`.
fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "dueDate" -> "DueDate").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "in-progress" -> "inProgress")
pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// Convert a string to snake_case (e.g., "dueDate" -> "due_date")
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert a string to kebab-case (e.g., "TaskBoard" -> "task-board")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Label for an enum option: hyphens become spaces and the first letter is
/// capitalized (e.g., "in-progress" -> "In progress").
pub fn humanize_option(value: &str) -> String {
    capitalize(&value.replace('-', " "))
}

/// Naive English plural used for route segments (e.g., "category" -> "categories").
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() {
        return String::new();
    }

    let ends_with_consonant_y = lower.ends_with('y')
        && !lower
            .chars()
            .rev()
            .nth(1)
            .is_some_and(|c| "aeiou".contains(c));

    if ends_with_consonant_y {
        format!("{}ies", &word[..word.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("dueDate"), vec!["due", "date"]);
        assert_eq!(split_words("due_date"), vec!["due", "date"]);
        assert_eq!(split_words("in-progress"), vec!["in", "progress"]);
        assert_eq!(split_words("TaskBoard"), vec!["task", "board"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("title"), "Title");
        assert_eq!(capitalize("dueDate"), "DueDate");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("task-board"), "TaskBoard");
        assert_eq!(to_pascal_case("TaskBoard"), "TaskBoard");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("status_in-progress"), "statusInProgress");
        assert_eq!(to_camel_case("Priority"), "priority");
        assert_eq!(to_camel_case("due_date"), "dueDate");
    }

    #[test]
    fn test_snake_and_kebab() {
        assert_eq!(to_snake_case("dueDate"), "due_date");
        assert_eq!(to_kebab_case("TaskBoard"), "task-board");
        assert_eq!(to_kebab_case("task_board"), "task-board");
    }

    #[test]
    fn test_humanize_option() {
        assert_eq!(humanize_option("low"), "Low");
        assert_eq!(humanize_option("in-progress"), "In progress");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("task"), "tasks");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("status"), "statuses");
        assert_eq!(pluralize("box"), "boxes");
    }
}
