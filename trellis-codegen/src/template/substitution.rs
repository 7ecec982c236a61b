//! Single-pass placeholder substitution.
//!
//! Skeleton templates mark insertion points with `__NAME__` tokens. All
//! tokens of a template, simple values and generated blocks alike, live in one
//! [`Substitution`] map and are replaced by a single left-to-right scan:
//!
//! - at each `__`, the longest registered name followed by `__` wins;
//! - inserted text is never rescanned, so a value may safely contain the
//!   literal name of another token;
//! - unknown tokens are copied verbatim.
//!
//! When a token stands alone on its line, a multi-line value is re-indented
//! to the token's column, and an empty value removes the line entirely.

use indexmap::IndexMap;

/// Ordered map of token names (without the surrounding `__`) to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    tokens: IndexMap<String, String>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.tokens.insert(name.into(), value.into());
        self
    }

    /// Consuming variant of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every registered token in `template`.
    pub fn apply(&self, template: &str) -> String {
        let mut names: Vec<&str> = self.tokens.keys().map(String::as_str).collect();
        names.sort_by_key(|name| std::cmp::Reverse(name.len()));

        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(pos) = rest.find("__") {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];

            let Some(name) = match_token(rest, &names) else {
                out.push('_');
                rest = &rest[1..];
                continue;
            };

            let token_len = name.len() + 4;
            let value = self.tokens.get(name).map(String::as_str).unwrap_or_default();
            let line_start = out.rfind('\n').map_or(0, |i| i + 1);
            let before = &out[line_start..];
            let after = &rest[token_len..];
            let line_end = after.find('\n').unwrap_or(after.len());
            let alone =
                before.chars().all(char::is_whitespace) && after[..line_end].trim().is_empty();

            if alone && value.is_empty() {
                out.truncate(line_start);
                rest = match after[line_end..].strip_prefix('\n') {
                    Some(next) => next,
                    None => &after[line_end..],
                };
                continue;
            }

            if alone && value.contains('\n') {
                let indent = before.to_string();
                push_indented(&mut out, value, &indent);
            } else {
                out.push_str(value);
            }
            rest = after;
        }

        out.push_str(rest);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut substitution = Substitution::new();
        for (k, v) in iter {
            substitution.set(k, v);
        }
        substitution
    }
}

/// Longest registered name `n` such that `text` starts with `__n__`.
fn match_token<'a>(text: &str, names: &[&'a str]) -> Option<&'a str> {
    let inner = text.strip_prefix("__")?;
    names
        .iter()
        .find(|name| {
            inner
                .strip_prefix(**name)
                .is_some_and(|tail| tail.starts_with("__"))
        })
        .copied()
}

/// Push `value`, prefixing every line after the first with `indent`.
///
/// Empty lines stay empty so no trailing whitespace is produced.
fn push_indented(out: &mut String, value: &str, indent: &str) {
    for (i, line) in value.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
}
