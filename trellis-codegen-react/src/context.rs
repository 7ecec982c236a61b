//! The rendering context generated modules receive their primitives from.

use std::collections::BTreeSet;

use trellis_manifest::{CodegenConfig, DEFAULT_RUNTIME_MODULE};

use crate::ast::Import;

/// Hooks and functions the runtime module provides.
const RUNTIME_FUNCTIONS: &[&str] = &[
    "can",
    "navigate",
    "useEffect",
    "useEntityStore",
    "useMemo",
    "useParams",
    "useState",
];

/// UI components the runtime module provides.
const RUNTIME_COMPONENTS: &[&str] = &[
    "Badge",
    "Button",
    "Card",
    "Chart",
    "Checkbox",
    "DataTable",
    "FilterBar",
    "Input",
    "MetricCard",
    "Modal",
    "RecentList",
    "ReferenceSelect",
    "SearchBox",
    "Select",
    "Textarea",
];

/// Describes where generated modules import their rendering primitives
/// from.
///
/// Generated code never relies on ambient globals: every module starts with
/// a named import of exactly the primitives it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Module specifier of the runtime (e.g. `@trellis/runtime`)
    pub runtime_module: String,
    /// Extension of generated modules, without the dot
    pub extension: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
            extension: "jsx".to_string(),
        }
    }
}

impl RenderContext {
    pub fn new(runtime_module: impl Into<String>) -> Self {
        Self {
            runtime_module: runtime_module.into(),
            ..Default::default()
        }
    }

    /// Context from the manifest's `[codegen]` section.
    pub fn from_config(config: &CodegenConfig) -> Self {
        Self {
            runtime_module: config.runtime.clone(),
            extension: config.extension.clone(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Import of the runtime primitives `body` uses, if any.
    pub fn runtime_import(&self, body: &str) -> Option<Import> {
        let used = used_primitives(body);
        (!used.is_empty()).then(|| Import::new(&self.runtime_module).named_all(used))
    }

    /// Prefix `body` with its runtime import.
    pub fn module_source(&self, body: &str) -> String {
        match self.runtime_import(body) {
            Some(import) => format!("{}\n{}", import.build(), body),
            None => body.to_string(),
        }
    }
}

/// Runtime primitives referenced by `body`, sorted.
///
/// Functions count when called (`navigate(`), components
/// when used as a JSX tag (`<Button`). Names in plain text never count.
pub fn used_primitives(body: &str) -> BTreeSet<&'static str> {
    let functions = RUNTIME_FUNCTIONS
        .iter()
        .filter(|name| references(body, name, Usage::Call));
    let components = RUNTIME_COMPONENTS
        .iter()
        .filter(|name| references(body, name, Usage::Tag));
    functions.chain(components).copied().collect()
}

#[derive(Clone, Copy)]
enum Usage {
    Call,
    Tag,
}

/// Whether `name` occurs as a whole identifier used the given way.
fn references(body: &str, name: &str, usage: Usage) -> bool {
    body.match_indices(name).any(|(pos, _)| {
        let before = body[..pos].chars().next_back();
        let mut after = body[pos + name.len()..].chars();
        match usage {
            Usage::Call => {
                !before.is_some_and(is_ident_char)
                    && after.find(|c| !c.is_whitespace()) == Some('(')
            }
            Usage::Tag => before == Some('<') && !after.next().is_some_and(is_ident_char),
        }
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '.'
}
