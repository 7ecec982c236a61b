//! ES module import builder.

use trellis_codegen::builder::CodeBuilder;

use super::js_string;

/// Builder for `import` statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.named.is_empty()
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let from = js_string(&self.from);

        let import_str = match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from {};", def, from),
            (Some(def), false) => format!(
                "import {}, {{ {} }} from {};",
                def,
                self.named.join(", "),
                from
            ),
            (None, false) => format!("import {{ {} }} from {};", self.named.join(", "), from),
            (None, true) => format!("import {};", from),
        };

        builder.line(&import_str)
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::jsx()).build()
    }
}
