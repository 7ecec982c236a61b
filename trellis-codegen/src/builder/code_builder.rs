//! Code builder utility for generating properly indented code.

/// One indentation level of generated JavaScript.
const INDENT: &str = "  ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use trellis_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::jsx()
///     .line("function TaskList() {")
///     .indent()
///     .line("return null;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "function TaskList() {\n  return null;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder using 2-space indentation.
    pub fn jsx() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `header`, the indented body built by `f`, then `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Fold every item into the builder.
    pub fn each<T, I, F>(self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        items.into_iter().fold(self, f)
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the code without its final newline.
    ///
    /// Used for blocks that are spliced into a template placeholder.
    pub fn build_block(self) -> String {
        let mut code = self.buffer;
        if code.ends_with('\n') {
            code.pop();
        }
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::jsx().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::jsx()
            .block_with_close("if (!values.title) {", "}", |b| {
                b.line("errors.title = \"Title is required\";")
            })
            .build();

        assert_eq!(
            code,
            "if (!values.title) {\n  errors.title = \"Title is required\";\n}\n"
        );
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::jsx()
            .indent()
            .each(["todo", "done"], |b, option| {
                b.line(&format!("<option>{}</option>", option))
            })
            .build();

        assert_eq!(code, "  <option>todo</option>\n  <option>done</option>\n");
    }

    #[test]
    fn test_raw_and_blank_skip_indentation() {
        let code = CodeBuilder::jsx()
            .indent()
            .line("{")
            .blank()
            .raw("}")
            .build();
        assert_eq!(code, "  {\n\n}");
    }

    #[test]
    fn test_dedent_stops_at_zero() {
        let code = CodeBuilder::jsx().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_build_block_trims_final_newline() {
        let code = CodeBuilder::jsx().line("a").line("b").build_block();
        assert_eq!(code, "a\nb");
        assert_eq!(CodeBuilder::jsx().build_block(), "");
    }
}
