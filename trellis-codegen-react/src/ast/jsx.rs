//! JSX element builder.

use trellis_codegen::builder::CodeBuilder;

use super::js_string;

/// Elements whose single-line form fits this width stay on one line.
const MAX_INLINE_WIDTH: usize = 80;

#[derive(Debug, Clone)]
enum Attr {
    /// `name="value"`
    Str(String),
    /// `name={expression}`
    Expr(String),
    /// `name`
    Flag,
}

/// Builder for a JSX element with attributes and optional children.
///
/// Short elements render on one line. Otherwise children go on their own
/// lines, and attributes too when the opening tag does not fit. Multi-line
/// expressions keep their relative indentation.
#[derive(Debug, Clone)]
pub struct JsxElement {
    tag: String,
    attrs: Vec<(String, Attr)>,
    children: Vec<String>,
}

impl JsxElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a string attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Attr::Str(value.into())));
        self
    }

    /// Add an expression attribute.
    pub fn expr(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Attr::Expr(expr.into())));
        self
    }

    /// Add a boolean attribute (`required`, `draggable`).
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.push((name.into(), Attr::Flag));
        self
    }

    /// Conditionally add a boolean attribute.
    pub fn flag_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition { self.flag(name) } else { self }
    }

    /// Add a child: text, an expression container or nested JSX.
    pub fn child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Render the element to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if let Some(inline) = self.inline() {
            return builder.line(&inline);
        }

        let builder = match self.open_tag() {
            Some(open) if !self.children.is_empty() => builder.line(&format!("<{}>", open)),
            _ => {
                let builder = builder.line(&format!("<{}", self.tag)).indent();
                let builder = self
                    .attrs
                    .iter()
                    .flat_map(|(name, attr)| attr_lines(name, attr))
                    .fold(builder, |b, line| b.line(&line))
                    .dedent();
                if self.children.is_empty() {
                    return builder.line("/>");
                }
                builder.line(">")
            }
        };

        self.children
            .iter()
            .flat_map(|child| child.split('\n'))
            .fold(builder.indent(), |b, line| b.line(line))
            .dedent()
            .line(&format!("</{}>", self.tag))
    }

    /// Build the element without a trailing newline.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::jsx()).build_block()
    }

    /// Tag name and attributes on one line, if every attribute fits.
    fn open_tag(&self) -> Option<String> {
        let mut parts = vec![self.tag.clone()];
        for (name, attr) in &self.attrs {
            match attr_lines(name, attr).as_slice() {
                [line] => parts.push(line.clone()),
                _ => return None,
            }
        }
        let open = parts.join(" ");
        (open.chars().count() + 2 <= MAX_INLINE_WIDTH).then_some(open)
    }

    fn inline(&self) -> Option<String> {
        let open = self.open_tag()?;
        let text = match self.children.as_slice() {
            [] => format!("<{} />", open),
            [child] if !child.contains('\n') => format!("<{}>{}</{}>", open, child, self.tag),
            _ => return None,
        };
        (text.chars().count() <= MAX_INLINE_WIDTH).then_some(text)
    }
}

fn attr_lines(name: &str, attr: &Attr) -> Vec<String> {
    match attr {
        Attr::Flag => vec![name.to_string()],
        Attr::Str(value) if value.contains(['"', '\n']) => {
            vec![format!("{}={{{}}}", name, js_string(value))]
        }
        Attr::Str(value) => vec![format!("{}=\"{}\"", name, value)],
        Attr::Expr(expr) => {
            let mut lines: Vec<String> = expr.split('\n').map(str::to_string).collect();
            lines[0] = format!("{}={{{}", name, lines[0]);
            if let Some(last) = lines.last_mut() {
                last.push('}');
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_inline() {
        let el = JsxElement::new("Badge").expr("value", "record.status").build();
        assert_eq!(el, "<Badge value={record.status} />");
    }

    #[test]
    fn test_text_child_inline() {
        let el = JsxElement::new("Button")
            .expr("onClick", "() => navigate(\"/tasks\")")
            .child("Back")
            .build();
        assert_eq!(el, "<Button onClick={() => navigate(\"/tasks\")}>Back</Button>");
    }

    #[test]
    fn test_long_element_breaks_attributes() {
        let el = JsxElement::new("Input")
            .attr("label", "Title")
            .attr("name", "title")
            .expr("value", "values.title")
            .expr("onChange", "(value) => setField(\"title\", value)")
            .flag("required")
            .build();
        assert_eq!(
            el,
            "<Input\n  label=\"Title\"\n  name=\"title\"\n  value={values.title}\n  onChange={(value) => setField(\"title\", value)}\n  required\n/>"
        );
    }

    #[test]
    fn test_multiline_expression_and_children() {
        let el = JsxElement::new("Button")
            .attr("variant", "danger")
            .expr("onClick", "() => {\n  remove(record.id);\n}")
            .child("Delete")
            .build();
        assert_eq!(
            el,
            "<Button\n  variant=\"danger\"\n  onClick={() => {\n    remove(record.id);\n  }}\n>\n  Delete\n</Button>"
        );
    }

    #[test]
    fn test_quoted_string_attribute() {
        let el = JsxElement::new("MetricCard")
            .attr("label", "Say \"hi\"")
            .build();
        assert_eq!(el, "<MetricCard label={\"Say \\\"hi\\\"\"} />");
    }

    #[test]
    fn test_no_attributes_with_nested_children() {
        let el = JsxElement::new("dl")
            .child("<dt>Title</dt>")
            .child("<dd>{record.title}</dd>")
            .build();
        assert_eq!(el, "<dl>\n  <dt>Title</dt>\n  <dd>{record.title}</dd>\n</dl>");
    }

    #[test]
    fn test_short_open_tag_with_block_children() {
        let el = JsxElement::new("section")
            .attr("className", "detail-section")
            .child("<h2>Overview</h2>")
            .child("<dl>\n  <dt>Title</dt>\n</dl>")
            .build();
        assert_eq!(
            el,
            "<section className=\"detail-section\">\n  <h2>Overview</h2>\n  <dl>\n    <dt>Title</dt>\n  </dl>\n</section>"
        );
    }
}
