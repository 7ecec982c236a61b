use trellis_codegen::builder::CodeBuilder;

use crate::ast::js_string;

/// Wrap static markup into a component rendering it verbatim.
pub fn markup_component(component: &str, markup: &str) -> String {
    CodeBuilder::jsx()
        .line(&format!("const MARKUP = {};", js_string(markup)))
        .blank()
        .block_with_close(&format!("export default function {}() {{", component), "}", |b| {
            b.line("return <div className=\"custom-view\" dangerouslySetInnerHTML={{ __html: MARKUP }} />;")
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_component() {
        assert_eq!(
            markup_component("HelpPage", "<h1>Help</h1>\n"),
            "const MARKUP = \"<h1>Help</h1>\\n\";\n\nexport default function HelpPage() {\n  return <div className=\"custom-view\" dangerouslySetInnerHTML={{ __html: MARKUP }} />;\n}\n"
        );
    }
}
