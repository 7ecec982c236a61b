//! Built-in templates of the React backend.

use trellis_codegen::{
    builder::CodeBuilder,
    template::{TemplateLoader, TemplateSet},
};

use crate::ast::jsx_text;

const LIST_VIEW: &str = include_str!("../templates/list-view.jsx");
const DETAIL_VIEW: &str = include_str!("../templates/detail-view.jsx");
const FORM_VIEW: &str = include_str!("../templates/form-view.jsx");
const KANBAN_VIEW: &str = include_str!("../templates/kanban-view.jsx");
const CALENDAR_VIEW: &str = include_str!("../templates/calendar-view.jsx");
const DASHBOARD_VIEW: &str = include_str!("../templates/dashboard-view.jsx");

/// Skeletons for the six view kinds, fallbacks for the common status pages
/// and a placeholder for anything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactTemplates;

impl TemplateSet for ReactTemplates {
    fn skeleton(&self, name: &str) -> Option<&'static str> {
        match name {
            "list-view" => Some(LIST_VIEW),
            "detail-view" => Some(DETAIL_VIEW),
            "form-view" => Some(FORM_VIEW),
            "kanban-view" => Some(KANBAN_VIEW),
            "calendar-view" => Some(CALENDAR_VIEW),
            "dashboard-view" => Some(DASHBOARD_VIEW),
            _ => None,
        }
    }

    fn fallback(&self, name: &str) -> Option<String> {
        let (class, body) = match name {
            "not-found" => ("not-found", "<p>The page you are looking for does not exist.</p>"),
            "loading" => ("loading", "<p>Loading...</p>"),
            "error" => ("error", "<p>Something went wrong.</p>"),
            "empty-state" => ("empty-state", "<p>Nothing here yet.</p>"),
            _ => return None,
        };
        Some(status_page(class, body))
    }

    fn placeholder(&self, name: &str) -> String {
        CodeBuilder::jsx()
            .block_with_close("export default function __VIEW_NAME__() {", "}", |b| {
                b.block_with_close("return (", ");", |b| {
                    b.line("<div className=\"placeholder-view\">")
                        .indent()
                        .line("<h1>__TITLE__</h1>")
                        .line(&format!(
                            "<p>{}</p>",
                            jsx_text(&format!(
                                "Add a template named \"{}\" to customize this view.",
                                name
                            ))
                        ))
                        .dedent()
                        .line("</div>")
                })
            })
            .build()
    }
}

fn status_page(class: &str, body: &str) -> String {
    CodeBuilder::jsx()
        .block_with_close("export default function __VIEW_NAME__() {", "}", |b| {
            b.block_with_close("return (", ");", |b| {
                b.line(&format!("<div className=\"{}\">", class))
                    .indent()
                    .line("<h1>__TITLE__</h1>")
                    .line(body)
                    .dedent()
                    .line("</div>")
            })
        })
        .build()
}

/// A loader backed by the built-in templates only.
pub fn template_loader() -> TemplateLoader {
    TemplateLoader::new(ReactTemplates)
}

#[cfg(test)]
mod tests {
    use trellis_codegen::template::{TemplateContext, TemplateSource};

    use super::*;

    #[test]
    fn test_every_kind_has_a_skeleton() {
        for kind in ["list", "detail", "form", "kanban", "calendar", "dashboard"] {
            let skeleton = ReactTemplates.skeleton(&format!("{}-view", kind));
            assert!(
                skeleton.is_some_and(|s| s.contains("export default function __VIEW_NAME__()")),
                "missing skeleton for {}",
                kind
            );
        }
        assert_eq!(ReactTemplates.skeleton("custom-view"), None);
    }

    #[test]
    fn test_skeletons_carry_no_imports() {
        for name in ["list-view", "detail-view", "form-view", "kanban-view", "calendar-view", "dashboard-view"] {
            let skeleton = ReactTemplates.skeleton(name).unwrap_or_default();
            assert!(!skeleton.contains("import "), "{} has an import", name);
        }
    }

    #[test]
    fn test_fallback_and_placeholder() {
        let loader = template_loader();
        let ctx = TemplateContext::new();

        let not_found = loader.load("not-found", &ctx);
        assert_eq!(not_found.source, TemplateSource::Fallback);
        assert_eq!(
            not_found.text,
            "export default function __VIEW_NAME__() {\n  return (\n    <div className=\"not-found\">\n      <h1>__TITLE__</h1>\n      <p>The page you are looking for does not exist.</p>\n    </div>\n  );\n}\n"
        );

        let other = loader.load("release-notes", &ctx);
        assert_eq!(other.source, TemplateSource::Placeholder);
        assert!(other.text.contains("<p>Add a template named \"release-notes\" to customize this view.</p>"));
    }
}
