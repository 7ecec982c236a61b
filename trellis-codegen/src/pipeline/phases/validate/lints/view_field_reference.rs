//! Lint for views that will fail to generate.

use trellis_manifest::AppDefinition;

use super::super::Lint;
use crate::{pipeline::Diagnostic, resolve::resolve_view};

/// Lint that warns when a view's configuration does not resolve against its
/// entity (unknown field, wrong field type, missing attribute).
///
/// This is a warning rather than an error: batch generation skips the failing
/// view and still generates the others.
pub struct ViewFieldReferenceLint;

impl Lint for ViewFieldReferenceLint {
    fn name(&self) -> &'static str {
        "view-field-reference"
    }

    fn description(&self) -> &'static str {
        "Check that view field references resolve"
    }

    fn check(&self, app: &AppDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for (name, view) in &app.views {
            if let Err(err) = resolve_view(name, view, app.view_entity(view)) {
                diagnostics.push(
                    Diagnostic::warning("validate", err.to_string()).at(format!("views.{}", name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use trellis_manifest::{CalendarView, ViewDefinition};

    use super::*;
    use crate::testing::{bound_to, task_app};

    #[test]
    fn test_resolving_views() {
        let mut diagnostics = Vec::new();
        ViewFieldReferenceLint.check(&task_app(), &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_wrong_field_type() {
        let app = task_app().with_view(
            "TaskCalendar",
            ViewDefinition::Calendar(CalendarView {
                base: bound_to("Task"),
                date_field: Some("title".into()),
                ..Default::default()
            }),
        );

        let mut diagnostics = Vec::new();
        ViewFieldReferenceLint.check(&app, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "Calendar dateField 'title' must be a date field (found string)"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("views.TaskCalendar"));
    }
}
