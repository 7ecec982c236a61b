//! Action buttons: list header and row actions, detail actions and entity
//! behaviors. Buttons for restricted actions are wrapped in a `can()` guard.

use trellis_codegen::{
    builder::CodeBuilder,
    resolve::{ResolvedDetailView, ResolvedListView},
};
use trellis_core::capitalize;
use trellis_manifest::{DetailAction, EntityDefinition, ListAction};

use super::RECORD;
use crate::ast::{JsObject, JsxElement, js_string, jsx_text, route_expr};

/// Wrap `element` in a permission check when `action` is restricted to
/// specific roles.
pub fn guard(entity: &EntityDefinition, action: &str, element: String) -> String {
    if !entity.permissions.is_restricted(action) {
        return element;
    }

    let check = format!("can({}, {})", js_string(&entity.name), js_string(action));
    if element.contains('\n') {
        format!("{{{} && (\n  {}\n)}}", check, element.replace('\n', "\n  "))
    } else {
        format!("{{{} && {}}}", check, element)
    }
}

fn navigate_button(route: String, label: &str) -> JsxElement {
    JsxElement::new("Button")
        .expr("onClick", format!("() => navigate({})", route))
        .child(jsx_text(label))
}

fn confirm_message(entity: &EntityDefinition) -> String {
    js_string(&format!("Delete this {}?", entity.name.to_lowercase()))
}

/// Header button leading to the create form, if the view allows creating.
pub fn create_button(view: &ResolvedListView<'_>) -> String {
    if !view.has_action(ListAction::Create) {
        return String::new();
    }
    let button = navigate_button(
        js_string(&view.base.routes.create),
        &format!("New {}", view.entity.name),
    );
    guard(view.entity, "create", button.build())
}

/// The `actions` prop of the data table: one button per row action, or
/// nothing when the view declares no row actions.
pub fn table_actions(view: &ResolvedListView<'_>) -> String {
    let routes = &view.base.routes;
    let entity = view.entity;

    let buttons: Vec<String> = view
        .actions
        .iter()
        .filter_map(|action| match action {
            ListAction::Create => None,
            ListAction::View => Some(
                navigate_button(route_expr(&routes.detail, "record.id"), "View").build(),
            ),
            ListAction::Edit => Some(guard(
                entity,
                "update",
                navigate_button(route_expr(&routes.edit, "record.id"), "Edit").build(),
            )),
            ListAction::Delete => {
                let onclick = format!(
                    "() => {{\n  if (window.confirm({})) remove({}.id);\n}}",
                    confirm_message(entity),
                    RECORD
                );
                let button = JsxElement::new("Button")
                    .attr("variant", "danger")
                    .expr("onClick", onclick)
                    .child("Delete");
                Some(guard(entity, "delete", button.build()))
            }
        })
        .collect();

    if buttons.is_empty() {
        return String::new();
    }

    CodeBuilder::jsx()
        .line(&format!("actions={{({}) => (", RECORD))
        .indent()
        .line("<>")
        .indent()
        .each(buttons.iter().flat_map(|b| b.split('\n')), |b, line| {
            b.line(line)
        })
        .dedent()
        .line("</>")
        .dedent()
        .line(")}")
        .build_block()
}

/// Header buttons of a detail page, followed by one button per entity
/// behavior committing its field updates.
pub fn detail_actions(view: &ResolvedDetailView<'_>) -> String {
    let routes = &view.base.routes;
    let entity = view.entity;

    let mut buttons: Vec<String> = view
        .actions
        .iter()
        .map(|action| match action {
            DetailAction::Back => JsxElement::new("Button")
                .attr("variant", "secondary")
                .expr("onClick", format!("() => navigate({})", js_string(&routes.list)))
                .child("Back")
                .build(),
            DetailAction::Edit => guard(
                entity,
                "update",
                navigate_button(route_expr(&routes.edit, "record.id"), "Edit").build(),
            ),
            DetailAction::Delete => {
                let onclick = format!(
                    "async () => {{\n  if (!window.confirm({})) return;\n  await remove({}.id);\n  navigate({});\n}}",
                    confirm_message(entity),
                    RECORD,
                    js_string(&routes.list)
                );
                let button = JsxElement::new("Button")
                    .attr("variant", "danger")
                    .expr("onClick", onclick)
                    .child("Delete");
                guard(entity, "delete", button.build())
            }
        })
        .collect();

    for (name, behavior) in &entity.behaviors {
        let updates = behavior
            .updates
            .iter()
            .fold(JsObject::new(), |obj, (field, value)| obj.json(field, value));
        let label = behavior.label.clone().unwrap_or_else(|| capitalize(name));
        let label = match &behavior.icon {
            Some(icon) => format!("{} {}", icon, label),
            None => label,
        };
        let button = JsxElement::new("Button")
            .expr(
                "onClick",
                format!("() => update({}.id, {})", RECORD, updates.build_inline()),
            )
            .child(jsx_text(&label));
        buttons.push(guard(entity, "update", button.build()));
    }

    buttons.join("\n")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use trellis_codegen::{ResolvedView, resolve_view, testing::task_entity};
    use trellis_manifest::{Behavior, DetailView, ListView, ViewDefinition};

    use super::*;

    fn list(entity: &EntityDefinition, view: ListView) -> ResolvedListView<'_> {
        match resolve_view("TaskList", &ViewDefinition::List(view), Some(entity)) {
            Ok(ResolvedView::List(list)) => list,
            other => panic!("Expected list view, got {:?}", other),
        }
    }

    fn detail(entity: &EntityDefinition) -> ResolvedDetailView<'_> {
        let view = ViewDefinition::Detail(DetailView::default());
        match resolve_view("TaskDetail", &view, Some(entity)) {
            Ok(ResolvedView::Detail(detail)) => detail,
            other => panic!("Expected detail view, got {:?}", other),
        }
    }

    #[test]
    fn test_guard() {
        let mut entity = task_entity();
        assert_eq!(guard(&entity, "delete", "<X />".into()), "<X />");

        entity.permissions.delete = vec!["admin".into()];
        assert_eq!(
            guard(&entity, "delete", "<X />".into()),
            "{can(\"Task\", \"delete\") && <X />}"
        );
        assert_eq!(
            guard(&entity, "delete", "<X>\n  y\n</X>".into()),
            "{can(\"Task\", \"delete\") && (\n  <X>\n    y\n  </X>\n)}"
        );
    }

    #[test]
    fn test_create_button() {
        let entity = task_entity();
        assert_eq!(
            create_button(&list(&entity, ListView::default())),
            "<Button onClick={() => navigate(\"/tasks/new\")}>New Task</Button>"
        );

        let view = list(
            &entity,
            ListView {
                actions: Some(vec![ListAction::Edit]),
                ..Default::default()
            },
        );
        assert_eq!(create_button(&view), "");
    }

    #[test]
    fn test_table_actions() {
        let entity = task_entity();
        let out = table_actions(&list(&entity, ListView::default()));

        assert_eq!(
            out,
            "actions={(record) => (\n  <>\n    <Button onClick={() => navigate(`/tasks/${record.id}/edit`)}>Edit</Button>\n    <Button\n      variant=\"danger\"\n      onClick={() => {\n        if (window.confirm(\"Delete this task?\")) remove(record.id);\n      }}\n    >\n      Delete\n    </Button>\n  </>\n)}"
        );
    }

    #[test]
    fn test_no_row_actions() {
        let entity = task_entity();
        let view = list(
            &entity,
            ListView {
                actions: Some(vec![ListAction::Create]),
                ..Default::default()
            },
        );
        assert_eq!(table_actions(&view), "");
    }

    #[test]
    fn test_behavior_buttons() {
        let mut entity = task_entity();
        entity.behaviors.insert(
            "complete".into(),
            Behavior {
                label: None,
                icon: Some("✅".into()),
                updates: [("status".to_string(), json!("done"))].into_iter().collect(),
            },
        );
        entity.permissions.update = vec!["editor".into()];

        let out = detail_actions(&detail(&entity));
        assert!(out.starts_with("<Button variant=\"secondary\" onClick={() => navigate(\"/tasks\")}>Back</Button>"));
        assert!(out.ends_with(
            "{can(\"Task\", \"update\") && (\n  <Button onClick={() => update(record.id, { status: \"done\" })}>\n    ✅ Complete\n  </Button>\n)}"
        ));
    }
}
