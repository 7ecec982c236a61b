//! Token tables of each view kind.
//!
//! Every kind fills one [`Substitution`] with the shared identity tokens plus
//! its own blocks; the skeleton is then rendered by a single `apply`.

mod calendar;
mod custom;
mod dashboard;
mod detail;
mod form;
mod kanban;
mod list;

use trellis_codegen::{
    ResolvedView,
    resolve::ResolvedBase,
    template::{Substitution, TemplateContext},
};
use trellis_core::pluralize;
use trellis_manifest::EntityDefinition;

use crate::ast::{js_string, jsx_text, route_expr};
use crate::fragments::RECORD;

pub use custom::markup_component;

/// Name of the template a view renders from: `<kind>-view`, or the custom
/// view's own template.
pub fn template_name(view: &ResolvedView<'_>) -> String {
    match view {
        ResolvedView::Custom(custom) => custom.template.clone(),
        other => format!("{}-view", other.kind()),
    }
}

/// Every token of `view`, identity tokens first.
pub fn substitution(view: &ResolvedView<'_>) -> serde_json::Result<Substitution> {
    let mut tokens = identity_tokens(view.base(), view.entity());

    match view {
        ResolvedView::List(v) => list::tokens(v, &mut tokens)?,
        ResolvedView::Detail(v) => detail::tokens(v, &mut tokens),
        ResolvedView::Form(v) => form::tokens(v, &mut tokens),
        ResolvedView::Kanban(v) => kanban::tokens(v, &mut tokens)?,
        ResolvedView::Calendar(v) => calendar::tokens(v, &mut tokens),
        ResolvedView::Dashboard(v) => dashboard::tokens(v, &mut tokens),
        ResolvedView::Custom(_) => {}
    }
    Ok(tokens)
}

/// Values layer of the template context used by static markup.
pub fn template_values(view: &ResolvedView<'_>) -> TemplateContext {
    let base = view.base();
    let ctx = TemplateContext::new()
        .with_value("name", &base.name)
        .with_value("component", &base.component)
        .with_value("title", &base.title)
        .with_value("route", &base.route);

    match view.entity() {
        Some(entity) => ctx
            .with_value("entity", &entity.name)
            .with_value("entityPlural", pluralize(&entity.name)),
        None => ctx,
    }
}

fn identity_tokens(base: &ResolvedBase, entity: Option<&EntityDefinition>) -> Substitution {
    let detail = format!("{}.id", RECORD);
    let mut tokens = Substitution::new()
        .with("VIEW_NAME", &base.component)
        .with("TITLE", jsx_text(&base.title))
        .with("ROUTE", &base.route)
        .with("LIST_ROUTE", js_string(&base.routes.list))
        .with("CREATE_ROUTE", js_string(&base.routes.create))
        .with("DETAIL_ROUTE", route_expr(&base.routes.detail, &detail))
        .with("EDIT_ROUTE", route_expr(&base.routes.edit, &detail));

    if let Some(entity) = entity {
        let plural = pluralize(&entity.name);
        tokens
            .set("ENTITY", &entity.name)
            .set("ENTITY_LOWER", entity.name.to_lowercase())
            .set("ENTITY_PLURAL_LOWER", plural.to_lowercase())
            .set("ENTITY_PLURAL", plural);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use trellis_codegen::{
        resolve_view,
        testing::{bound_to, task_entity},
    };
    use trellis_manifest::{CustomView, ListView, ViewBase, ViewDefinition};

    use super::*;

    #[test]
    fn test_template_names() {
        let entity = task_entity();
        let list = ViewDefinition::List(ListView {
            base: bound_to("Task"),
            ..Default::default()
        });
        let resolved = resolve_view("TaskList", &list, Some(&entity)).unwrap();
        assert_eq!(template_name(&resolved), "list-view");

        let custom = ViewDefinition::Custom(CustomView {
            base: ViewBase::default(),
            template: Some("help-page".into()),
        });
        let resolved = resolve_view("Help", &custom, None).unwrap();
        assert_eq!(template_name(&resolved), "help-page");
    }

    #[test]
    fn test_identity_tokens() {
        let entity = task_entity();
        let list = ViewDefinition::List(ListView {
            base: bound_to("Task"),
            ..Default::default()
        });
        let resolved = resolve_view("TaskList", &list, Some(&entity)).unwrap();
        let tokens = substitution(&resolved).unwrap();

        assert_eq!(tokens.get("VIEW_NAME"), Some("TaskList"));
        assert_eq!(tokens.get("TITLE"), Some("Tasks"));
        assert_eq!(tokens.get("ENTITY_LOWER"), Some("task"));
        assert_eq!(tokens.get("ENTITY_PLURAL_LOWER"), Some("tasks"));
        assert_eq!(tokens.get("LIST_ROUTE"), Some("\"/tasks\""));
        assert_eq!(tokens.get("EDIT_ROUTE"), Some("`/tasks/${record.id}/edit`"));
    }

    #[test]
    fn test_template_values() {
        let entity = task_entity();
        let list = ViewDefinition::List(ListView {
            base: bound_to("Task"),
            ..Default::default()
        });
        let resolved = resolve_view("TaskList", &list, Some(&entity)).unwrap();
        let ctx = template_values(&resolved);

        assert_eq!(ctx.lookup("route").as_deref(), Some("/tasks"));
        assert_eq!(ctx.lookup("entityPlural").as_deref(), Some("Tasks"));
    }
}
