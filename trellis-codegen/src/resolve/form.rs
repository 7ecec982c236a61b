use trellis_manifest::{EntityDefinition, FieldDefinition, FormMode, FormView};

use super::{ResolvedBase, Resolver, Result, form_mode};

#[derive(Debug, Clone)]
pub struct ResolvedFormView<'a> {
    pub base: ResolvedBase,
    pub entity: &'a EntityDefinition,
    pub mode: FormMode,
    pub fields: Vec<String>,
    /// Route navigated to after a successful submit
    pub redirect: String,
}

impl<'a> ResolvedFormView<'a> {
    pub fn is_edit(&self) -> bool {
        self.mode == FormMode::Edit
    }

    /// Form fields with their definitions. System fields requested
    /// explicitly but not declared are skipped.
    pub fn field_definitions(&self) -> impl Iterator<Item = (&str, &'a FieldDefinition)> + '_ {
        let entity = self.entity;
        self.fields
            .iter()
            .filter_map(move |name| entity.get_field(name).map(|field| (name.as_str(), field)))
    }

    /// Fields that generate a required-value check.
    pub fn required_fields(&self) -> Vec<&str> {
        self.field_definitions()
            .filter(|(_, field)| field.required)
            .map(|(name, _)| name)
            .collect()
    }
}

pub(super) fn resolve<'a>(r: &Resolver<'_, 'a>, view: &FormView) -> Result<ResolvedFormView<'a>> {
    let mode = form_mode(view.mode, view.base.route.as_deref());
    let fields = r.first_of("fields", view.fields.as_deref(), &r.entity.ui.form.fields, || {
        r.entity.editable_field_names()
    })?;

    let title = match mode {
        FormMode::Create => format!("New {}", r.entity_name()),
        FormMode::Edit => format!("Edit {}", r.entity_name()),
    };
    let base = r.base(title);
    let redirect = view
        .redirect
        .clone()
        .unwrap_or_else(|| base.routes.list.clone());

    Ok(ResolvedFormView {
        base,
        entity: r.entity,
        mode,
        fields,
        redirect,
    })
}

#[cfg(test)]
mod tests {
    use trellis_manifest::{FieldType, ViewBase, ViewDefinition};

    use crate::{ResolvedView, resolve_view};

    use super::*;

    fn task() -> EntityDefinition {
        EntityDefinition::new("Task")
            .field("id", FieldDefinition::new(FieldType::Uuid).auto())
            .field("title", FieldDefinition::new(FieldType::String).required())
            .field(
                "status",
                FieldDefinition::enumeration(["todo", "done"]).required(),
            )
            .field("priority", FieldDefinition::enumeration(["low", "high"]))
            .field("createdAt", FieldDefinition::new(FieldType::Datetime))
    }

    fn form(entity: &EntityDefinition, view: FormView) -> ResolvedFormView<'_> {
        let view = ViewDefinition::Form(FormView {
            base: ViewBase {
                entity: Some("Task".into()),
                ..view.base
            },
            ..view
        });
        match resolve_view("TaskForm", &view, Some(entity)).unwrap() {
            ResolvedView::Form(form) => form,
            other => panic!("Expected form view, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_create_defaults() {
        let task = task();
        let view = form(&task, FormView::default());

        assert_eq!(view.mode, FormMode::Create);
        assert_eq!(view.fields, vec!["title", "status", "priority"]);
        assert_eq!(view.required_fields(), vec!["title", "status"]);
        assert_eq!(view.redirect, "/tasks");
        assert_eq!(view.base.route, "/tasks/new");
        assert_eq!(view.base.title, "New Task");
    }

    #[test]
    fn test_edit_mode_from_route() {
        let task = task();
        let view = form(
            &task,
            FormView {
                base: ViewBase {
                    route: Some("/work/:id/edit".into()),
                    ..Default::default()
                },
                redirect: Some("/board".into()),
                ..Default::default()
            },
        );

        assert!(view.is_edit());
        assert_eq!(view.base.title, "Edit Task");
        assert_eq!(view.redirect, "/board");
    }

    #[test]
    fn test_explicit_system_field() {
        let task = task();
        let view = form(
            &task,
            FormView {
                fields: Some(vec!["title".into(), "createdAt".into(), "updatedAt".into()]),
                ..Default::default()
            },
        );
        let names: Vec<_> = view.field_definitions().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["title", "createdAt"]);
    }
}
