//! Form blocks: initial state, validation, inputs and the edit-mode load.

use trellis_codegen::{field_label, option_label, resolve::ResolvedFormView};
use trellis_manifest::{FieldDefinition, FieldType};

use crate::ast::{JsArray, JsObject, JsxElement, js_string, member, route_expr};

/// Object literal of every form field's starting value.
pub fn initial_form_state(view: &ResolvedFormView<'_>) -> String {
    view.field_definitions()
        .fold(JsObject::new(), |obj, (name, field)| match (&field.default, field.field_type) {
            (Some(default), _) => obj.json(name, default),
            (None, FieldType::Boolean) => obj.raw(name, "false"),
            (None, FieldType::Relation) if field.many => obj.raw(name, "[]"),
            (None, _) => obj.string(name, ""),
        })
        .build()
}

/// One required-value check per required field.
///
/// Numbers and booleans are checked for presence, so `0` and `false` pass.
pub fn validation_rules(view: &ResolvedFormView<'_>) -> String {
    view.field_definitions()
        .filter(|(_, field)| field.required)
        .map(|(name, field)| {
            let value = member("values", name);
            let check = if field.field_type.is_numeric() || field.field_type == FieldType::Boolean {
                format!("{} == null || {} === \"\"", value, value)
            } else {
                format!("!{}", value)
            };
            format!(
                "if ({}) {} = {};",
                check,
                member("errors", name),
                js_string(&format!("{} is required", field_label(view.entity, name)))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One input component per form field.
pub fn field_components(view: &ResolvedFormView<'_>) -> String {
    view.field_definitions()
        .map(|(name, field)| field_component(view, name, field))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_component(view: &ResolvedFormView<'_>, name: &str, field: &FieldDefinition) -> String {
    let (tag, value_attr) = match field.field_type {
        FieldType::Enum => ("Select", "value"),
        FieldType::Relation => ("ReferenceSelect", "value"),
        FieldType::Boolean => ("Checkbox", "checked"),
        FieldType::Text | FieldType::Json => ("Textarea", "value"),
        _ => ("Input", "value"),
    };

    let element = JsxElement::new(tag)
        .attr("label", field_label(view.entity, name))
        .attr("name", name)
        .expr(value_attr, member("values", name))
        .expr(
            "onChange",
            format!("(value) => setField({}, value)", js_string(name)),
        );

    let element = match field.field_type {
        FieldType::Enum => {
            let options = field.options.iter().fold(JsArray::new(), |arr, option| {
                arr.object(
                    JsObject::new()
                        .string("value", option)
                        .string("label", option_label(option)),
                )
            });
            element.expr("options", options.build_multiline())
        }
        FieldType::Relation => element
            .attr("entity", field.to.as_deref().unwrap_or_default())
            .flag_if(field.many, "multiple"),
        FieldType::Boolean | FieldType::Text | FieldType::Json => element,
        FieldType::Date => element.attr("type", "date"),
        FieldType::Datetime => element.attr("type", "datetime-local"),
        FieldType::Number => element.attr("type", "number"),
        FieldType::Integer => element.attr("type", "number").attr("step", "1"),
        _ if field.is_email(name) => element.attr("type", "email"),
        _ => element.attr("type", "text"),
    };

    element
        .expr("error", member("errors", name))
        .flag_if(field.required, "required")
        .build()
}

/// Reads the record id from the route in edit mode.
pub fn edit_mode_setup(view: &ResolvedFormView<'_>) -> String {
    if view.is_edit() {
        "const { id } = useParams();".to_string()
    } else {
        String::new()
    }
}

/// Loads the edited record into the form state once per id.
pub fn edit_mode_effect(view: &ResolvedFormView<'_>) -> String {
    if !view.is_edit() {
        return String::new();
    }

    [
        "useEffect(() => {",
        "  get(id).then((record) => {",
        "    if (record) setValues((current) => ({ ...current, ...record }));",
        "  });",
        "}, [id]);",
    ]
    .join("\n")
}

/// The store call committing the form. The stored record is bound to
/// `saved`.
pub fn submit_logic(view: &ResolvedFormView<'_>) -> String {
    if view.is_edit() {
        "const saved = await update(id, values);".to_string()
    } else {
        "const saved = await create(values);".to_string()
    }
}

/// Navigation target after a successful submit. An id segment resolves to
/// the route id in edit mode and to the stored record otherwise.
pub fn redirect_target(view: &ResolvedFormView<'_>) -> String {
    let id = if view.is_edit() { "id" } else { "saved.id" };
    route_expr(&view.redirect, id)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use trellis_codegen::{
        ResolvedView, resolve_view,
        testing::{bound_to, task_entity},
    };
    use trellis_manifest::{EntityDefinition, FormMode, FormView, ViewDefinition};

    use super::*;

    fn form(entity: &EntityDefinition, mode: FormMode) -> ResolvedFormView<'_> {
        let view = ViewDefinition::Form(FormView {
            base: bound_to("Task"),
            mode: Some(mode),
            ..Default::default()
        });
        match resolve_view("TaskForm", &view, Some(entity)) {
            Ok(ResolvedView::Form(form)) => form,
            other => panic!("Expected form view, got {:?}", other),
        }
    }

    fn rich_entity() -> EntityDefinition {
        EntityDefinition::new("Task")
            .field("title", FieldDefinition::new(FieldType::String).required())
            .field("estimate", FieldDefinition::new(FieldType::Integer).required())
            .field("done", FieldDefinition::new(FieldType::Boolean))
            .field("tags", FieldDefinition {
                many: true,
                ..FieldDefinition::relation("Tag")
            })
            .field(
                "priority",
                FieldDefinition::enumeration(["low", "high"]).with_default("low"),
            )
            .field("ownerEmail", FieldDefinition::new(FieldType::String))
    }

    #[test]
    fn test_initial_form_state() {
        let entity = rich_entity();
        let view = form(&entity, FormMode::Create);
        assert_eq!(
            initial_form_state(&view),
            "{\n  title: \"\",\n  estimate: \"\",\n  done: false,\n  tags: [],\n  priority: \"low\",\n  ownerEmail: \"\",\n}"
        );
    }

    #[test]
    fn test_validation_rules() {
        let entity = rich_entity();
        let view = form(&entity, FormMode::Create);
        assert_eq!(
            validation_rules(&view),
            "if (!values.title) errors.title = \"Title is required\";\n\
             if (values.estimate == null || values.estimate === \"\") errors.estimate = \"Estimate is required\";"
        );
    }

    #[test]
    fn test_field_components_by_type() {
        let entity = rich_entity();
        let view = form(&entity, FormMode::Create);
        let out = field_components(&view);

        assert!(out.contains("  type=\"number\"\n  step=\"1\"\n"));
        assert!(out.contains("<Checkbox\n  label=\"Done\"\n  name=\"done\"\n  checked={values.done}\n"));
        assert!(out.contains("  entity=\"Tag\"\n  multiple\n"));
        assert!(out.contains("  options={[\n    { value: \"low\", label: \"Low\" },\n    { value: \"high\", label: \"High\" },\n  ]}\n"));
        assert!(out.contains("  type=\"email\"\n"));
        assert_eq!(out.matches("  required\n").count(), 2);
    }

    #[test]
    fn test_title_input() {
        let entity = EntityDefinition::new("Task")
            .field("title", FieldDefinition::new(FieldType::String).required());
        let view = form(&entity, FormMode::Create);
        assert_eq!(
            field_components(&view),
            "<Input\n  label=\"Title\"\n  name=\"title\"\n  value={values.title}\n  onChange={(value) => setField(\"title\", value)}\n  type=\"text\"\n  error={errors.title}\n  required\n/>"
        );
    }

    #[test]
    fn test_edit_mode() {
        let entity = task_entity();
        let create = form(&entity, FormMode::Create);
        assert_eq!(edit_mode_setup(&create), "");
        assert_eq!(edit_mode_effect(&create), "");
        assert_eq!(submit_logic(&create), "const saved = await create(values);");
        assert_eq!(redirect_target(&create), "\"/tasks\"");

        let edit = form(&entity, FormMode::Edit);
        assert_eq!(edit_mode_setup(&edit), "const { id } = useParams();");
        assert!(edit_mode_effect(&edit).starts_with("useEffect(() => {\n  get(id)"));
        assert_eq!(submit_logic(&edit), "const saved = await update(id, values);");
    }

    #[test]
    fn test_redirect_to_saved_record() {
        let entity = task_entity();
        let view = ViewDefinition::Form(FormView {
            base: bound_to("Task"),
            redirect: Some("/tasks/:id".into()),
            ..Default::default()
        });
        let Ok(ResolvedView::Form(create)) = resolve_view("TaskCreate", &view, Some(&entity)) else {
            panic!("Expected form view");
        };
        assert_eq!(redirect_target(&create), "`/tasks/${saved.id}`");
    }

    #[test]
    fn test_json_default() {
        let entity = EntityDefinition::new("Task").field(
            "meta",
            FieldDefinition::new(FieldType::Json).with_default(json!({"a": 1})),
        );
        let view = form(&entity, FormMode::Create);
        assert_eq!(initial_form_state(&view), "{\n  meta: {\"a\":1},\n}");
    }
}
