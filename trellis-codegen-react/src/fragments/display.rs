//! Read-only field renderers: detail sections, kanban cards, calendar events.

use trellis_codegen::{
    field_label,
    resolve::{ResolvedCalendarView, ResolvedKanbanView, ResolvedSection},
};
use trellis_manifest::{EntityDefinition, FieldType};

use super::{EMPTY, RECORD};
use crate::ast::{JsObject, JsxElement, js_string, jsx_text, member, route_expr};

/// Expression container rendering `object.field` by its type: dates as
/// locale strings, booleans as ✓/✗, enums as badges, anything else raw
/// with a dash for empty values.
pub fn value_display(entity: &EntityDefinition, object: &str, field: &str) -> String {
    let value = member(object, field);
    let field_type = entity.get_field(field).map(|f| f.field_type);

    match field_type {
        Some(FieldType::Date) => format!(
            "{{{v} ? new Date({v}).toLocaleDateString() : {e}}}",
            v = value,
            e = EMPTY
        ),
        Some(FieldType::Datetime) => format!(
            "{{{v} ? new Date({v}).toLocaleString() : {e}}}",
            v = value,
            e = EMPTY
        ),
        Some(FieldType::Boolean) => format!("{{{} ? \"✓\" : \"✗\"}}", value),
        Some(FieldType::Enum) => format!(
            "{{{} ? {} : {}}}",
            value,
            badge(entity, field, &value),
            EMPTY
        ),
        Some(FieldType::Json) => format!(
            "{{{v} ? JSON.stringify({v}) : {e}}}",
            v = value,
            e = EMPTY
        ),
        _ => format!("{{{} ?? {}}}", value, EMPTY),
    }
}

/// A badge for an enum value, colored when the entity maps this field's
/// options to colors.
fn badge(entity: &EntityDefinition, field: &str, value: &str) -> String {
    let badge = JsxElement::new("Badge").expr("value", value);
    match &entity.ui.display.color {
        Some(color) if color.field == field && !color.map.is_empty() => {
            let colors = color
                .map
                .iter()
                .fold(JsObject::new(), |obj, (option, color)| obj.string(option, color));
            badge.expr("colors", colors.build_inline()).build()
        }
        _ => badge.build(),
    }
}

/// A description list of `fields`, each rendered with [`value_display`].
fn description_list(entity: &EntityDefinition, object: &str, fields: &[String]) -> JsxElement {
    fields.iter().fold(JsxElement::new("dl"), |dl, field| {
        dl.child(format!("<dt>{}</dt>", jsx_text(&field_label(entity, field))))
            .child(format!("<dd>{}</dd>", value_display(entity, object, field)))
    })
}

/// One `<section>` per detail section, titled sections with a heading.
pub fn field_displays(sections: &[ResolvedSection], entity: &EntityDefinition) -> String {
    sections
        .iter()
        .map(|section| {
            let mut el = JsxElement::new("section").attr("className", "detail-section");
            if let Some(title) = &section.title {
                el = el.child(format!("<h2>{}</h2>", jsx_text(title)));
            }
            el.child(description_list(entity, RECORD, &section.fields).build())
                .build()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Card body of a kanban item: the title field as heading, then the
/// labelled card fields.
pub fn card_content(view: &ResolvedKanbanView<'_>) -> String {
    let mut blocks = Vec::new();

    if let Some(title) = &view.title_field {
        blocks.push(format!(
            "<h3 className=\"card-title\">{{{} ?? {}}}</h3>",
            member(RECORD, title),
            js_string("Untitled")
        ));
    }

    for field in &view.card_fields {
        let el = JsxElement::new("div")
            .attr("className", "card-field")
            .child(format!(
                "<span className=\"card-label\">{}</span>",
                jsx_text(&field_label(view.entity, field))
            ))
            .child(value_display(view.entity, RECORD, field));
        blocks.push(el.build());
    }

    blocks.join("\n")
}

/// `className` expression of a calendar event. Events are tagged with the
/// value of the entity's color field, else its `status` enum.
pub fn event_class(entity: &EntityDefinition) -> String {
    let tag_field = match &entity.ui.display.color {
        Some(color) => Some(color.field.as_str()),
        None => entity
            .get_field("status")
            .filter(|status| status.is_enum())
            .map(|_| "status"),
    };

    match tag_field {
        Some(field) => format!(
            "`calendar-event ${{{} ?? \"\"}}`",
            member(RECORD, field)
        ),
        None => js_string("calendar-event"),
    }
}

/// Text of a calendar event.
pub fn event_content(view: &ResolvedCalendarView<'_>) -> String {
    format!("{{{}}}", member(RECORD, &view.title_field))
}

/// Body of the modal showing the selected calendar event.
pub fn modal_content(view: &ResolvedCalendarView<'_>) -> String {
    let fields = view.entity.display_field_names();
    let open = JsxElement::new("Button")
        .expr(
            "onClick",
            format!(
                "() => navigate({})",
                route_expr(&view.base.routes.detail, "selected.id")
            ),
        )
        .child("Open");

    format!(
        "{}\n{}",
        description_list(view.entity, "selected", &fields).build(),
        open.build()
    )
}
