use trellis_codegen::{resolve::ResolvedCalendarView, template::Substitution};

use crate::{
    ast::{js_string, member},
    fragments,
};

/// `handleDayClick(dayKey)`: the configured handler, else navigation to the
/// create form with the clicked day prefilled.
fn day_click_handler(view: &ResolvedCalendarView<'_>) -> String {
    match &view.on_day_click {
        Some(handler) => format!("const handleDayClick = {};", handler),
        None => {
            let target = format!("{}?{}=", view.base.routes.create, view.date_field);
            format!(
                "const handleDayClick = (day) => {{\n  navigate({} + day);\n}};",
                js_string(&target)
            )
        }
    }
}

pub(super) fn tokens(view: &ResolvedCalendarView<'_>, tokens: &mut Substitution) {
    tokens
        .set("DATE_FIELD", js_string(&view.date_field))
        .set("MAX_EVENTS", view.max_events_per_day.to_string())
        .set("DAY_CLICK_HANDLER", day_click_handler(view))
        .set("EVENT_CLASS", fragments::event_class(view.entity))
        .set("EVENT_CONTENT", fragments::event_content(view))
        .set("SELECTED_TITLE", member("selected", &view.title_field))
        .set("MODAL_CONTENT", fragments::modal_content(view));
}

#[cfg(test)]
mod tests {
    use trellis_codegen::{
        ResolvedView, resolve_view,
        testing::{bound_to, task_entity_with_due_date},
    };
    use trellis_manifest::{CalendarView, EntityDefinition, ViewDefinition};

    use super::*;

    fn calendar<'a>(entity: &'a EntityDefinition, on_day_click: Option<&str>) -> ResolvedCalendarView<'a> {
        let view = ViewDefinition::Calendar(CalendarView {
            base: bound_to("Task"),
            on_day_click: on_day_click.map(str::to_string),
            ..Default::default()
        });
        match resolve_view("TaskCalendar", &view, Some(entity)) {
            Ok(ResolvedView::Calendar(calendar)) => calendar,
            other => panic!("Expected calendar view, got {:?}", other),
        }
    }

    #[test]
    fn test_default_day_click_prefills_date() {
        let entity = task_entity_with_due_date();
        assert_eq!(
            day_click_handler(&calendar(&entity, None)),
            "const handleDayClick = (day) => {\n  navigate(\"/tasks/new?dueDate=\" + day);\n};"
        );
    }

    #[test]
    fn test_custom_day_click() {
        let entity = task_entity_with_due_date();
        let view = calendar(&entity, Some("(day) => openQuickAdd(day)"));
        assert_eq!(
            day_click_handler(&view),
            "const handleDayClick = (day) => openQuickAdd(day);"
        );

        let mut subst = Substitution::new();
        tokens(&view, &mut subst);
        assert_eq!(subst.get("DATE_FIELD"), Some("\"dueDate\""));
        assert_eq!(subst.get("MAX_EVENTS"), Some("3"));
        assert_eq!(subst.get("SELECTED_TITLE"), Some("selected.title"));
    }
}
