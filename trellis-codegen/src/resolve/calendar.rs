use trellis_manifest::{CalendarView, EntityDefinition, FieldType, ViewKind};

use super::{ResolvedBase, Resolver, Result};
use crate::ViewConfigError;

const DEFAULT_MAX_EVENTS_PER_DAY: usize = 3;

#[derive(Debug, Clone)]
pub struct ResolvedCalendarView<'a> {
    pub base: ResolvedBase,
    pub entity: &'a EntityDefinition,
    /// Date field events are placed by
    pub date_field: String,
    pub title_field: String,
    /// Events shown per day before collapsing into "+N more"
    pub max_events_per_day: usize,
    /// Runtime handler name replacing the default create-on-click
    pub on_day_click: Option<String>,
}

pub(super) fn resolve<'a>(
    r: &Resolver<'_, 'a>,
    view: &CalendarView,
) -> Result<ResolvedCalendarView<'a>> {
    let date_field = match &view.date_field {
        Some(field) => field.clone(),
        None => r
            .entity
            .fields
            .iter()
            .find(|(_, field)| field.field_type == FieldType::Date)
            .map(|(name, _)| name.clone())
            .ok_or_else(|| ViewConfigError::MissingAttribute {
                view: r.view_name.to_string(),
                kind: ViewKind::Calendar,
                attribute: "dateField".to_string(),
            })?,
    };

    let field = r.field("dateField", &date_field)?;
    if field.field_type != FieldType::Date {
        return Err(ViewConfigError::DateFieldNotDate {
            view: r.view_name.to_string(),
            field: date_field,
            found: field.field_type,
        });
    }

    let title_field = match &view.title_field {
        Some(title) if r.is_known(title) => title.clone(),
        Some(title) => return Err(r.unknown_field("titleField", title)),
        None => r.entity.title_field().unwrap_or("id").to_string(),
    };

    Ok(ResolvedCalendarView {
        base: r.base(format!("{} calendar", r.entity_name())),
        entity: r.entity,
        date_field,
        title_field,
        max_events_per_day: view
            .max_events_per_day
            .unwrap_or(DEFAULT_MAX_EVENTS_PER_DAY),
        on_day_click: view.on_day_click.clone(),
    })
}

#[cfg(test)]
mod tests {
    use trellis_manifest::{FieldDefinition, ViewBase, ViewDefinition};

    use crate::{ResolvedView, resolve_view};

    use super::*;

    fn task() -> EntityDefinition {
        EntityDefinition::new("Task")
            .field("id", FieldDefinition::new(FieldType::Uuid).auto())
            .field("title", FieldDefinition::new(FieldType::String))
            .field("startDate", FieldDefinition::new(FieldType::Date))
            .field("dueDate", FieldDefinition::new(FieldType::String))
    }

    fn calendar(entity: &EntityDefinition, view: CalendarView) -> Result<ResolvedCalendarView<'_>> {
        let view = ViewDefinition::Calendar(CalendarView {
            base: ViewBase {
                entity: Some("Task".into()),
                ..Default::default()
            },
            ..view
        });
        match resolve_view("TaskCalendar", &view, Some(entity))? {
            ResolvedView::Calendar(calendar) => Ok(calendar),
            other => panic!("Expected calendar view, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_defaults() {
        let task = task();
        let view = calendar(&task, CalendarView::default()).unwrap();

        assert_eq!(view.date_field, "startDate");
        assert_eq!(view.title_field, "title");
        assert_eq!(view.max_events_per_day, 3);
        assert_eq!(view.on_day_click, None);
        assert_eq!(view.base.route, "/tasks/calendar");
    }

    #[test]
    fn test_date_field_must_be_date() {
        let task = task();
        let err = calendar(
            &task,
            CalendarView {
                date_field: Some("dueDate".into()),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("dueDate"));
        assert!(matches!(err, ViewConfigError::DateFieldNotDate { .. }));
    }

    #[test]
    fn test_unknown_date_field() {
        let task = task();
        let err = calendar(
            &task,
            CalendarView {
                date_field: Some("deadline".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ViewConfigError::UnknownField { ref attribute, .. } if attribute == "dateField"));
    }

    #[test]
    fn test_missing_date_field() {
        let note = EntityDefinition::new("Task").field("title", FieldDefinition::new(FieldType::String));
        let err = calendar(&note, CalendarView::default()).unwrap_err();
        assert_eq!(err.to_string(), "calendar view 'TaskCalendar' requires a dateField attribute");
    }
}
