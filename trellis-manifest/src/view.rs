//! View definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a declared view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    List,
    Detail,
    Form,
    Kanban,
    Calendar,
    Dashboard,
    Custom,
}

impl ViewKind {
    /// All kinds, in documentation order.
    pub const ALL: [ViewKind; 7] = [
        ViewKind::List,
        ViewKind::Detail,
        ViewKind::Form,
        ViewKind::Kanban,
        ViewKind::Calendar,
        ViewKind::Dashboard,
        ViewKind::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::List => "list",
            ViewKind::Detail => "detail",
            ViewKind::Form => "form",
            ViewKind::Kanban => "kanban",
            ViewKind::Calendar => "calendar",
            ViewKind::Dashboard => "dashboard",
            ViewKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes shared by every view kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBase {
    /// Entity the view is bound to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A declared page bound to one entity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewDefinition {
    List(ListView),
    Detail(DetailView),
    Form(FormView),
    Kanban(KanbanView),
    Calendar(CalendarView),
    Dashboard(DashboardView),
    Custom(CustomView),
}

impl ViewDefinition {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewDefinition::List(_) => ViewKind::List,
            ViewDefinition::Detail(_) => ViewKind::Detail,
            ViewDefinition::Form(_) => ViewKind::Form,
            ViewDefinition::Kanban(_) => ViewKind::Kanban,
            ViewDefinition::Calendar(_) => ViewKind::Calendar,
            ViewDefinition::Dashboard(_) => ViewKind::Dashboard,
            ViewDefinition::Custom(_) => ViewKind::Custom,
        }
    }

    pub fn base(&self) -> &ViewBase {
        match self {
            ViewDefinition::List(v) => &v.base,
            ViewDefinition::Detail(v) => &v.base,
            ViewDefinition::Form(v) => &v.base,
            ViewDefinition::Kanban(v) => &v.base,
            ViewDefinition::Calendar(v) => &v.base,
            ViewDefinition::Dashboard(v) => &v.base,
            ViewDefinition::Custom(v) => &v.base,
        }
    }

    /// Name of the bound entity, if any.
    pub fn entity(&self) -> Option<&str> {
        self.base().entity.as_deref()
    }

    pub fn route(&self) -> Option<&str> {
        self.base().route.as_deref()
    }

    /// Whether the kind can be generated without a bound entity.
    pub fn requires_entity(&self) -> bool {
        self.kind() != ViewKind::Custom
    }

    /// Every field name this view references explicitly, paired with the
    /// attribute it appears in.
    pub fn field_references(&self) -> Vec<(&'static str, &str)> {
        let mut refs = Vec::new();
        match self {
            ViewDefinition::List(v) => {
                push_all(&mut refs, "columns", &v.columns);
                push_all(&mut refs, "filters", &v.filters);
                if let Some(sort) = &v.sort {
                    refs.push(("sort", sort.as_str()));
                }
            }
            ViewDefinition::Detail(v) => push_all(&mut refs, "fields", &v.fields),
            ViewDefinition::Form(v) => push_all(&mut refs, "fields", &v.fields),
            ViewDefinition::Kanban(v) => {
                push_all(&mut refs, "cardFields", &v.card_fields);
                if let Some(group_by) = &v.group_by {
                    refs.push(("groupBy", group_by.as_str()));
                }
            }
            ViewDefinition::Calendar(v) => {
                if let Some(date_field) = &v.date_field {
                    refs.push(("dateField", date_field.as_str()));
                }
                if let Some(title_field) = &v.title_field {
                    refs.push(("titleField", title_field.as_str()));
                }
            }
            ViewDefinition::Dashboard(v) => {
                for metric in v.metrics.iter().flatten() {
                    if let Some(field) = &metric.field {
                        refs.push(("metrics", field.as_str()));
                    }
                }
                for widget in v.widgets.iter().flatten() {
                    if let WidgetDefinition::Chart { field, .. } = widget {
                        refs.push(("widgets", field.as_str()));
                    }
                }
            }
            ViewDefinition::Custom(_) => {}
        }
        refs
    }
}

fn push_all<'a>(
    refs: &mut Vec<(&'static str, &'a str)>,
    attr: &'static str,
    names: &'a Option<Vec<String>>,
) {
    for name in names.iter().flatten() {
        refs.push((attr, name.as_str()));
    }
}

/// Row actions available on a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListAction {
    Create,
    View,
    Edit,
    Delete,
}

impl ListAction {
    /// Actions used when a list view declares none.
    pub const DEFAULTS: [ListAction; 3] = [ListAction::Create, ListAction::Edit, ListAction::Delete];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<ListAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<String>>,
    /// Initial sort field (defaults to the first column)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Header actions available on a detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailAction {
    Back,
    Edit,
    Delete,
}

impl DetailAction {
    pub const DEFAULTS: [DetailAction; 3] = [DetailAction::Back, DetailAction::Edit, DetailAction::Delete];
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DetailAction>>,
}

/// Whether a form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FormMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Route to navigate to after a successful submit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// An explicit kanban column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KanbanColumn {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanView {
    #[serde(flatten)]
    pub base: ViewBase,
    /// Enum field whose options become columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<KanbanColumn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_card_fields: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    #[serde(flatten)]
    pub base: ViewBase,
    /// Date field events are placed by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_events_per_day: Option<usize>,
    /// JavaScript expression evaluating to a `(dayKey) => void` handler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_day_click: Option<String>,
}

/// A dashboard metric counting records, optionally those where `field == value`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinition {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A dashboard panel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetDefinition {
    /// Most recently created records
    Recent {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
    },
    /// Distribution of records over an enum field
    Chart {
        field: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    #[serde(flatten)]
    pub base: ViewBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<MetricDefinition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<WidgetDefinition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomView {
    #[serde(flatten)]
    pub base: ViewBase,
    /// Template name (defaults to the view name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_views() {
        let kanban: ViewDefinition = toml::from_str(
            r#"
            type = "kanban"
            entity = "Task"
            groupBy = "priority"
            maxCardFields = 2
            "#,
        )
        .unwrap();

        assert_eq!(kanban.kind(), ViewKind::Kanban);
        assert_eq!(kanban.entity(), Some("Task"));
        match kanban {
            ViewDefinition::Kanban(v) => {
                assert_eq!(v.group_by.as_deref(), Some("priority"));
                assert_eq!(v.max_card_fields, Some(2));
                assert!(v.columns.is_none());
            }
            _ => panic!("Expected kanban view"),
        }
    }

    #[test]
    fn test_deserialize_dashboard_widgets() {
        let view: ViewDefinition = toml::from_str(
            r#"
            type = "dashboard"
            entity = "Task"

            [[widgets]]
            type = "recent"
            limit = 5

            [[widgets]]
            type = "chart"
            field = "status"
            "#,
        )
        .unwrap();

        let ViewDefinition::Dashboard(dashboard) = view else {
            panic!("Expected dashboard view");
        };
        let widgets = dashboard.widgets.unwrap();
        assert_eq!(widgets.len(), 2);
        assert!(matches!(widgets[0], WidgetDefinition::Recent { limit: Some(5), .. }));
    }

    #[test]
    fn test_field_references() {
        let view = ViewDefinition::List(ListView {
            columns: Some(vec!["title".into(), "status".into()]),
            filters: Some(vec!["status".into()]),
            ..Default::default()
        });
        assert_eq!(
            view.field_references(),
            vec![("columns", "title"), ("columns", "status"), ("filters", "status")]
        );
    }

    #[test]
    fn test_custom_view_needs_no_entity() {
        let view: ViewDefinition = toml::from_str(r#"type = "custom""#).unwrap();
        assert!(!view.requires_entity());
        assert_eq!(view.entity(), None);
    }
}
