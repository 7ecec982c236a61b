use std::collections::HashSet;

use trellis_core::{humanize_option, pluralize, to_camel_case};
use trellis_manifest::{
    DashboardView, EntityDefinition, FieldType, MetricDefinition, ViewKind, WidgetDefinition,
};

use super::{ResolvedBase, Resolver, Result, field_label};
use crate::ViewConfigError;

/// Enum fields that get one metric per option by default.
const METRIC_FIELDS: &[&str] = &["status", "priority"];
const DEFAULT_RECENT_LIMIT: usize = 5;

/// A count shown as a metric card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetric {
    /// Identifier of the computed value (e.g. `statusDone`)
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    /// `(field, value)` the counted records match; `None` counts all
    pub filter: Option<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedWidget {
    Recent {
        title: String,
        limit: usize,
    },
    Chart {
        title: String,
        field: String,
        options: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct ResolvedDashboardView<'a> {
    pub base: ResolvedBase,
    pub entity: &'a EntityDefinition,
    pub metrics: Vec<ResolvedMetric>,
    pub widgets: Vec<ResolvedWidget>,
}

/// Icon and color of a metric, keyed by the option it counts.
pub fn metric_style(key: &str) -> (&'static str, &'static str) {
    match key {
        "todo" => ("📝", "gray"),
        "in-progress" => ("🔄", "blue"),
        "done" => ("✅", "green"),
        "low" => ("🟢", "green"),
        "medium" => ("🟡", "yellow"),
        "high" => ("🔴", "red"),
        "urgent" | "critical" => ("🚨", "red"),
        "blocked" => ("⛔", "red"),
        "review" => ("👀", "purple"),
        _ => ("📊", "slate"),
    }
}

pub(super) fn resolve<'a>(
    r: &Resolver<'_, 'a>,
    view: &DashboardView,
) -> Result<ResolvedDashboardView<'a>> {
    let mut metrics = match &view.metrics {
        Some(metrics) => metrics
            .iter()
            .map(|metric| explicit_metric(r, metric))
            .collect::<Result<Vec<_>>>()?,
        None => default_metrics(r.entity),
    };
    dedupe_ids(&mut metrics);

    let widgets = match &view.widgets {
        Some(widgets) => widgets
            .iter()
            .map(|widget| explicit_widget(r, widget))
            .collect::<Result<Vec<_>>>()?,
        None => default_widgets(r.entity),
    };

    Ok(ResolvedDashboardView {
        base: r.base(format!("{} dashboard", r.entity_name())),
        entity: r.entity,
        metrics,
        widgets,
    })
}

fn total_metric(entity: &EntityDefinition) -> ResolvedMetric {
    let (icon, color) = metric_style("total");
    ResolvedMetric {
        id: "total".to_string(),
        label: format!("Total {}", pluralize(&entity.name)),
        icon: icon.to_string(),
        color: color.to_string(),
        filter: None,
    }
}

fn option_metric(field: &str, option: &str) -> ResolvedMetric {
    let (icon, color) = metric_style(option);
    ResolvedMetric {
        id: to_camel_case(&format!("{}-{}", field, option)),
        label: humanize_option(option),
        icon: icon.to_string(),
        color: color.to_string(),
        filter: Some((field.to_string(), option.to_string())),
    }
}

/// Suffix repeated metric ids (`statusInProgress`, `statusInProgress2`) so
/// each one keeps its own key in the computed object.
fn dedupe_ids(metrics: &mut [ResolvedMetric]) {
    let mut seen = HashSet::new();
    for metric in metrics.iter_mut() {
        if !seen.contains(&metric.id) {
            seen.insert(metric.id.clone());
            continue;
        }
        let mut n = 2;
        let mut id = format!("{}{}", metric.id, n);
        while seen.contains(&id) {
            n += 1;
            id = format!("{}{}", metric.id, n);
        }
        seen.insert(id.clone());
        metric.id = id;
    }
}

fn default_metrics(entity: &EntityDefinition) -> Vec<ResolvedMetric> {
    let mut metrics = vec![total_metric(entity)];
    for (name, field) in entity.enum_fields() {
        if METRIC_FIELDS.contains(&name.as_str()) {
            metrics.extend(field.options.iter().map(|option| option_metric(name, option)));
        }
    }
    metrics
}

fn explicit_metric(r: &Resolver<'_, '_>, metric: &MetricDefinition) -> Result<ResolvedMetric> {
    let Some(field) = &metric.field else {
        let mut total = total_metric(r.entity);
        total.id = metric.id.clone();
        if metric.id != "total" {
            total.label = humanize_option(&metric.id);
        }
        return Ok(ResolvedMetric {
            label: metric.label.clone().unwrap_or(total.label),
            icon: metric.icon.clone().unwrap_or(total.icon),
            color: metric.color.clone().unwrap_or(total.color),
            ..total
        });
    };

    if !r.is_known(field) {
        return Err(r.unknown_field("metrics", field));
    }
    let value = metric
        .value
        .as_ref()
        .ok_or_else(|| ViewConfigError::MissingAttribute {
            view: r.view_name.to_string(),
            kind: ViewKind::Dashboard,
            attribute: format!("value for metric '{}'", metric.id),
        })?;

    let defaults = option_metric(field, value);
    Ok(ResolvedMetric {
        id: metric.id.clone(),
        label: metric.label.clone().unwrap_or(defaults.label),
        icon: metric.icon.clone().unwrap_or(defaults.icon),
        color: metric.color.clone().unwrap_or(defaults.color),
        filter: defaults.filter,
    })
}

fn recent_widget(entity: &EntityDefinition, title: Option<&str>, limit: usize) -> ResolvedWidget {
    ResolvedWidget::Recent {
        title: title
            .map(str::to_string)
            .unwrap_or_else(|| format!("Recent {}", pluralize(&entity.name))),
        limit,
    }
}

fn chart_widget(entity: &EntityDefinition, field: &str, options: &[String], title: Option<&str>) -> ResolvedWidget {
    ResolvedWidget::Chart {
        title: title
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} distribution", field_label(entity, field))),
        field: field.to_string(),
        options: options.to_vec(),
    }
}

fn default_widgets(entity: &EntityDefinition) -> Vec<ResolvedWidget> {
    let mut widgets = vec![recent_widget(entity, None, DEFAULT_RECENT_LIMIT)];

    let chart = entity
        .get_field("status")
        .filter(|status| status.is_enum() && !status.options.is_empty())
        .map(|status| ("status", status))
        .or_else(|| {
            entity
                .enum_fields()
                .find(|(_, field)| !field.options.is_empty())
                .map(|(name, field)| (name.as_str(), field))
        });
    if let Some((name, field)) = chart {
        widgets.push(chart_widget(entity, name, &field.options, None));
    }
    widgets
}

fn explicit_widget(r: &Resolver<'_, '_>, widget: &WidgetDefinition) -> Result<ResolvedWidget> {
    match widget {
        WidgetDefinition::Recent { title, limit } => {
            let limit = r.limit("widgets.limit", *limit, DEFAULT_RECENT_LIMIT)?;
            Ok(recent_widget(r.entity, title.as_deref(), limit))
        }
        WidgetDefinition::Chart { field: name, title } => {
            let field = r.field("widgets", name)?;
            if field.field_type != FieldType::Enum {
                return Err(ViewConfigError::ChartFieldNotEnum {
                    view: r.view_name.to_string(),
                    field: name.clone(),
                    found: field.field_type,
                });
            }
            r.require_options(name)?;
            Ok(chart_widget(r.entity, name, &field.options, title.as_deref()))
        }
    }
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
            .field(
                "status",
                FieldDefinition::enumeration(["todo", "in-progress", "done"]),
            )
            .field("priority", FieldDefinition::enumeration(["low", "urgent"]))
            .field("kind", FieldDefinition::enumeration(["bug", "feature"]))
    }

    fn dashboard(entity: &EntityDefinition, view: DashboardView) -> Result<ResolvedDashboardView<'_>> {
        let view = ViewDefinition::Dashboard(DashboardView {
            base: ViewBase {
                entity: Some("Task".into()),
                ..Default::default()
            },
            ..view
        });
        match resolve_view("TaskDashboard", &view, Some(entity))? {
            ResolvedView::Dashboard(dashboard) => Ok(dashboard),
            other => panic!("Expected dashboard view, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_default_metrics() {
        let task = task();
        let view = dashboard(&task, DashboardView::default()).unwrap();

        let ids: Vec<_> = view.metrics.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "total",
                "statusTodo",
                "statusInProgress",
                "statusDone",
                "priorityLow",
                "priorityUrgent"
            ]
        );
        assert_eq!(view.metrics[0].label, "Total Tasks");
        assert_eq!(view.metrics[2].label, "In progress");
        assert_eq!(view.metrics[2].icon, "🔄");
        assert_eq!(view.metrics[5].color, "red");
        assert_eq!(
            view.metrics[3].filter,
            Some(("status".to_string(), "done".to_string()))
        );
    }

    #[test]
    fn test_default_widgets() {
        let task = task();
        let view = dashboard(&task, DashboardView::default()).unwrap();

        assert_eq!(
            view.widgets,
            vec![
                ResolvedWidget::Recent {
                    title: "Recent Tasks".into(),
                    limit: 5
                },
                ResolvedWidget::Chart {
                    title: "Status distribution".into(),
                    field: "status".into(),
                    options: vec!["todo".into(), "in-progress".into(), "done".into()],
                },
            ]
        );
    }

    #[test]
    fn test_metric_style_fallback() {
        assert_eq!(metric_style("blocked"), ("⛔", "red"));
        assert_eq!(metric_style("archived"), ("📊", "slate"));
    }

    #[test]
    fn test_explicit_metrics_and_chart() {
        let task = task();
        let view = dashboard(
            &task,
            DashboardView {
                metrics: Some(vec![MetricDefinition {
                    id: "bugs".into(),
                    label: None,
                    field: Some("kind".into()),
                    value: Some("bug".into()),
                    icon: Some("🐛".into()),
                    color: None,
                }]),
                widgets: Some(vec![WidgetDefinition::Chart {
                    field: "kind".into(),
                    title: None,
                }]),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            view.metrics,
            vec![ResolvedMetric {
                id: "bugs".into(),
                label: "Bug".into(),
                icon: "🐛".into(),
                color: "slate".into(),
                filter: Some(("kind".into(), "bug".into())),
            }]
        );
        assert!(matches!(&view.widgets[0], ResolvedWidget::Chart { field, .. } if field == "kind"));
    }

    #[test]
    fn test_chart_field_must_be_enum() {
        let task = task();
        let err = dashboard(
            &task,
            DashboardView {
                widgets: Some(vec![WidgetDefinition::Chart {
                    field: "title".into(),
                    title: None,
                }]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ViewConfigError::ChartFieldNotEnum { .. }));
    }

    #[test]
    fn test_recent_limit() {
        let task = task();
        let recent = |limit| DashboardView {
            widgets: Some(vec![WidgetDefinition::Recent { title: None, limit }]),
            ..Default::default()
        };

        let err = dashboard(&task, recent(Some(0))).unwrap_err();
        assert_eq!(
            err,
            ViewConfigError::ZeroLimit {
                view: "TaskDashboard".into(),
                attribute: "widgets.limit".into(),
            }
        );

        let view = dashboard(&task, recent(None)).unwrap();
        assert!(matches!(view.widgets[0], ResolvedWidget::Recent { limit: 5, .. }));
    }

    #[test]
    fn test_colliding_metric_ids_are_suffixed() {
        let task = EntityDefinition::new("Task").field(
            "status",
            FieldDefinition::enumeration(["in-progress", "in_progress", "done"]),
        );
        let view = dashboard(&task, DashboardView::default()).unwrap();

        let ids: Vec<_> = view.metrics.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["total", "statusInProgress", "statusInProgress2", "statusDone"]
        );
        assert_eq!(
            view.metrics[2].filter,
            Some(("status".to_string(), "in_progress".to_string()))
        );
    }
}
