//! Dashboard blocks: metric counts, metric cards and widgets.

use trellis_codegen::{
    option_label,
    resolve::{ResolvedDashboardView, ResolvedMetric, ResolvedWidget},
};

use super::RECORD;
use crate::ast::{JsArray, JsObject, JsxElement, js_string, member, route_expr};

/// Count of items whose `field` equals `value`.
fn count_matching(field: &str, value: &str) -> String {
    format!(
        "items.filter(({}) => {} === {}).length",
        RECORD,
        member(RECORD, field),
        js_string(value)
    )
}

fn metric_value(metric: &ResolvedMetric) -> String {
    match &metric.filter {
        Some((field, value)) => count_matching(field, value),
        None => "items.length".to_string(),
    }
}

/// Object literal computing every metric from `items`.
pub fn metric_calculations(view: &ResolvedDashboardView<'_>) -> String {
    view.metrics
        .iter()
        .fold(JsObject::new(), |obj, metric| {
            obj.raw(&metric.id, metric_value(metric))
        })
        .build()
}

/// One card per metric.
pub fn metric_widgets(view: &ResolvedDashboardView<'_>) -> String {
    view.metrics
        .iter()
        .map(|metric| {
            JsxElement::new("MetricCard")
                .attr("label", &metric.label)
                .expr("value", member("metrics", &metric.id))
                .attr("icon", &metric.icon)
                .attr("color", &metric.color)
                .build()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Recent-records lists and distribution charts.
pub fn dashboard_widgets(view: &ResolvedDashboardView<'_>) -> String {
    let title_field = view.entity.title_field().unwrap_or("id");

    view.widgets
        .iter()
        .map(|widget| match widget {
            ResolvedWidget::Recent { title, limit } => JsxElement::new("RecentList")
                .attr("title", title)
                .expr("items", format!("[...items].reverse().slice(0, {})", limit))
                .expr(
                    "renderItem",
                    format!("({}) => {}", RECORD, member(RECORD, title_field)),
                )
                .expr(
                    "onSelect",
                    format!(
                        "({}) => navigate({})",
                        RECORD,
                        route_expr(&view.base.routes.detail, "record.id")
                    ),
                )
                .build(),
            ResolvedWidget::Chart {
                title,
                field,
                options,
            } => {
                let data = options.iter().fold(JsArray::new(), |arr, option| {
                    arr.object(
                        JsObject::new()
                            .string("label", option_label(option))
                            .raw("value", count_matching(field, option)),
                    )
                });
                JsxElement::new("Chart")
                    .attr("type", "bar")
                    .attr("title", title)
                    .expr("data", data.build_multiline())
                    .build()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use trellis_codegen::{
        ResolvedView, resolve_view,
        testing::{bound_to, task_entity},
    };
    use trellis_manifest::{DashboardView, EntityDefinition, ViewDefinition};

    use super::*;

    fn dashboard(entity: &EntityDefinition) -> ResolvedDashboardView<'_> {
        let view = ViewDefinition::Dashboard(DashboardView {
            base: bound_to("Task"),
            ..Default::default()
        });
        match resolve_view("TaskDashboard", &view, Some(entity)) {
            Ok(ResolvedView::Dashboard(dashboard)) => dashboard,
            other => panic!("Expected dashboard view, got {:?}", other),
        }
    }

    #[test]
    fn test_metric_calculations() {
        let entity = task_entity();
        let view = dashboard(&entity);

        insta::assert_snapshot!(metric_calculations(&view), @r#"
        {
          total: items.length,
          statusTodo: items.filter((record) => record.status === "todo").length,
          statusInProgress: items.filter((record) => record.status === "in-progress").length,
          statusDone: items.filter((record) => record.status === "done").length,
          priorityLow: items.filter((record) => record.priority === "low").length,
          priorityMedium: items.filter((record) => record.priority === "medium").length,
          priorityHigh: items.filter((record) => record.priority === "high").length,
        }
        "#);
    }

    #[test]
    fn test_metric_widgets() {
        let entity = task_entity();
        let view = dashboard(&entity);
        let out = metric_widgets(&view);

        assert_eq!(out.lines().filter(|l| l.starts_with("<MetricCard")).count(), 7);
        assert!(out.contains("value={metrics.statusInProgress}"));
        assert!(out.contains("label=\"In progress\""));
    }

    #[test]
    fn test_dashboard_widgets() {
        let entity = task_entity();
        let view = dashboard(&entity);
        let out = dashboard_widgets(&view);

        assert!(out.starts_with("<RecentList\n  title=\"Recent Tasks\"\n  items={[...items].reverse().slice(0, 5)}\n"));
        assert!(out.contains("  renderItem={(record) => record.title}\n"));
        assert!(out.contains("  onSelect={(record) => navigate(`/tasks/${record.id}`)}\n"));
        assert!(out.contains(
            "<Chart\n  type=\"bar\"\n  title=\"Status distribution\"\n  data={[\n    { label: \"Todo\", value: items.filter((record) => record.status === \"todo\").length },\n"
        ));
        assert!(out.ends_with("  ]}\n/>"));
    }
}
