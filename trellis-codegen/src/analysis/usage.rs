//! Collection of field usage points.

use indexmap::IndexMap;
use serde::Serialize;
use trellis_manifest::{AppDefinition, EntityDefinition};

use crate::resolve_view;

/// One configuration location that references a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsagePoint {
    /// Dotted path of the referencing location (e.g. `ui.list.columns`)
    pub location: String,
    /// Area of the schema the location belongs to
    pub context: String,
    pub description: String,
}

impl UsagePoint {
    pub fn new(
        location: impl Into<String>,
        context: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            context: context.into(),
            description: description.into(),
        }
    }
}

/// How widely a field is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    /// High from five usage points, medium from three.
    pub fn from_count(count: usize) -> Self {
        match count {
            n if n >= 5 => ImpactLevel::High,
            n if n >= 3 => ImpactLevel::Medium,
            _ => ImpactLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        }
    }

    /// Graph color for this level.
    pub fn color(&self) -> &'static str {
        match self {
            ImpactLevel::High => "#ef4444",
            ImpactLevel::Medium => "#f59e0b",
            ImpactLevel::Low => "#10b981",
        }
    }
}

/// Every usage point of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUsage {
    pub points: Vec<UsagePoint>,
    pub impact_level: ImpactLevel,
}

impl FieldUsage {
    pub fn new(points: Vec<UsagePoint>) -> Self {
        let impact_level = ImpactLevel::from_count(points.len());
        Self {
            points,
            impact_level,
        }
    }

    pub fn is_unused(&self) -> bool {
        self.points.is_empty()
    }
}

/// Usage points per declared field, in declaration order.
pub(crate) type UsageMap = IndexMap<String, Vec<UsagePoint>>;

fn record(usage: &mut UsageMap, field: &str, point: UsagePoint) {
    if let Some(points) = usage.get_mut(field) {
        points.push(point);
    }
}

/// Usage points from an entity's own `ui` and behavior configuration.
pub(crate) fn entity_usage(entity: &EntityDefinition) -> UsageMap {
    let mut usage: UsageMap = entity
        .fields
        .keys()
        .map(|name| (name.clone(), Vec::new()))
        .collect();
    let ui = &entity.ui;

    let display = [
        ("primary", &ui.display.primary, "Primary display field"),
        ("secondary", &ui.display.secondary, "Secondary display field"),
        ("badge", &ui.display.badge, "Badge display field"),
    ];
    for (slot, field, description) in display {
        if let Some(field) = field {
            let location = format!("ui.display.{}", slot);
            record(&mut usage, field, UsagePoint::new(location, "display", description));
        }
    }
    if let Some(color) = &ui.display.color {
        record(
            &mut usage,
            &color.field,
            UsagePoint::new("ui.display.color.field", "display", "Drives color coding"),
        );
    }
    for field in &ui.display.metadata {
        record(
            &mut usage,
            field,
            UsagePoint::new("ui.display.metadata", "display", "Shown as metadata"),
        );
    }

    let lists = [
        ("columns", &ui.list.columns, "List column"),
        ("filterable", &ui.list.filterable, "List filter"),
        ("searchable", &ui.list.searchable, "Searchable in lists"),
    ];
    for (key, fields, description) in lists {
        for field in fields {
            let location = format!("ui.list.{}", key);
            record(&mut usage, field, UsagePoint::new(location, "list", description));
        }
    }

    for field in &ui.form.fields {
        record(
            &mut usage,
            field,
            UsagePoint::new("ui.form.fields", "form", "Form input"),
        );
    }

    for (index, section) in ui.detail.sections.iter().enumerate() {
        for field in &section.fields {
            record(
                &mut usage,
                field,
                UsagePoint::new(
                    format!("ui.detail.sections[{}]", index),
                    "detail",
                    format!("Shown in detail section '{}'", section.title),
                ),
            );
        }
    }

    for (name, behavior) in &entity.behaviors {
        for field in behavior.updates.keys() {
            record(
                &mut usage,
                field,
                UsagePoint::new(
                    format!("behaviors.{}.updates", name),
                    "behavior",
                    format!("Updated by behavior '{}'", name),
                ),
            );
        }
    }

    usage
}

/// Add usage points from the views and workflows bound to `entity`.
///
/// Views that fail to resolve contribute their explicit field references.
pub(crate) fn add_app_usage(app: &AppDefinition, entity: &EntityDefinition, usage: &mut UsageMap) {
    for (name, view) in app.views_for_entity(&entity.name) {
        let kind = view.kind();
        let fields: Vec<(&'static str, String)> = match resolve_view(name, view, Some(entity)) {
            Ok(resolved) => resolved.field_usages(),
            Err(_) => view
                .field_references()
                .into_iter()
                .map(|(attribute, field)| (attribute, field.to_string()))
                .collect(),
        };

        for (attribute, field) in fields {
            record(
                usage,
                &field,
                UsagePoint::new(
                    format!("views.{}.{}", name, attribute),
                    "view",
                    format!("Used by {} view '{}'", kind, name),
                ),
            );
        }
    }

    for (name, workflow) in &app.workflows {
        if workflow.entity == entity.name {
            record(
                usage,
                &workflow.field,
                UsagePoint::new(
                    format!("workflows.{}.field", name),
                    "workflow",
                    format!("State field of workflow '{}'", name),
                ),
            );
        }
    }
}
