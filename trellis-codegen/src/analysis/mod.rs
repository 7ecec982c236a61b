//! Schema-level static analysis.
//!
//! The analyzer tracks where every field is referenced, flags unused and
//! inconsistent configuration and scores schema hygiene. Findings are data:
//! they never block generation.

mod graph;
mod usage;

use indexmap::IndexMap;
use serde::Serialize;
use trellis_manifest::{AppDefinition, EntityDefinition};

pub use graph::{
    DependencyGraph, EdgeKind, GraphEdge, GraphNode, NodeKind, entity_node_id, field_node_id,
};
pub use usage::{FieldUsage, ImpactLevel, UsagePoint};

use usage::UsageMap;

const WARNING_PENALTY: u32 = 5;
const UNUSED_PENALTY: u32 = 10;

/// Diagnostics for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnalysis {
    pub entity: String,
    /// Usage of every declared field, in declaration order
    pub field_usage: IndexMap<String, FieldUsage>,
    pub unused_fields: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    /// 0 to 100
    pub health_score: u32,
}

/// Diagnostics for a whole application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemAnalysis {
    pub entities: IndexMap<String, EntityAnalysis>,
    pub entity_count: usize,
    pub view_count: usize,
    pub workflow_count: usize,
    pub total_warnings: usize,
    pub total_unused: usize,
    pub health_score: u32,
    pub complexity: usize,
    pub graph: DependencyGraph,
}

impl SystemAnalysis {
    /// Warnings of every entity, paired with the entity name.
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entities.values().flat_map(|analysis| {
            analysis
                .warnings
                .iter()
                .map(move |w| (analysis.entity.as_str(), w.as_str()))
        })
    }
}

/// 100 minus penalties, floored at 0.
pub fn health_score(warnings: usize, unused: usize) -> u32 {
    let penalty = (warnings as u64)
        .saturating_mul(u64::from(WARNING_PENALTY))
        .saturating_add((unused as u64).saturating_mul(u64::from(UNUSED_PENALTY)));
    100u64.saturating_sub(penalty) as u32
}

/// Analyze one entity from its own configuration.
pub fn analyze_entity(entity: &EntityDefinition) -> EntityAnalysis {
    summarize(entity, usage::entity_usage(entity))
}

/// Analyze every entity, counting usages by views and workflows as well.
pub fn analyze_system(app: &AppDefinition) -> SystemAnalysis {
    let mut graph = DependencyGraph::new();
    let mut entities = IndexMap::new();

    for entity in app.entities.values() {
        let mut usage = usage::entity_usage(entity);
        usage::add_app_usage(app, entity, &mut usage);
        let analysis = summarize(entity, usage);
        graph.add_entity(entity, &analysis);
        entities.insert(entity.name.clone(), analysis);
    }

    let total_warnings = entities.values().map(|a| a.warnings.len()).sum();
    let total_unused = entities.values().map(|a| a.unused_fields.len()).sum();
    let entity_count = app.entities.len();
    let view_count = app.views.len();
    let workflow_count = app.workflows.len();

    tracing::debug!(
        entities = entity_count,
        warnings = total_warnings,
        unused = total_unused,
        "analyzed schema"
    );

    SystemAnalysis {
        entities,
        entity_count,
        view_count,
        workflow_count,
        total_warnings,
        total_unused,
        health_score: health_score(total_warnings, total_unused),
        complexity: 10 * entity_count + 5 * view_count + 3 * workflow_count,
        graph,
    }
}

fn summarize(entity: &EntityDefinition, usage: UsageMap) -> EntityAnalysis {
    let field_usage: IndexMap<String, FieldUsage> = usage
        .into_iter()
        .map(|(name, points)| (name, FieldUsage::new(points)))
        .collect();

    let unused_fields: Vec<String> = field_usage
        .iter()
        .filter(|(name, usage)| usage.is_unused() && !entity.is_system(name))
        .map(|(name, _)| name.clone())
        .collect();

    let mut warnings: Vec<String> = unused_fields
        .iter()
        .map(|name| format!("Field '{}' is not used in any UI configuration", name))
        .collect();

    let display = &entity.ui.display;
    if display.primary.is_none() {
        warnings.push("No primary display field configured".to_string());
    }

    let form_fields = if entity.ui.form.fields.is_empty() {
        entity.editable_field_names()
    } else {
        entity.ui.form.fields.clone()
    };
    for field in [&display.primary, &display.secondary, &display.badge]
        .into_iter()
        .flatten()
    {
        if entity.fields.contains_key(field)
            && !entity.is_system(field)
            && !form_fields.contains(field)
        {
            warnings.push(format!(
                "Display field '{}' is missing from the form fields",
                field
            ));
        }
    }

    let mut suggestions = Vec::new();
    for (name, usage) in &field_usage {
        if usage.impact_level == ImpactLevel::High && !entity.ui.list.searchable.contains(name) {
            suggestions.push(format!(
                "Field '{}' is used widely; consider making it searchable",
                name
            ));
        }
    }
    if display.color.is_none() {
        for (name, _) in entity.enum_fields() {
            suggestions.push(format!(
                "Enum field '{}' could drive color coding (ui.display.color)",
                name
            ));
        }
    }

    EntityAnalysis {
        entity: entity.name.clone(),
        health_score: health_score(warnings.len(), unused_fields.len()),
        field_usage,
        unused_fields,
        warnings,
        suggestions,
    }
}
