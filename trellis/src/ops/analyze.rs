//! Analyze operation - schema health and the field dependency graph.

use clap::ValueEnum;
use eyre::{Result, eyre};
use trellis_codegen::analysis::{EntityAnalysis, analyze_system};
use trellis_manifest::AppDefinition;

use crate::reports::{AnalyzeReport, EntityReport, FieldReport, GraphReport};

/// Serialisation of the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    Json,
    Dot,
}

/// Execute the analyze operation.
///
/// With `entity`, only that entity is reported, including per-field usage.
pub fn analyze(app: &AppDefinition, entity: Option<&str>) -> Result<AnalyzeReport> {
    let analysis = analyze_system(app);

    let entities = match entity {
        Some(name) => {
            let found = analysis
                .entities
                .get(name)
                .ok_or_else(|| eyre!("No entity named '{}' is declared", name))?;
            vec![entity_report(found, true)]
        }
        None => analysis
            .entities
            .values()
            .map(|found| entity_report(found, false))
            .collect(),
    };

    Ok(AnalyzeReport {
        app_name: app.app.name.clone(),
        health_score: analysis.health_score,
        complexity: analysis.complexity,
        entity_count: analysis.entity_count,
        view_count: analysis.view_count,
        workflow_count: analysis.workflow_count,
        entities,
    })
}

/// The dependency graph of every entity, serialised as `format`.
pub fn graph(app: &AppDefinition, format: GraphFormat) -> Result<GraphReport> {
    let graph = analyze_system(app).graph;
    let text = match format {
        GraphFormat::Json => graph.to_json()?,
        GraphFormat::Dot => graph.to_dot(),
    };
    Ok(GraphReport { text })
}

fn entity_report(analysis: &EntityAnalysis, detailed: bool) -> EntityReport {
    let fields = detailed.then(|| {
        analysis
            .field_usage
            .iter()
            .map(|(name, usage)| FieldReport {
                name: name.clone(),
                impact: usage.impact_level.as_str().to_string(),
                locations: usage.points.iter().map(|p| p.location.clone()).collect(),
            })
            .collect()
    });

    EntityReport {
        name: analysis.entity.clone(),
        health_score: analysis.health_score,
        unused_fields: analysis.unused_fields.clone(),
        warnings: analysis.warnings.clone(),
        suggestions: analysis.suggestions.clone(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::starter::Starter;

    fn app() -> AppDefinition {
        AppDefinition::from_str(&Starter::TaskBoard.manifest("tasks")).unwrap()
    }

    #[test]
    fn test_system_report() {
        let report = analyze(&app(), None).unwrap();

        assert_eq!(report.entity_count, 1);
        assert_eq!(report.view_count, 7);
        assert_eq!(report.workflow_count, 1);
        assert_eq!(report.complexity, 10 + 7 * 5 + 3);
        assert!(report.entities[0].fields.is_none());
    }

    #[test]
    fn test_single_entity_lists_field_usage() {
        let report = analyze(&app(), Some("Task")).unwrap();
        let fields = report.entities[0].fields.as_ref().unwrap();

        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["id", "title", "status", "priority", "dueDate", "notes"]
        );
        let due = fields.iter().find(|f| f.name == "dueDate").unwrap();
        assert!(
            due.locations
                .contains(&"views.TaskCalendar.dateField".to_string())
        );
    }

    #[test]
    fn test_unknown_entity() {
        let err = analyze(&app(), Some("Ghost")).unwrap_err();
        assert_eq!(err.to_string(), "No entity named 'Ghost' is declared");
    }

    #[test]
    fn test_graph_formats() {
        let dot = graph(&app(), GraphFormat::Dot).unwrap();
        assert!(dot.text.starts_with("digraph"));

        let json = graph(&app(), GraphFormat::Json).unwrap();
        assert!(json.text.contains("\"nodes\""));
    }
}
