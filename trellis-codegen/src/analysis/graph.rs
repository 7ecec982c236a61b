//! Entity/field dependency graph for visualization tooling.

use serde::Serialize;
use trellis_manifest::{EntityDefinition, FieldType};

use super::{EntityAnalysis, ImpactLevel};

/// Edge color for relation edges.
const RELATION_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Entity,
    Field,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// `entity:Task` or `field:Task.title`
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// One usage point of a field
    Usage,
    /// A relation field pointing at its target entity
    Relation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    /// Usage location, or the relation field name
    pub label: String,
    pub color: String,
}

/// Nodes for every entity and field, edges for every usage point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

pub fn entity_node_id(entity: &str) -> String {
    format!("entity:{}", entity)
}

pub fn field_node_id(entity: &str, field: &str) -> String {
    format!("field:{}.{}", entity, field)
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entity, its fields and their usage edges.
    pub fn add_entity(&mut self, entity: &EntityDefinition, analysis: &EntityAnalysis) {
        let entity_id = entity_node_id(&entity.name);
        self.nodes.push(GraphNode {
            id: entity_id.clone(),
            label: entity.name.clone(),
            kind: NodeKind::Entity,
        });

        for (name, usage) in &analysis.field_usage {
            let field_id = field_node_id(&entity.name, name);
            self.nodes.push(GraphNode {
                id: field_id.clone(),
                label: name.clone(),
                kind: NodeKind::Field,
            });

            for point in &usage.points {
                self.edges.push(GraphEdge {
                    from: entity_id.clone(),
                    to: field_id.clone(),
                    kind: EdgeKind::Usage,
                    label: point.location.clone(),
                    color: usage.impact_level.color().to_string(),
                });
            }
        }

        for (name, field) in &entity.fields {
            if field.field_type != FieldType::Relation {
                continue;
            }
            if let Some(target) = &field.to {
                self.edges.push(GraphEdge {
                    from: field_node_id(&entity.name, name),
                    to: entity_node_id(target),
                    kind: EdgeKind::Relation,
                    label: name.clone(),
                    color: RELATION_COLOR.to_string(),
                });
            }
        }
    }

    /// Usage edges colored by `level`.
    pub fn edges_with_impact(&self, level: ImpactLevel) -> impl Iterator<Item = &GraphEdge> {
        self.edges
            .iter()
            .filter(move |edge| edge.kind == EdgeKind::Usage && edge.color == level.color())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render as a Graphviz digraph.
    pub fn to_dot(&self) -> String {
        let nodes = self.nodes.iter().map(|node| {
            let shape = match node.kind {
                NodeKind::Entity => "box",
                NodeKind::Field => "ellipse",
            };
            format!(
                "  {} [label={}, shape={}];",
                dot_quote(&node.id),
                dot_quote(&node.label),
                shape
            )
        });

        let edges = self.edges.iter().map(|edge| {
            let style = match edge.kind {
                EdgeKind::Usage => "solid",
                EdgeKind::Relation => "dashed",
            };
            format!(
                "  {} -> {} [label={}, color={}, style={}];",
                dot_quote(&edge.from),
                dot_quote(&edge.to),
                dot_quote(&edge.label),
                dot_quote(&edge.color),
                style
            )
        });

        let mut lines = vec!["digraph trellis {".to_string(), "  rankdir=LR;".to_string()];
        lines.extend(nodes);
        lines.extend(edges);
        lines.push("}".to_string());
        lines.join("\n") + "\n"
    }
}

/// A DOT double-quoted string.
fn dot_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use trellis_manifest::FieldDefinition;

    use super::*;
    use crate::analysis::analyze_entity;

    fn graph() -> DependencyGraph {
        let mut entity = EntityDefinition::new("Task")
            .field("title", FieldDefinition::new(FieldType::String))
            .field("project", FieldDefinition::relation("Project"));
        entity.ui.display.primary = Some("title".into());

        let mut graph = DependencyGraph::new();
        graph.add_entity(&entity, &analyze_entity(&entity));
        graph
    }

    #[test]
    fn test_nodes_and_edges() {
        let graph = graph();

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["entity:Task", "field:Task.title", "field:Task.project"]);

        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[0].label, "ui.display.primary");
        assert_eq!(graph.edges[0].color, "#10b981");
        assert_eq!(graph.edges[1].kind, EdgeKind::Relation);
        assert_eq!(graph.edges[1].to, "entity:Project");
        assert_eq!(graph.edges_with_impact(ImpactLevel::Low).count(), 1);
    }

    #[test]
    fn test_to_dot() {
        let dot = graph().to_dot();
        assert!(dot.starts_with("digraph trellis {\n"));
        assert!(dot.contains("\"entity:Task\" [label=\"Task\", shape=box];"));
        assert!(dot.contains(
            "\"entity:Task\" -> \"field:Task.title\" [label=\"ui.display.primary\", color=\"#10b981\", style=solid];"
        ));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_to_json() {
        let json: serde_json::Value = serde_json::from_str(&graph().to_json().unwrap()).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "entity");
        assert_eq!(json["edges"][1]["kind"], "relation");
    }

    #[test]
    fn test_dot_labels_are_escaped() {
        let graph = DependencyGraph {
            nodes: vec![GraphNode {
                id: "entity:Quote".into(),
                label: "say \"hi\" \\ bye".into(),
                kind: NodeKind::Entity,
            }],
            edges: Vec::new(),
        };

        assert_eq!(
            graph.to_dot(),
            "digraph trellis {\n  rankdir=LR;\n  \"entity:Quote\" [label=\"say \\\"hi\\\" \\\\ bye\", shape=box];\n}\n"
        );
    }
}
