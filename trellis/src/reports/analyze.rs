//! Analyze command report data structures.

use super::output::{Output, Report};

/// Schema health across the application, or for one entity.
#[derive(Debug)]
pub struct AnalyzeReport {
    pub app_name: String,
    /// 0 to 100
    pub health_score: u32,
    pub complexity: usize,
    pub entity_count: usize,
    pub view_count: usize,
    pub workflow_count: usize,
    pub entities: Vec<EntityReport>,
}

/// Findings for one entity.
#[derive(Debug)]
pub struct EntityReport {
    pub name: String,
    pub health_score: u32,
    pub unused_fields: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    /// Per-field usage, present when a single entity was requested.
    pub fields: Option<Vec<FieldReport>>,
}

/// Where one field is referenced.
#[derive(Debug)]
pub struct FieldReport {
    pub name: String,
    pub impact: String,
    pub locations: Vec<String>,
}

/// The dependency graph, already serialised.
#[derive(Debug)]
pub struct GraphReport {
    pub text: String,
}

impl Report for AnalyzeReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&format!("{} schema analysis", self.app_name));
        out.key_value("Health", &format!("{}/100", self.health_score));
        out.key_value("Complexity", &self.complexity.to_string());
        out.key_value(
            "Declared",
            &format!(
                "{} entities, {} views, {} workflows",
                self.entity_count, self.view_count, self.workflow_count
            ),
        );

        for entity in &self.entities {
            out.newline();
            entity.render(out);
        }
    }
}

impl EntityReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("{} ({}/100)", self.name, self.health_score));

        if let Some(fields) = &self.fields {
            for field in fields {
                out.key_value_indented(
                    &field.name,
                    &format!("{} impact, {} usages", field.impact, field.locations.len()),
                );
                for location in &field.locations {
                    out.preformatted(&format!("      {}", location));
                }
            }
        }

        if !self.unused_fields.is_empty() {
            out.key_value_indented("unused", &self.unused_fields.join(", "));
        }
        for warning in &self.warnings {
            out.list_item(warning);
        }
        for suggestion in &self.suggestions {
            out.list_item(&format!("suggestion: {}", suggestion));
        }
    }
}

impl Report for GraphReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_entity_details() {
        let report = AnalyzeReport {
            app_name: "tasks".into(),
            health_score: 85,
            complexity: 15,
            entity_count: 1,
            view_count: 1,
            workflow_count: 0,
            entities: vec![EntityReport {
                name: "Task".into(),
                health_score: 85,
                unused_fields: vec!["notes".into()],
                warnings: vec!["Field 'notes' is not used in any UI configuration".into()],
                suggestions: Vec::new(),
                fields: Some(vec![FieldReport {
                    name: "title".into(),
                    impact: "low".into(),
                    locations: vec!["views.TaskList.columns".into()],
                }]),
            }],
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "tasks schema analysis",
                "=====================",
                "Health: 85/100",
                "Complexity: 15",
                "Declared: 1 entities, 1 views, 0 workflows",
                "",
                "Task (85/100):",
                "  title: low impact, 1 usages",
                "      views.TaskList.columns",
                "  unused: notes",
                "  - Field 'notes' is not used in any UI configuration",
            ]
        );
    }
}
