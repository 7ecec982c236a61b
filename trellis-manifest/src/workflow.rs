//! Workflow definitions.

use serde::{Deserialize, Serialize};

/// A state machine over one enum field of an entity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    /// Workflow name, filled from the manifest key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    pub entity: String,

    /// Field holding the current state
    #[serde(default = "default_state_field")]
    pub field: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<Transition>,
}

fn default_state_field() -> String {
    "status".to_string()
}

impl WorkflowDefinition {
    /// Transitions leaving `state`.
    pub fn transitions_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.from == state)
    }
}

/// A named move between two states.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Transition {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_workflow() {
        let workflow: WorkflowDefinition = toml::from_str(
            r#"
            entity = "Task"
            states = ["todo", "in-progress", "done"]
            transitions = [
                { from = "todo", to = "in-progress", action = "start" },
                { from = "in-progress", to = "done" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(workflow.field, "status");
        assert_eq!(workflow.transitions.len(), 2);
        let from_todo: Vec<_> = workflow.transitions_from("todo").collect();
        assert_eq!(from_todo.len(), 1);
        assert_eq!(from_todo[0].action.as_deref(), Some("start"));
    }
}
