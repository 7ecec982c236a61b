//! Test utilities for view generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use eyre::Result;
use trellis_manifest::{
    AppDefinition, DashboardView, DetailView, EntityDefinition, FieldDefinition, FieldType,
    FormMode, FormView, KanbanView, ListView, ViewBase, ViewDefinition,
};

/// `Task{id, title, status, priority}`: `title` and `status` required,
/// `priority` optional.
pub fn task_entity() -> EntityDefinition {
    EntityDefinition::new("Task")
        .field("id", FieldDefinition::new(FieldType::Uuid).auto())
        .field("title", FieldDefinition::new(FieldType::String).required())
        .field(
            "status",
            FieldDefinition::enumeration(["todo", "in-progress", "done"]).required(),
        )
        .field(
            "priority",
            FieldDefinition::enumeration(["low", "medium", "high"]),
        )
}

/// [`task_entity`] plus a `dueDate` date field.
pub fn task_entity_with_due_date() -> EntityDefinition {
    task_entity().field("dueDate", FieldDefinition::new(FieldType::Date))
}

/// View attributes bound to `entity`.
pub fn bound_to(entity: &str) -> ViewBase {
    ViewBase {
        entity: Some(entity.to_string()),
        ..Default::default()
    }
}

/// An app with the task entity and one view of every entity-bound kind
/// except calendar.
pub fn task_app() -> AppDefinition {
    AppDefinition::new("tasks")
        .with_entity(task_entity())
        .with_view(
            "TaskList",
            ViewDefinition::List(ListView {
                base: bound_to("Task"),
                ..Default::default()
            }),
        )
        .with_view(
            "TaskDetail",
            ViewDefinition::Detail(DetailView {
                base: bound_to("Task"),
                ..Default::default()
            }),
        )
        .with_view(
            "TaskCreate",
            ViewDefinition::Form(FormView {
                base: bound_to("Task"),
                ..Default::default()
            }),
        )
        .with_view(
            "TaskEdit",
            ViewDefinition::Form(FormView {
                base: bound_to("Task"),
                mode: Some(FormMode::Edit),
                ..Default::default()
            }),
        )
        .with_view(
            "TaskBoard",
            ViewDefinition::Kanban(KanbanView {
                base: bound_to("Task"),
                ..Default::default()
            }),
        )
        .with_view(
            "TaskDashboard",
            ViewDefinition::Dashboard(DashboardView {
                base: bound_to("Task"),
                ..Default::default()
            }),
        )
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Run `write` against a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_to_temp<F>(write: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    write(temp_dir.path())?;
    Ok(temp_dir)
}
