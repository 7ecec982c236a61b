//! Starter manifests written by `trellis init`.

use clap::ValueEnum;

/// A starting point for a new project's `trellis.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Starter {
    /// Only the `[app]` section
    Blank,
    /// A task entity with list, detail, form, board, calendar and dashboard views
    TaskBoard,
}

impl Starter {
    pub const ALL: [Starter; 2] = [Starter::Blank, Starter::TaskBoard];

    pub fn label(&self) -> &'static str {
        match self {
            Starter::Blank => "Blank",
            Starter::TaskBoard => "Task board",
        }
    }

    /// Manifest content for an app called `name`.
    pub fn manifest(&self, name: &str) -> String {
        let header = format!(
            "[app]\nname = \"{}\"\nversion = \"0.1.0\"\n",
            name.replace('\\', "\\\\").replace('"', "\\\"")
        );
        match self {
            Starter::Blank => format!("{}{}", header, BLANK_BODY),
            Starter::TaskBoard => format!("{}{}", header, TASK_BOARD_BODY),
        }
    }
}

const BLANK_BODY: &str = r#"
[paths]
output = "src/generated"

# [entities.Note.fields.title]
# type = "string"
# required = true
#
# [views.NoteList]
# type = "list"
# entity = "Note"
"#;

const TASK_BOARD_BODY: &str = r#"description = "Tasks on a board"

[paths]
output = "src/generated"

[entities.Task.fields.id]
type = "uuid"
auto = true

[entities.Task.fields.title]
type = "string"
required = true

[entities.Task.fields.status]
type = "enum"
options = ["todo", "in-progress", "done"]
required = true
default = "todo"

[entities.Task.fields.priority]
type = "enum"
options = ["low", "medium", "high"]

[entities.Task.fields.dueDate]
type = "date"

[entities.Task.fields.notes]
type = "text"

[entities.Task.behaviors.complete]
label = "Mark done"
updates = { status = "done" }

[entities.Task.ui.display]
primary = "title"
badge = "status"

[entities.Task.ui.list]
columns = ["title", "status", "priority", "dueDate"]
filterable = ["status", "priority"]
searchable = ["title", "notes"]

[views.TaskList]
type = "list"
entity = "Task"

[views.TaskDetail]
type = "detail"
entity = "Task"

[views.TaskCreate]
type = "form"
entity = "Task"

[views.TaskEdit]
type = "form"
entity = "Task"
mode = "edit"

[views.TaskBoard]
type = "kanban"
entity = "Task"
groupBy = "status"

[views.TaskCalendar]
type = "calendar"
entity = "Task"
dateField = "dueDate"

[views.TaskDashboard]
type = "dashboard"
entity = "Task"

[workflows.TaskFlow]
entity = "Task"
states = ["todo", "in-progress", "done"]
transitions = [
    { from = "todo", to = "in-progress", action = "start" },
    { from = "in-progress", to = "done", action = "finish" },
]
"#;
