//! Declarative application schema for trellis: entities, views and
//! workflows, parsed from `trellis.toml` (or JSON) and structurally validated.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod app;
mod config;
mod entity;
mod error;
mod field;
mod file;
mod validate;
mod view;
mod workflow;

pub use app::{AppDefinition, MANIFEST_FILENAME, SourceFormat, parse_manifest};
pub use config::{AppMeta, CodegenConfig, DEFAULT_RUNTIME_MODULE, PathsConfig};
pub use entity::{
    Behavior, ColorConfig, DetailConfig, DetailSection, DisplayConfig, EntityDefinition, EntityUi,
    FormConfig, ListConfig, Permissions,
};
pub use error::{Error, Result, SourceContext};
pub use field::{FieldDefinition, FieldType, SYSTEM_FIELD_NAMES, is_system_field};
pub use file::TrellisFile;
pub use validate::ParseContext;
pub use view::{
    CalendarView, CustomView, DashboardView, DetailAction, DetailView, FormMode, FormView,
    KanbanColumn, KanbanView, ListAction, ListView, MetricDefinition, ViewBase, ViewDefinition,
    ViewKind, WidgetDefinition,
};
pub use workflow::{Transition, WorkflowDefinition};
