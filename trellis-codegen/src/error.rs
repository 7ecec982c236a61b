use miette::Diagnostic;
use thiserror::Error;
use trellis_manifest::{FieldType, ViewKind};

/// A view's configuration cannot be generated.
///
/// These are schema mistakes the user fixes in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ViewConfigError {
    #[error("View '{view}' references unknown field '{field}' in {attribute}")]
    #[diagnostic(
        code(trellis::view::unknown_field),
        help("declare '{field}' on entity '{entity}' or remove it from {attribute}")
    )]
    UnknownField {
        view: String,
        entity: String,
        attribute: String,
        field: String,
    },

    #[error("Kanban groupBy field '{field}' must be an enum field (found {found})")]
    #[diagnostic(
        code(trellis::view::group_by_not_enum),
        help("point groupBy of view '{view}' at an enum field")
    )]
    GroupByNotEnum {
        view: String,
        field: String,
        found: FieldType,
    },

    #[error("Calendar dateField '{field}' must be a date field (found {found})")]
    #[diagnostic(
        code(trellis::view::date_field_not_date),
        help("point dateField of view '{view}' at a field of type \"date\"")
    )]
    DateFieldNotDate {
        view: String,
        field: String,
        found: FieldType,
    },

    #[error("Chart field '{field}' must be an enum field (found {found})")]
    #[diagnostic(code(trellis::view::chart_field_not_enum))]
    ChartFieldNotEnum {
        view: String,
        field: String,
        found: FieldType,
    },

    #[error("Enum field '{field}' used by view '{view}' declares no options")]
    #[diagnostic(
        code(trellis::view::empty_enum_options),
        help("add `options = [...]` to field '{field}'")
    )]
    EmptyEnumOptions { view: String, field: String },

    #[error("View '{view}' references unknown entity '{entity}'")]
    #[diagnostic(code(trellis::view::unknown_entity))]
    UnknownEntity { view: String, entity: String },

    #[error("No view named '{view}' is declared")]
    #[diagnostic(code(trellis::view::unknown_view))]
    UnknownView { view: String },

    #[error("View '{view}' sets {attribute} to 0")]
    #[diagnostic(
        code(trellis::view::zero_limit),
        help("use a {attribute} of at least 1, or omit it for the default")
    )]
    ZeroLimit { view: String, attribute: String },

    #[error("View '{view}' would overwrite {file} generated for view '{other}'")]
    #[diagnostic(
        code(trellis::view::output_collision),
        help("rename view '{view}' so its module name differs from '{other}'")
    )]
    OutputCollision {
        view: String,
        other: String,
        file: String,
    },

    #[error("{kind} view '{view}' requires a {attribute} attribute")]
    #[diagnostic(code(trellis::view::missing_attribute))]
    MissingAttribute {
        view: String,
        kind: ViewKind,
        attribute: String,
    },
}

impl ViewConfigError {
    /// Name of the view that failed.
    pub fn view(&self) -> &str {
        match self {
            ViewConfigError::UnknownField { view, .. }
            | ViewConfigError::GroupByNotEnum { view, .. }
            | ViewConfigError::DateFieldNotDate { view, .. }
            | ViewConfigError::ChartFieldNotEnum { view, .. }
            | ViewConfigError::EmptyEnumOptions { view, .. }
            | ViewConfigError::UnknownEntity { view, .. }
            | ViewConfigError::UnknownView { view }
            | ViewConfigError::ZeroLimit { view, .. }
            | ViewConfigError::OutputCollision { view, .. }
            | ViewConfigError::MissingAttribute { view, .. } => view,
        }
    }
}

/// Failure to generate one view.
///
/// `Config` means the schema needs fixing; `Internal` is a generator bug.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ViewConfigError),

    #[error("internal error while generating view '{view}'")]
    #[diagnostic(
        code(trellis::internal),
        help("this is a bug in trellis, please report it")
    )]
    Internal {
        view: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GenerateError {
    pub fn internal(view: impl Into<String>, source: serde_json::Error) -> Self {
        GenerateError::Internal {
            view: view.into(),
            source,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, GenerateError::Config(_))
    }

    /// The configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ViewConfigError> {
        match self {
            GenerateError::Config(err) => Some(err),
            GenerateError::Internal { .. } => None,
        }
    }
}
