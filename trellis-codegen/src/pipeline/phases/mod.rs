//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints and fails on error diagnostics
//! - [`AnalyzePhase`] - runs the schema analyzer

mod analyze;
mod validate;

pub use analyze::AnalyzePhase;
pub use validate::{
    DuplicateRouteLint, EnumOptionsLint, Lint, LintInfo, ValidatePhase, ViewFieldReferenceLint,
};
