//! Core operations.
//!
//! This module contains the business logic for trellis commands,
//! separated from CLI argument parsing and output rendering.

pub mod analyze;
pub mod check;
pub mod generate;
pub mod init;
pub mod paths;

pub use analyze::{GraphFormat, analyze};
pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use init::init;
pub use paths::paths;

use trellis_codegen::pipeline::Diagnostic;

/// A diagnostic as one message, with its location on a second line.
fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
