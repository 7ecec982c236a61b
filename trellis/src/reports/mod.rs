//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod analyze;
mod check;
mod generate;
mod init;
mod output;
mod paths;

pub use analyze::{AnalyzeReport, EntityReport, FieldReport, GraphReport};
pub use check::{CheckReport, SchemaSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use init::InitReport;
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
pub use paths::PathsReport;
