//! Compilation pipeline run before view generation.
//!
//! This module provides a [`Pipeline`] orchestrator that checks an
//! application schema and analyzes it ahead of code generation. The pipeline
//! provides:
//!
//! - Explicit phase boundaries (validate → analyze)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - The [`SystemAnalysis`](crate::analysis::SystemAnalysis) shared through
//!   [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use trellis_codegen::pipeline::{Pipeline, Severity};
//!
//! let ctx = Pipeline::new().run(app)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
