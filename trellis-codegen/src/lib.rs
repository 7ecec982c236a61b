//! Language-agnostic view generation machinery for trellis.
//!
//! This crate provides the pieces every target-language backend shares
//! (e.g. `trellis-codegen-react`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indented line building ([`builder::CodeBuilder`])
//! - [`template`] - Skeleton loading and single-pass placeholder substitution
//! - [`resolve`] - View defaults and validation ([`resolve_view`])
//! - [`analysis`] - Field usage tracking, health scores and the dependency graph
//! - [`pipeline`] - Validate → analyze compilation pipeline with lints and plugins
//! - [`paths`] - Resolution of configured source and output locations
//! - [`testing`] - Test utilities (feature-gated)

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod analysis;
pub mod builder;
mod error;
mod generator;
pub mod paths;
pub mod pipeline;
pub mod resolve;
pub mod template;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{GenerateError, ViewConfigError};
pub use generator::{BatchOutput, GeneratedView, ViewFailure, ViewGenerator, generate_all};
pub use resolve::{ResolvedView, field_label, option_label, resolve_view};
