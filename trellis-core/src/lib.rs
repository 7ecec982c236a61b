//! Core utilities and types for the trellis view generator.
//!
//! This crate provides the string helpers used to derive identifiers and
//! labels from schema names, and the write rules applied when generated
//! modules are materialised on disk.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{
    capitalize, humanize_option, pluralize, to_camel_case, to_kebab_case, to_pascal_case,
    to_snake_case,
};
