//! Line-oriented building of indented source text.

mod code_builder;

pub use code_builder::CodeBuilder;
