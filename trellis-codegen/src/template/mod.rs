//! Skeleton templates: resolution and placeholder substitution.

mod loader;
mod substitution;

pub use loader::{LoadedTemplate, TemplateContext, TemplateLoader, TemplateSet, TemplateSource};
pub use substitution::Substitution;
