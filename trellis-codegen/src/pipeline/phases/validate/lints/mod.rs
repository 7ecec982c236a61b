//! Built-in lints for schema validation.

mod duplicate_route;
mod enum_options;
mod view_field_reference;

pub use duplicate_route::DuplicateRouteLint;
pub use enum_options::EnumOptionsLint;
pub use view_field_reference::ViewFieldReferenceLint;
