//! Generated files of the React backend.

mod view_module;

pub use view_module::{GENERATED_HEADER, ViewModule, write_modules};
