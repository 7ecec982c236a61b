//! React (JSX) view generator for trellis.
//!
//! Turns resolved view configurations into function-component modules that
//! render through a small runtime (`@trellis/runtime` by default): an entity
//! store hook, navigation, permission checks and a handful of UI components.
//!
//! # Usage
//!
//! ```ignore
//! use trellis_codegen::{ViewGenerator, generate_all};
//! use trellis_codegen_react::{ReactGenerator, RenderContext};
//! use trellis_manifest::AppDefinition;
//!
//! let app = AppDefinition::from_file("trellis.toml")?;
//! let generator = ReactGenerator::new(RenderContext::from_config(&app.codegen))
//!     .with_app(&app.app)?;
//!
//! let output = generate_all(&generator, &app, &[]);
//! for view in &output.generated {
//!     println!("{}", view.source);
//! }
//! ```
//!
//! # Generated Output
//!
//! Each module starts with one named import of exactly the runtime
//! primitives it uses, followed by a default-exported component named after
//! the view. Skeletons for the six view kinds live in `templates/` and can be
//! overridden per app through the template loader.

mod context;
mod generator;
mod views;

pub mod ast;
pub mod files;
pub mod fragments;
pub mod templates;

pub use context::{RenderContext, used_primitives};
pub use files::{ViewModule, write_modules};
pub use generator::ReactGenerator;
pub use templates::{ReactTemplates, template_loader};
