//! JavaScript/JSX AST building blocks.
//!
//! Small builders for the pieces of generated modules that have structure
//! (imports, object and array literals, JSX elements). Everything else is
//! produced as text through skeleton templates.

mod arrays;
mod imports;
mod jsx;
mod literals;
mod objects;

pub use arrays::JsArray;
pub use imports::Import;
pub use jsx::JsxElement;
pub use literals::{is_identifier, js_string, jsx_text, member, property_key, route_expr};
pub use objects::{JsObject, Property, PropertyValue};
