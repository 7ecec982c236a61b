//! Lint for enum fields without options.

use trellis_manifest::AppDefinition;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns on enum fields declaring no options.
///
/// Such fields cannot render as a select or badge, so any view using them
/// fails to generate.
pub struct EnumOptionsLint;

impl Lint for EnumOptionsLint {
    fn name(&self) -> &'static str {
        "enum-options"
    }

    fn description(&self) -> &'static str {
        "Check that enum fields declare options"
    }

    fn check(&self, app: &AppDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for (entity_name, entity) in &app.entities {
            for (name, field) in entity.enum_fields() {
                if field.options.is_empty() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("enum field '{}.{}' declares no options", entity_name, name),
                        )
                        .at(format!("entities.{}.fields.{}", entity_name, name)),
                    );
                }
            }
        }
    }
}
