//! Lint for views served at the same route.

use std::collections::HashMap;

use trellis_manifest::AppDefinition;

use super::super::Lint;
use crate::{pipeline::Diagnostic, resolve::view_route};

/// Lint that warns when two views resolve to the same route.
///
/// Routing is left to the app, so a conflict never blocks generation of
/// either view.
pub struct DuplicateRouteLint;

impl Lint for DuplicateRouteLint {
    fn name(&self) -> &'static str {
        "duplicate-route"
    }

    fn description(&self) -> &'static str {
        "Detect views served at the same route"
    }

    fn check(&self, app: &AppDefinition, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for (name, view) in &app.views {
            let route = view_route(name, view);
            if let Some(first) = seen.get(&route) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "view '{}' uses route '{}' (conflicts with '{}')",
                            name, route, first
                        ),
                    )
                    .at(format!("views.{}", name)),
                );
            } else {
                seen.insert(route, name.as_str());
            }
        }
    }
}
