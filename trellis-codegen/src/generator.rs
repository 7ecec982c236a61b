//! The backend seam and batch generation.

use std::collections::HashMap;

use trellis_manifest::{AppDefinition, EntityDefinition, ViewDefinition, ViewKind};

use crate::{GenerateError, ViewConfigError, paths::view_file_name};

/// A target-language backend producing one module per view.
///
/// Implementations must be pure: the same inputs yield byte-identical output,
/// and nothing is written to disk. Generators share no mutable state, so one
/// instance may serve concurrent calls.
pub trait ViewGenerator: Send + Sync {
    /// Generate the module source for one view.
    fn generate(
        &self,
        name: &str,
        view: &ViewDefinition,
        entity: Option<&EntityDefinition>,
    ) -> Result<String, GenerateError>;

    /// File extension of generated modules, without the dot.
    fn extension(&self) -> &str;
}

/// Source text generated for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedView {
    pub name: String,
    pub kind: ViewKind,
    pub source: String,
}

/// A view whose generation failed.
#[derive(Debug)]
pub struct ViewFailure {
    pub name: String,
    pub error: GenerateError,
}

/// Result of generating many views. Failures never stop sibling views.
#[derive(Debug, Default)]
pub struct BatchOutput {
    pub generated: Vec<GeneratedView>,
    pub failures: Vec<ViewFailure>,
}

impl BatchOutput {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn generated(&self, name: &str) -> Option<&GeneratedView> {
        self.generated.iter().find(|view| view.name == name)
    }
}

/// Generate every view of `app`, or only the views named in `only` when it
/// is non-empty. Views are generated in declaration order.
///
/// A name in `only` that is not declared is reported as a failure, as is a
/// view whose module file name is already taken by an earlier view.
pub fn generate_all(
    generator: &dyn ViewGenerator,
    app: &AppDefinition,
    only: &[String],
) -> BatchOutput {
    let mut output = BatchOutput::default();
    let mut owners: HashMap<String, &str> = HashMap::new();

    for missing in only.iter().filter(|name| !app.views.contains_key(*name)) {
        output.failures.push(ViewFailure {
            name: missing.clone(),
            error: ViewConfigError::UnknownView {
                view: missing.clone(),
            }
            .into(),
        });
    }

    for (name, view) in &app.views {
        let file = view_file_name(name, generator.extension());
        let owner = *owners.entry(file.clone()).or_insert(name.as_str());
        if !only.is_empty() && !only.contains(name) {
            continue;
        }
        if owner != name.as_str() {
            tracing::warn!(view = %name, other = %owner, file = %file, "output file collision");
            output.failures.push(ViewFailure {
                name: name.clone(),
                error: ViewConfigError::OutputCollision {
                    view: name.clone(),
                    other: owner.to_string(),
                    file,
                }
                .into(),
            });
            continue;
        }
        tracing::debug!(view = %name, kind = %view.kind(), "generating view");

        match generate_one(generator, app, name, view) {
            Ok(source) => output.generated.push(GeneratedView {
                name: name.clone(),
                kind: view.kind(),
                source,
            }),
            Err(error) => {
                tracing::warn!(view = %name, error = %error, "view generation failed");
                output.failures.push(ViewFailure {
                    name: name.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        generated = output.generated.len(),
        failed = output.failures.len(),
        "generation finished"
    );
    output
}

fn generate_one(
    generator: &dyn ViewGenerator,
    app: &AppDefinition,
    name: &str,
    view: &ViewDefinition,
) -> Result<String, GenerateError> {
    let entity = match view.entity() {
        Some(entity_name) => Some(app.entity(entity_name).ok_or_else(|| {
            ViewConfigError::UnknownEntity {
                view: name.to_string(),
                entity: entity_name.to_string(),
            }
        })?),
        None => None,
    };
    generator.generate(name, view, entity)
}
