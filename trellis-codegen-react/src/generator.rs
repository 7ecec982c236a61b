//! The React view generator.

use serde_json::Value;
use trellis_codegen::{
    GenerateError, ViewGenerator, resolve_view,
    template::{TemplateLoader, TemplateSource},
};
use trellis_manifest::{AppMeta, EntityDefinition, ViewDefinition};

use crate::{context::RenderContext, templates::template_loader, views};

/// Generates one JSX module per view.
///
/// Holds no mutable state: one instance can serve concurrent calls, and the
/// same inputs always produce the same text.
pub struct ReactGenerator {
    context: RenderContext,
    loader: TemplateLoader,
    app: Value,
}

impl Default for ReactGenerator {
    fn default() -> Self {
        Self::new(RenderContext::default())
    }
}

impl ReactGenerator {
    pub fn new(context: RenderContext) -> Self {
        Self {
            loader: template_loader().with_extension(&context.extension),
            context,
            app: Value::Null,
        }
    }

    /// Use a loader that also sees app-owned templates and markup.
    pub fn with_loader(mut self, loader: TemplateLoader) -> Self {
        self.loader = loader;
        self
    }

    /// `[app]` metadata exposed to static markup as the `app` layer.
    pub fn with_app(mut self, app: &AppMeta) -> serde_json::Result<Self> {
        self.app = serde_json::to_value(app)?;
        Ok(self)
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }
}

impl ViewGenerator for ReactGenerator {
    fn generate(
        &self,
        name: &str,
        view: &ViewDefinition,
        entity: Option<&EntityDefinition>,
    ) -> Result<String, GenerateError> {
        let resolved = resolve_view(name, view, entity)?;
        let template = views::template_name(&resolved);

        let tokens =
            views::substitution(&resolved).map_err(|e| GenerateError::internal(name, e))?;
        let view_value = serde_json::to_value(view).map_err(|e| GenerateError::internal(name, e))?;
        let ctx = views::template_values(&resolved)
            .with_view(view_value)
            .with_app(self.app.clone());

        let loaded = self.loader.load(&template, &ctx);
        tracing::debug!(
            view = name,
            kind = %resolved.kind(),
            template = %template,
            source = loaded.source.as_str(),
            "rendering view"
        );

        let body = match loaded.source {
            TemplateSource::Markup(_) => {
                views::markup_component(&resolved.base().component, &loaded.text)
            }
            _ => tokens.apply(&loaded.text),
        };
        Ok(self.context.module_source(&body))
    }

    fn extension(&self) -> &str {
        &self.context.extension
    }
}
