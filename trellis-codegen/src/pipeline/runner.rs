//! Pipeline orchestrator.

use eyre::Result;
use trellis_manifest::AppDefinition;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (validate, analyze) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".trellis/debug"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(app)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with the default built-in phases and lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase (e.g. to change its lints).
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on an application schema.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on error diagnostics
    /// 2. AnalyzePhase - runs the schema analyzer
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, app: AppDefinition) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(app);
        self.run_with(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Unlike [`Pipeline::run`], the diagnostics collected before a fatal
    /// error stay available to the caller.
    pub fn run_with(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.run_phase(&self.validate, ctx)?;
        self.run_phase(&AnalyzePhase, ctx)?;
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
