//! Analyze phase - runs the schema analyzer.

use eyre::Result;

use crate::{
    analysis::analyze_system,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that runs the schema analyzer and reports its warnings.
///
/// The analysis is stored on the context; each entity warning becomes a
/// warning diagnostic located at `entities.<Name>`.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Track field usage and score schema health"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let analysis = analyze_system(&ctx.app);

        for (entity, warning) in analysis.warnings() {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), warning).at(format!("entities.{}", entity)),
            );
        }

        ctx.analysis = Some(analysis);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::task_app;

    #[test]
    fn test_analyze_phase() {
        let mut ctx = CompilationContext::new(task_app());
        assert!(ctx.analysis.is_none());

        AnalyzePhase.run(&mut ctx).expect("analyze should succeed");

        let analysis = ctx.analysis.as_ref().unwrap();
        assert_eq!(analysis.entity_count, 1);
        // task_app configures no primary display field
        assert!(ctx.warnings().any(|d| {
            d.message == "No primary display field configured"
                && d.location.as_deref() == Some("entities.Task")
        }));
        assert_eq!(ctx.warning_count(), analysis.total_warnings);
    }
}
