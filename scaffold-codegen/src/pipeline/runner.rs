//! Pipeline orchestrator.

use kratos_scaffold_config::Config;
use kratos_scaffold_core::File;
use tracing::{info, warn};

use super::{
    GenerationContext, Phase, PhaseKind, PreviewFile, RunReport, RunState,
    phases::{DataPhase, SchemaPhase, TransferPhase},
};
use crate::{
    DataEnt, Error, ImportNormalizer, PhaseError, ProjectLayout, Result, ToolRunner,
    templates::{DataGo, SchemaGo, Template, TransferGo},
};

/// Runs the generation phases against a project.
pub struct Pipeline<'a> {
    runner: &'a dyn ToolRunner,
    normalizer: &'a dyn ImportNormalizer,
    phases: Vec<Box<dyn Phase>>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline with the schema, transfer and data phases.
    pub fn new(runner: &'a dyn ToolRunner, normalizer: &'a dyn ImportNormalizer) -> Self {
        Self {
            runner,
            normalizer,
            phases: vec![
                Box::new(SchemaPhase),
                Box::new(TransferPhase),
                Box::new(DataPhase),
            ],
        }
    }

    /// Run every phase in order.
    ///
    /// # Errors
    ///
    /// Returns the first phase failure together with the state the run had
    /// reached. Nothing is rolled back.
    pub fn run(
        &self,
        ent: &DataEnt,
        layout: &ProjectLayout,
        config: &Config,
    ) -> std::result::Result<RunReport, PhaseError> {
        let mut ctx = GenerationContext::new(ent, layout, config, self.runner, self.normalizer);

        for phase in &self.phases {
            info!(phase = phase.name(), "{}", phase.description());
            if let Err(source) = phase.run(&mut ctx) {
                return Err(abort(&mut ctx, phase.kind(), source));
            }
        }

        // Only a run whose data phase completed can finish.
        if let Err(source) = ctx.transition(RunState::Done) {
            return Err(abort(&mut ctx, PhaseKind::Data, source));
        }
        Ok(ctx.into_report())
    }

    /// Render the schema, transfer and data files without touching the
    /// filesystem or running any tool.
    pub fn preview(ent: &DataEnt, layout: &ProjectLayout) -> Result<Vec<PreviewFile>> {
        let templates: [&dyn Template; 3] = [
            &SchemaGo::new(ent),
            &TransferGo::new(ent),
            &DataGo::new(ent),
        ];

        templates
            .into_iter()
            .map(|template| -> Result<PreviewFile> {
                let path = template.path(layout);
                let file = File::new(&path, template.render(layout)?).with_rules(template.rules());
                Ok(PreviewFile {
                    content: file.content(),
                    path,
                })
            })
            .collect()
    }
}

fn abort(ctx: &mut GenerationContext<'_>, phase: PhaseKind, source: Error) -> PhaseError {
    let reached = ctx.state().clone();
    warn!(phase = %phase, reached = %reached, error = %source, "phase failed");
    ctx.fail(phase, &source);
    PhaseError {
        phase,
        reached,
        source,
    }
}
