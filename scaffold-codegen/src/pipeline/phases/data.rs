use crate::{
    Result,
    pipeline::{GenerationContext, Phase, PhaseKind, RunState},
    templates::DataGo,
};

/// Writes the repository implementation.
pub struct DataPhase;

impl Phase for DataPhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Data
    }

    fn description(&self) -> &'static str {
        "Write the data repository"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let ent = ctx.ent;
        ctx.emit(&DataGo::new(ent))?;
        ctx.transition(RunState::DataWritten)?;
        Ok(())
    }
}
