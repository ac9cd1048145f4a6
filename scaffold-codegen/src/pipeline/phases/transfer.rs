use crate::{
    Result,
    pipeline::{GenerationContext, Phase, PhaseKind, RunState},
    templates::TransferGo,
};

/// Writes the ent-to-biz conversion functions.
pub struct TransferPhase;

impl Phase for TransferPhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Transfer
    }

    fn description(&self) -> &'static str {
        "Write the data transfer conversions"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let ent = ctx.ent;
        ctx.emit(&TransferGo::new(ent))?;
        ctx.transition(RunState::TransferWritten)?;
        Ok(())
    }
}
