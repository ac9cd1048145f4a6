//! Pipeline phase trait.

use super::{GenerationContext, PhaseKind};
use crate::Result;

/// One step of a generation run.
///
/// Phases run in order and stop the run at the first error. Each phase
/// moves the context's [`RunState`](super::RunState) forward as it
/// completes its writes.
pub trait Phase {
    fn kind(&self) -> PhaseKind;

    /// The name of this phase, used in logs.
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()>;
}
