use crate::{
    Result,
    pipeline::{GenerationContext, Phase, PhaseKind, RunState},
    templates::{ExternalSqlTmpl, GenerateGo, SchemaGo},
    tools,
};

/// Writes the ent schema, bootstraps the ent package and runs entc.
pub struct SchemaPhase;

impl Phase for SchemaPhase {
    fn kind(&self) -> PhaseKind {
        PhaseKind::Schema
    }

    fn description(&self) -> &'static str {
        "Write the ent schema and compile it"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let (ent, layout, config) = (ctx.ent, ctx.layout, ctx.config);

        layout.ensure_schema_root()?;
        ctx.emit(&SchemaGo::new(ent))?;
        ctx.transition(RunState::SchemaWritten)?;

        ctx.bootstrap(&GenerateGo::new(&config.ent.features))?;
        ctx.bootstrap(&ExternalSqlTmpl)?;

        let go = &config.tools.go;
        ctx.run_tool(tools::mod_tidy(go, layout.root()))?;
        ctx.run_tool(tools::generate(go, layout.root(), layout.schema_root()))?;
        ctx.transition(RunState::SchemaCompiled)?;
        Ok(())
    }
}
