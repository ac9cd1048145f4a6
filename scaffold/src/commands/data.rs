use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use kratos_scaffold_codegen::{
    DataEnt, GoImports, ImportNormalizer, Passthrough, Pipeline, ProcessRunner, ProjectLayout,
};
use kratos_scaffold_config::{Config, ScaffoldToml};
use kratos_scaffold_field::{FieldParser, PredicateRegistry};

use super::UnwrapOrExit;
use crate::reports::{DataReport, GenerationResult, PreviewFile, Report, TerminalOutput, WrittenResult};

#[derive(Args)]
pub struct DataCommand {
    /// Entity name (`users` generates `User`)
    pub name: String,

    /// Fields as name:type or name:type:predicate,... (e.g. age:int32:gte,lte)
    pub fields: Vec<String>,

    /// Application namespace; files go under <app_dir>/<namespace>
    #[arg(short, long, default_value = "")]
    pub namespace: String,

    /// Preview generated code without writing to disk or running tools
    #[arg(long)]
    pub dry_run: bool,

    /// Path to scaffold.toml (defaults to ./scaffold.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl DataCommand {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to read working directory")?;
        let config = self.load_config(&cwd);

        let registry = PredicateRegistry::standard();
        let fields = FieldParser::new(&registry)
            .parse_all(&self.fields)
            .unwrap_or_exit();
        let ent = DataEnt::new(&self.name, &self.namespace, fields, &config.project).unwrap_or_exit();
        let layout = ProjectLayout::current(&ent, &config.project)
            .wrap_err("Failed to resolve project layout")?;

        let result = if self.dry_run {
            let files = Pipeline::preview(&ent, &layout).wrap_err("Failed to render files")?;
            GenerationResult::Preview(
                files
                    .into_iter()
                    .map(|f| PreviewFile {
                        path: layout.relative(&f.path).display().to_string(),
                        content: f.content,
                    })
                    .collect(),
            )
        } else {
            GenerationResult::Written(Self::generate(&ent, &layout, &config)?)
        };

        let report = DataReport {
            entity: ent.name.clone(),
            module: layout.module().to_string(),
            namespace: ent.namespace.clone(),
            params: ent.param_fields().into_iter().map(|p| p.name).collect(),
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn load_config(&self, cwd: &Path) -> Config {
        let toml = match &self.config {
            Some(path) => ScaffoldToml::open(path),
            None => ScaffoldToml::discover(cwd),
        }
        .unwrap_or_exit();

        if let Some(path) = toml.path() {
            tracing::info!(path = %path.display(), "loaded configuration");
        }
        toml.into_config()
    }

    fn generate(ent: &DataEnt, layout: &ProjectLayout, config: &Config) -> Result<WrittenResult> {
        let runner = ProcessRunner;
        let goimports;
        let normalizer: &dyn ImportNormalizer = if config.tools.format {
            goimports = GoImports::new(&runner, config.tools.goimports.as_str());
            &goimports
        } else {
            &Passthrough
        };

        let report = Pipeline::new(&runner, normalizer)
            .run(ent, layout, config)
            .wrap_err_with(|| format!("Failed to generate {}", ent.name))?;

        let relative = |paths: Vec<PathBuf>| -> Vec<String> {
            paths
                .iter()
                .map(|p| layout.relative(p).display().to_string())
                .collect()
        };
        Ok(WrittenResult {
            written: relative(report.written),
            skipped: relative(report.skipped),
            tools: report.tools,
        })
    }
}
