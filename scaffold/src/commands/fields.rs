use clap::Args;
use eyre::{Context, Result};
use kratos_scaffold_field::{FieldParser, PredicateKind, PredicateRegistry};

use super::UnwrapOrExit;
use crate::reports::{FieldInfo, FieldsReport, PredicateInfo, Report, TerminalOutput};

#[derive(Args)]
pub struct FieldsCommand {
    /// Fields to parse; lists the available predicates when empty
    pub fields: Vec<String>,

    /// Print the parsed fields as JSON
    #[arg(long)]
    pub json: bool,
}

impl FieldsCommand {
    pub fn run(&self) -> Result<()> {
        let registry = PredicateRegistry::standard();
        let fields = FieldParser::new(&registry)
            .parse_all(&self.fields)
            .unwrap_or_exit();

        let report = FieldsReport {
            fields: fields
                .iter()
                .map(|f| FieldInfo {
                    name: f.name.clone(),
                    declared_type: f.declared_type.clone(),
                    params: f.params(),
                })
                .collect(),
            predicates: registry
                .tokens()
                .filter_map(|token| registry.parse_token(token))
                .map(PredicateInfo::from)
                .collect(),
        };

        if self.json {
            let json =
                serde_json::to_string_pretty(&report.fields).wrap_err("Failed to serialize fields")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}

impl From<PredicateKind> for PredicateInfo {
    fn from(kind: PredicateKind) -> Self {
        Self {
            token: kind.token(),
            param_suffix: kind.display_suffix(),
            ent_suffix: kind.storage_suffix(),
            arity: kind.arity(),
        }
    }
}
