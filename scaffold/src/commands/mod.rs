mod completions;
mod data;
mod fields;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use data::DataCommand;
use eyre::Result;
use fields::FieldsCommand;

use crate::logging;

/// Extension trait for exiting on input and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "kratos-scaffold")]
#[command(version)]
#[command(about = "Generate the ent data layer of a Kratos service")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose)?;

        match &self.command {
            Commands::Data(cmd) => cmd.run(),
            Commands::Fields(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the ent schema, transfer and data files for an entity
    Data(DataCommand),

    /// Show how field specifications are parsed
    Fields(FieldsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
