use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::pipeline::{PhaseKind, RunState};

pub type Result<T> = std::result::Result<T, Error>;

/// A failure while producing generated files.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to resolve project path '{path}': {reason}")]
    #[diagnostic(
        code(scaffold::path_resolution),
        help("run kratos-scaffold from the root of a Go module (the directory holding go.mod)")
    )]
    PathResolution { path: PathBuf, reason: String },

    #[error("failed to render {template}: {message}")]
    #[diagnostic(code(scaffold::template_render))]
    TemplateRender {
        template: &'static str,
        message: String,
    },

    #[error("`{command}` {status}{}", format_output(.output))]
    #[diagnostic(code(scaffold::external_tool))]
    ExternalTool {
        command: String,
        status: String,
        output: String,
    },

    #[error("run cannot move from '{from}' to '{to}'")]
    #[diagnostic(code(scaffold::transition))]
    Transition { from: RunState, to: RunState },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(scaffold::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_output(output: &str) -> String {
    let output = output.trim();
    if output.is_empty() {
        String::new()
    } else {
        format!(":\n{}", output)
    }
}

impl Error {
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::PathResolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn render(template: &'static str, message: impl Into<String>) -> Self {
        Error::TemplateRender {
            template,
            message: message.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

/// A generation run that stopped at `phase`.
///
/// Files written by earlier phases are left on disk.
#[derive(Debug, Error, Diagnostic)]
#[error("{phase} phase failed")]
pub struct PhaseError {
    pub phase: PhaseKind,
    /// The last state the run reached before failing.
    pub reached: RunState,
    #[source]
    #[diagnostic_source]
    pub source: Error,
}
