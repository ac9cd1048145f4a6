use std::{fmt, path::PathBuf};

/// The three generation phases, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Schema,
    Transfer,
    Data,
}

impl PhaseKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::Schema => "schema",
            PhaseKind::Transfer => "transfer",
            PhaseKind::Data => "data",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of one generation run.
///
/// States only move forward; a failure ends the run in [`RunState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Constructed,
    SchemaWritten,
    SchemaCompiled,
    TransferWritten,
    DataWritten,
    Done,
    Failed { phase: PhaseKind, cause: String },
}

impl RunState {
    /// The state a successful run moves to next, `None` once finished.
    pub fn successor(&self) -> Option<RunState> {
        let next = match self {
            RunState::Constructed => RunState::SchemaWritten,
            RunState::SchemaWritten => RunState::SchemaCompiled,
            RunState::SchemaCompiled => RunState::TransferWritten,
            RunState::TransferWritten => RunState::DataWritten,
            RunState::DataWritten => RunState::Done,
            RunState::Done | RunState::Failed { .. } => return None,
        };
        Some(next)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed { .. })
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Constructed => f.write_str("constructed"),
            RunState::SchemaWritten => f.write_str("schema written"),
            RunState::SchemaCompiled => f.write_str("schema compiled"),
            RunState::TransferWritten => f.write_str("transfer written"),
            RunState::DataWritten => f.write_str("data written"),
            RunState::Done => f.write_str("done"),
            RunState::Failed { phase, cause } => write!(f, "{} phase failed: {}", phase, cause),
        }
    }
}

/// What a finished run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Command lines of the external tools that ran, in order.
    pub tools: Vec<String>,
    pub history: Vec<RunState>,
}

/// A rendered file that a dry run would write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}
