//! State shared by the phases of one run.

use std::path::PathBuf;

use kratos_scaffold_config::Config;
use kratos_scaffold_core::{File, WriteResult};
use tracing::{debug, info};

use super::{PhaseKind, RunReport, RunState};
use crate::{
    DataEnt, Error, ImportNormalizer, Invocation, ProjectLayout, Result, ToolOutput, ToolRunner,
    templates::Template, tools::spawn_error,
};

/// Context passed through every phase of a run.
///
/// Phases read the aggregate and layout, write files and run tools through
/// it; the context records what happened for the [`RunReport`].
pub struct GenerationContext<'a> {
    pub ent: &'a DataEnt,
    pub layout: &'a ProjectLayout,
    pub config: &'a Config,
    runner: &'a dyn ToolRunner,
    normalizer: &'a dyn ImportNormalizer,
    history: Vec<RunState>,
    written: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
    tools: Vec<String>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        ent: &'a DataEnt,
        layout: &'a ProjectLayout,
        config: &'a Config,
        runner: &'a dyn ToolRunner,
        normalizer: &'a dyn ImportNormalizer,
    ) -> Self {
        Self {
            ent,
            layout,
            config,
            runner,
            normalizer,
            history: vec![RunState::Constructed],
            written: Vec::new(),
            skipped: Vec::new(),
            tools: Vec::new(),
        }
    }

    /// The current state of the run.
    pub fn state(&self) -> &RunState {
        self.history.last().unwrap_or(&RunState::Constructed)
    }

    /// Move to `next`, which must be the successor of the current state.
    pub fn transition(&mut self, next: RunState) -> Result<()> {
        let from = self.state();
        if from.successor().as_ref() != Some(&next) {
            return Err(Error::Transition {
                from: from.clone(),
                to: next,
            });
        }
        debug!(from = %from, to = %next, "state transition");
        self.history.push(next);
        Ok(())
    }

    pub(crate) fn fail(&mut self, phase: PhaseKind, cause: &Error) {
        self.history.push(RunState::Failed {
            phase,
            cause: cause.to_string(),
        });
    }

    /// Render `template`, normalize its imports and write it.
    pub fn emit(&mut self, template: &dyn Template) -> Result<WriteResult> {
        let path = template.path(self.layout);
        debug!(template = template.name(), path = %path.display(), "rendering");

        let source = template.render(self.layout)?;
        let source = self.normalizer.normalize(&path, &source)?;
        self.write(File::new(path, source).with_rules(template.rules()))
    }

    /// Write a file that is rendered verbatim, never normalized.
    pub fn bootstrap(&mut self, template: &dyn Template) -> Result<WriteResult> {
        let path = template.path(self.layout);
        let source = template.render(self.layout)?;
        self.write(File::new(path, source).with_rules(template.rules()))
    }

    fn write(&mut self, file: File) -> Result<WriteResult> {
        let result = file
            .write()
            .map_err(|e| Error::write(file.path(), e))?;
        let path = file.path().to_path_buf();
        match result {
            WriteResult::Written => {
                info!(path = %self.layout.relative(&path).display(), "wrote");
                self.written.push(path);
            }
            WriteResult::Skipped => {
                info!(path = %self.layout.relative(&path).display(), "exists, skipped");
                self.skipped.push(path);
            }
        }
        Ok(result)
    }

    /// Run an external tool to completion, failing on a non-zero exit.
    pub fn run_tool(&mut self, invocation: Invocation) -> Result<ToolOutput> {
        let command = invocation.command_line();
        info!(command = %command, "running");

        let output = self
            .runner
            .run(&invocation)
            .map_err(|e| spawn_error(&invocation, e))?;
        self.tools.push(command);
        output.check(&invocation)
    }

    pub fn into_report(self) -> RunReport {
        debug_assert!(self.state().is_terminal());
        RunReport {
            written: self.written,
            skipped: self.skipped,
            tools: self.tools,
            history: self.history,
        }
    }
}
