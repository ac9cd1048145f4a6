//! Fakes for unit tests.

use std::{cell::RefCell, io, path::Path};

use crate::{Error, ImportNormalizer, Invocation, Result, ToolOutput, ToolRunner};

/// Records every invocation and succeeds unless told otherwise.
///
/// Without a configured stdout, a process fed on stdin echoes it back.
#[derive(Default)]
pub struct RecordingRunner {
    log: RefCell<Vec<Invocation>>,
    fail_on: Option<String>,
    stdout: Vec<(String, String)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every invocation whose command line contains `needle`.
    pub fn fail_on(mut self, needle: &str) -> Self {
        self.fail_on = Some(needle.to_string());
        self
    }

    pub fn with_stdout(mut self, program: &str, stdout: &str) -> Self {
        self.stdout.push((program.to_string(), stdout.to_string()));
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.log.borrow().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.log.borrow().iter().map(Invocation::command_line).collect()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        self.log.borrow_mut().push(invocation.clone());

        if let Some(needle) = &self.fail_on
            && invocation.command_line().contains(needle.as_str())
        {
            return Ok(ToolOutput {
                code: Some(1),
                stdout: String::new(),
                stderr: format!("{} failed", invocation.program),
            });
        }

        let stdout = self
            .stdout
            .iter()
            .find(|(program, _)| *program == invocation.program)
            .map(|(_, out)| out.clone())
            .or_else(|| invocation.stdin.clone())
            .unwrap_or_default();
        Ok(ToolOutput {
            code: Some(0),
            stdout,
            stderr: String::new(),
        })
    }
}

/// Rejects every source it is given.
pub struct RejectingNormalizer;

impl ImportNormalizer for RejectingNormalizer {
    fn normalize(&self, path: &Path, _source: &str) -> Result<String> {
        Err(Error::ExternalTool {
            command: format!("goimports {}", path.display()),
            status: "exited with status 2".to_string(),
            output: "expected declaration".to_string(),
        })
    }
}
