#![allow(dead_code)]

use std::{cell::RefCell, fs, io};

use kratos_scaffold_codegen::{DataEnt, Invocation, ProjectLayout, ToolOutput, ToolRunner};
use kratos_scaffold_config::Config;
use kratos_scaffold_field::{FieldParser, PredicateRegistry};
use tempfile::TempDir;

/// A Go module in a temporary directory with one parsed entity.
pub struct Project {
    pub dir: TempDir,
    pub ent: DataEnt,
    pub layout: ProjectLayout,
    pub config: Config,
}

impl Project {
    pub fn new(name: &str, namespace: &str, fields: &[&str]) -> Self {
        Self::with_config(name, namespace, fields, Config::default())
    }

    pub fn with_config(name: &str, namespace: &str, fields: &[&str], config: Config) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("go.mod"),
            "module github.com/acme/shop\n\ngo 1.21\n",
        )
        .unwrap();

        let registry = PredicateRegistry::standard();
        let fields = FieldParser::new(&registry).parse_all(fields).unwrap();
        let ent = DataEnt::new(name, namespace, fields, &config.project).unwrap();
        let layout = ProjectLayout::resolve(dir.path(), &ent, &config.project).unwrap();

        Self {
            dir,
            ent,
            layout,
            config,
        }
    }
}

/// Records invocations; fails any whose command line contains `fail_on`.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: RefCell<Vec<Invocation>>,
    pub fail_on: Option<&'static str>,
}

impl FakeRunner {
    pub fn failing_on(needle: &'static str) -> Self {
        Self {
            fail_on: Some(needle),
            ..Self::default()
        }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        let failed = self
            .fail_on
            .is_some_and(|needle| invocation.command_line().contains(needle));

        Ok(ToolOutput {
            code: Some(if failed { 1 } else { 0 }),
            // Formatters receive the source on stdin and hand it back unchanged.
            stdout: invocation.stdin.clone().unwrap_or_default(),
            stderr: if failed {
                "exit status 1".to_string()
            } else {
                String::new()
            },
        })
    }
}
