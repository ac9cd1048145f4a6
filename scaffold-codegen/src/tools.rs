//! External processes behind narrow capabilities.
//!
//! Generation only ever talks to [`ToolRunner`] and [`ImportNormalizer`], so
//! tests substitute recording fakes and never spawn `go`.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use tracing::debug;

use crate::{Error, Result};

/// A command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Piped to the process when set.
    pub stdin: Option<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            stdin: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// `program arg1 arg2`, for logs and reports.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into an [`Error::ExternalTool`].
    pub fn check(self, invocation: &Invocation) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }
        let status = match self.code {
            Some(code) => format!("exited with status {}", code),
            None => "was terminated by a signal".to_string(),
        };
        let output = if self.stderr.trim().is_empty() {
            self.stdout
        } else {
            self.stderr
        };
        Err(Error::ExternalTool {
            command: invocation.command_line(),
            status,
            output,
        })
    }
}

/// Runs external commands to completion.
pub trait ToolRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput>;
}

/// [`ToolRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<ToolOutput> {
        debug!(command = %invocation.command_line(), cwd = %invocation.cwd.display(), "spawning");

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(if invocation.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let (Some(input), Some(mut stdin)) = (&invocation.stdin, child.stdin.take()) {
            stdin.write_all(input.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Fixes up the import block of generated Go source.
pub trait ImportNormalizer {
    /// Return `source` with imports added, removed and sorted as if it lived at `path`.
    fn normalize(&self, path: &Path, source: &str) -> Result<String>;
}

/// Pipes source through `goimports`.
pub struct GoImports<'a> {
    runner: &'a dyn ToolRunner,
    program: String,
}

impl<'a> GoImports<'a> {
    pub fn new(runner: &'a dyn ToolRunner, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }
}

impl ImportNormalizer for GoImports<'_> {
    fn normalize(&self, path: &Path, source: &str) -> Result<String> {
        let dir = path.parent().unwrap_or(path);
        // goimports resolves module-local packages relative to -srcdir, which must exist.
        std::fs::create_dir_all(dir).map_err(|e| Error::write(dir, e))?;

        let invocation = Invocation::new(&self.program, dir)
            .arg("-srcdir")
            .arg(dir.display().to_string())
            .stdin(source);
        let output = self
            .runner
            .run(&invocation)
            .map_err(|e| spawn_error(&invocation, e))?
            .check(&invocation)?;
        Ok(output.stdout)
    }
}

/// Leaves source untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl ImportNormalizer for Passthrough {
    fn normalize(&self, _path: &Path, source: &str) -> Result<String> {
        Ok(source.to_string())
    }
}

pub(crate) fn spawn_error(invocation: &Invocation, error: io::Error) -> Error {
    Error::ExternalTool {
        command: invocation.command_line(),
        status: format!("could not be started ({})", error),
        output: String::new(),
    }
}

/// `go mod tidy` in the module root.
pub fn mod_tidy(go: &str, root: &Path) -> Invocation {
    Invocation::new(go, root).args(["mod", "tidy"])
}

/// `go generate <schema_root>`, with the package path relative to the root when possible.
pub fn generate(go: &str, root: &Path, schema_root: &Path) -> Invocation {
    let target = match schema_root.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => format!("./{}", rel.display()),
        Err(_) => schema_root.display().to_string(),
    };
    Invocation::new(go, root).arg("generate").arg(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;

    #[test]
    fn test_command_line() {
        let invocation = Invocation::new("go", "/tmp").args(["mod", "tidy"]);
        assert_eq!(invocation.command_line(), "go mod tidy");
        assert_eq!(invocation.stdin, None);
    }

    #[test]
    fn test_check_prefers_stderr() {
        let invocation = Invocation::new("go", "/tmp").arg("generate");
        let err = ToolOutput {
            code: Some(1),
            stdout: "partial".to_string(),
            stderr: "boom".to_string(),
        }
        .check(&invocation)
        .unwrap_err();

        match err {
            Error::ExternalTool {
                command,
                status,
                output,
            } => {
                assert_eq!(command, "go generate");
                assert_eq!(status, "exited with status 1");
                assert_eq!(output, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_signal() {
        let invocation = Invocation::new("go", "/tmp");
        let err = ToolOutput::default().check(&invocation).unwrap_err();
        assert!(err.to_string().contains("terminated by a signal"));
    }

    #[test]
    fn test_generate_uses_relative_target() {
        let root = Path::new("/work/shop");
        let invocation = generate("go", root, &root.join("app/mall/internal/data/ent"));
        assert_eq!(invocation.args, ["generate", "./app/mall/internal/data/ent"]);
        assert_eq!(invocation.cwd, root);

        let outside = generate("go", root, Path::new("/elsewhere/ent"));
        assert_eq!(outside.args, ["generate", "/elsewhere/ent"]);
    }

    #[test]
    fn test_mod_tidy() {
        let invocation = mod_tidy("/usr/bin/go", Path::new("/work"));
        assert_eq!(invocation.command_line(), "/usr/bin/go mod tidy");
    }

    #[test]
    fn test_goimports_pipes_source() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = RecordingRunner::new().with_stdout("goimports", "formatted\n");
        let normalizer = GoImports::new(&runner, "goimports");

        let path = temp.path().join("data/user.go");
        let out = normalizer.normalize(&path, "package data\n").unwrap();

        assert_eq!(out, "formatted\n");
        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "goimports");
        assert_eq!(calls[0].stdin.as_deref(), Some("package data\n"));
        assert_eq!(calls[0].cwd, temp.path().join("data"));
    }

    #[test]
    fn test_goimports_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = RecordingRunner::new().fail_on("goimports");
        let normalizer = GoImports::new(&runner, "goimports");

        let err = normalizer
            .normalize(&temp.path().join("user.go"), "package data\n")
            .unwrap_err();
        assert!(matches!(err, Error::ExternalTool { .. }));
    }

    #[test]
    fn test_passthrough() {
        let out = Passthrough
            .normalize(Path::new("user.go"), "package data\n")
            .unwrap();
        assert_eq!(out, "package data\n");
    }
}
