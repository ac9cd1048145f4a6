// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Project configuration read from `scaffold.toml`.
//!
//! Every key is optional; a project without the file gets [`Config::default`].
//!
//! ```toml
//! [project]
//! app_dir = "app"
//! schema_engine = "ent"
//!
//! [tools]
//! go = "go"
//! goimports = "goimports"
//! format = true
//!
//! [ent]
//! features = ["privacy", "sql/modifier", "sql/lock"]
//! ```

mod error;
mod file;

use std::str::FromStr;

pub use error::{Error, Result, SourceContext};
pub use file::{CONFIG_FILE_NAME, ScaffoldToml};
use serde::Deserialize;

/// Root of `scaffold.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    pub tools: ToolsConfig,
    pub ent: EntConfig,
}

/// Where generated code lives inside the Go project.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Parent directory of namespaced applications (`app/<namespace>`).
    pub app_dir: String,
    /// Directory under `internal/data` holding the schema package.
    pub schema_engine: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            app_dir: "app".to_string(),
            schema_engine: "ent".to_string(),
        }
    }
}

/// External executables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub go: String,
    pub goimports: String,
    /// Run generated sources through `goimports` before writing.
    pub format: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            go: "go".to_string(),
            goimports: "goimports".to_string(),
            format: true,
        }
    }
}

/// Options passed to the ent code generator.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EntConfig {
    pub features: Vec<String>,
}

impl Default for EntConfig {
    fn default() -> Self {
        Self {
            features: ["privacy", "sql/modifier", "sql/lock"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Config {
    /// Parse configuration with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let required = [
            ("project.app_dir", &self.project.app_dir),
            ("project.schema_engine", &self.project.schema_engine),
            ("tools.go", &self.tools.go),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ctx.validation_error(format!("'{}' must not be empty", key), key));
            }
        }

        if self.tools.format && self.tools.goimports.trim().is_empty() {
            return Err(ctx.validation_error(
                "'tools.goimports' must not be empty when 'tools.format' is enabled",
                "goimports",
            ));
        }

        let engine = &self.project.schema_engine;
        if engine.contains(['/', '\\']) || engine == "." || engine == ".." {
            return Err(ctx.validation_error(
                format!("'project.schema_engine' must be a single directory name, got '{engine}'"),
                "schema_engine",
            ));
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}
