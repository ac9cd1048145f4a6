//! Where generated files go inside the Go project.

use std::path::{Path, PathBuf};

use kratos_scaffold_config::ProjectConfig;
use kratos_scaffold_core::{to_lower, to_snake_case};

use crate::{DataEnt, Error, Result};

/// Resolved output locations for one entity.
///
/// ```text
/// <root>/go.mod
/// <root>/<app_dir_name>/internal/data/<name>.go             data
/// <root>/<app_dir_name>/internal/data/<name>_transfer.go    transfer
/// <root>/<app_dir_name>/internal/data/ent/schema/<name>.go  schema
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    schema_root: PathBuf,
    schema_file: PathBuf,
    transfer_file: PathBuf,
    data_file: PathBuf,
    module: String,
    internal_pkg: String,
    engine: String,
}

impl ProjectLayout {
    /// Resolve the layout of `ent` in the Go module rooted at `cwd`.
    pub fn resolve(cwd: &Path, ent: &DataEnt, project: &ProjectConfig) -> Result<Self> {
        let root = cwd.to_path_buf();
        let module = read_module(&root.join("go.mod"))?;

        let app_root = if ent.app_dir_name.is_empty() {
            root.clone()
        } else {
            root.join(&ent.app_dir_name)
        };
        let output_root = app_root.join("internal").join("data");
        let schema_root = output_root.join(&project.schema_engine);
        let schema_file = schema_root
            .join("schema")
            .join(format!("{}.go", to_lower(&ent.name)));
        let snake = to_snake_case(&ent.name);
        let transfer_file = output_root.join(format!("{}_transfer.go", snake));
        let data_file = output_root.join(format!("{}.go", snake));

        let internal_pkg = [module.as_str(), ent.app_dir_name.as_str(), "internal"]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        Ok(Self {
            root,
            schema_root,
            schema_file,
            transfer_file,
            data_file,
            module,
            internal_pkg,
            engine: project.schema_engine.clone(),
        })
    }

    /// Resolve against the process working directory.
    pub fn current(ent: &DataEnt, project: &ProjectConfig) -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::path(".", format!("cannot read working directory: {}", e)))?;
        Self::resolve(&cwd, ent, project)
    }

    /// Create `<schema_root>/schema` if it does not exist yet.
    pub fn ensure_schema_root(&self) -> Result<()> {
        let dir = self.schema_dir();
        std::fs::create_dir_all(&dir).map_err(|e| Error::write(dir, e))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The ent package directory (`internal/data/ent`).
    pub fn schema_root(&self) -> &Path {
        &self.schema_root
    }

    pub fn schema_dir(&self) -> PathBuf {
        self.schema_root.join("schema")
    }

    pub fn schema_file(&self) -> &Path {
        &self.schema_file
    }

    pub fn transfer_file(&self) -> &Path {
        &self.transfer_file
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Go module path from `go.mod`.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Import path of the application's business models.
    pub fn biz_pkg(&self) -> String {
        format!("{}/biz", self.internal_pkg)
    }

    /// Import path of the generated ent client package.
    pub fn ent_pkg(&self) -> String {
        format!("{}/data/{}", self.internal_pkg, self.engine)
    }

    /// `path` relative to the project root, for display.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

fn read_module(go_mod: &Path) -> Result<String> {
    let content = std::fs::read_to_string(go_mod)
        .map_err(|e| Error::path(go_mod, format!("cannot read go.mod: {}", e)))?;
    parse_module(&content).ok_or_else(|| Error::path(go_mod, "no module directive in go.mod"))
}

/// Extract the path of the `module` directive.
fn parse_module(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let module = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!module.is_empty()).then(|| module.to_string())
    })
}
