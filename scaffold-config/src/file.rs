use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "scaffold.toml";

/// A `scaffold.toml` file and the configuration parsed from it.
#[derive(Debug)]
pub struct ScaffoldToml {
    path: Option<PathBuf>,
    config: Config,
}

impl ScaffoldToml {
    /// Open and parse a configuration file that must exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Load `scaffold.toml` from `dir`, falling back to the defaults when the
    /// project has none.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::open(path)
        } else {
            Ok(Self {
                path: None,
                config: Config::default(),
            })
        }
    }

    /// The file the configuration came from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let toml = ScaffoldToml::discover(temp.path()).unwrap();

        assert!(toml.path().is_none());
        assert_eq!(toml.config(), &Config::default());
    }

    #[test]
    fn test_discover_reads_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[project]\napp_dir = \"services\"\n",
        )
        .unwrap();

        let toml = ScaffoldToml::discover(temp.path()).unwrap();
        assert_eq!(toml.path(), Some(temp.path().join(CONFIG_FILE_NAME).as_path()));
        assert_eq!(toml.into_config().project.app_dir, "services");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ScaffoldToml::open(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[tools\ngo = 1").unwrap();

        let err = ScaffoldToml::open(&path).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
