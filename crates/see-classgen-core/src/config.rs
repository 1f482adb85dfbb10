//! Optional `see-classgen.json` configuration file.
//!
//! Every key is optional. Command-line flags take precedence over values found here,
//! and values found here take precedence over the built-in defaults.
//!
//! ```json
//! {
//!   "project_name": "see-object",
//!   "namespace": "See",
//!   "parent": "Object",
//!   "source_dir": "src"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ClassGenError, Result};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "see-classgen.json";

/// Project name written into the license block by default.
pub const DEFAULT_PROJECT_NAME: &str = "see-object";

/// Defaults for the `new` command, loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub project_name: Option<String>,
    pub namespace: Option<String>,
    pub parent: Option<String>,
    /// Relative paths are resolved against the config file's directory.
    pub source_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ClassGenError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self =
            serde_json::from_str(&text).map_err(|source| ClassGenError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let (Some(dir), Some(base)) = (config.source_dir.as_mut(), path.parent()) {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
