//! User configuration.
//!
//! Read from `config.toml` in the Tally config directory (for example
//! `~/.config/tally/config.toml` on Linux):
//!
//! ```toml
//! max_depth = 256
//! ```
//!
//! Every key is optional; missing keys fall back to their defaults. Unknown
//! keys are rejected.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TallyError};
use tally_engine::engine::{DEFAULT_MAX_DEPTH, EvalOptions};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    /// Deepest nesting of references and parentheses in one read.
    pub max_depth: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SheetConfig {
    /// Evaluation limits for this configuration.
    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            max_depth: self.max_depth,
        }
    }

    /// Location of the user config file, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("", "", "tally")?;
        let mut path = proj.config_dir().to_path_buf();
        path.push("config.toml");
        Some(path)
    }

    /// Load the config at `path`. Fails if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<SheetConfig> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, path)
    }

    /// Load the user config if there is one, falling back to defaults.
    pub fn load_default() -> SheetConfig {
        let Some(path) = Self::default_path() else {
            return SheetConfig::default();
        };
        if !path.is_file() {
            return SheetConfig::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                SheetConfig::default()
            }
        }
    }

    fn parse(text: &str, path: &Path) -> Result<SheetConfig> {
        toml::from_str(text).map_err(|source| TallyError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
