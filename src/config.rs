// Display settings shared by the demo binaries, read from an optional TOML file.

use crate::composite::TreeStyle;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "PATTERN_TALES_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "pattern-tales.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Bold section headings on the console.
    pub color: bool,
    /// Extra indentation added per tree level.
    pub indent_step: String,
    /// Marker printed in front of every child in a tree listing.
    pub branch_marker: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            indent_step: "  ".to_string(),
            branch_marker: "--".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Missing file means defaults; a file that exists must parse.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Looks at `PATTERN_TALES_CONFIG`, then `pattern-tales.toml` in the working directory.
    pub fn discover() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_or_default(&path)
    }

    pub fn tree_style(&self) -> TreeStyle {
        TreeStyle::new(self.indent_step.clone(), self.branch_marker.clone())
    }
}
