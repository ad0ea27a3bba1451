use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::recipe::types::RuleOptions;

pub const DEFAULT_CONFIG_FILE: &str = "recipelint.yml";
pub const DEFAULT_RECIPES_PATH: &str = "src/main/resources/data/createimmersivetacz/recipes";

#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub recipes_path: PathBuf,
    pub strict_processing: bool,
    pub format: OutputFormat,
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            recipes_path: PathBuf::from(DEFAULT_RECIPES_PATH),
            strict_processing: false,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl LintConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given, else `recipelint.yml` from the working
    /// directory when present, else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = Path::new(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            debug!(path = %implicit.display(), "using config file");
            return Self::load(implicit);
        }

        Ok(Self::default())
    }

    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            strict_processing: self.strict_processing,
        }
    }
}
