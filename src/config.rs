use crate::cli::{ColorMode, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub events: EventRules,
    pub output: OutputRules,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRules {
    /// Event flags parsed ahead of the ones given on the command line.
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputRules {
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl FlagsConfig {
    /// Config flags followed by command line flags
    pub fn merged_flags(&self, cli_flags: &[String]) -> Vec<String> {
        self.events
            .flags
            .iter()
            .chain(cli_flags.iter())
            .cloned()
            .collect()
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FlagsConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FlagsConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<FlagsConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static FlagsConfig {
    static DEFAULT_CONFIG: LazyLock<FlagsConfig> = LazyLock::new(FlagsConfig::default);
    &DEFAULT_CONFIG
}
