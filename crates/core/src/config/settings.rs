use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".robot-runner.json", "robot-runner.json"];
pub const DEFAULT_RUNNER_COMMAND: &str = "robot";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Extensions (without the dot) treated as suite files
    #[serde(default = "default_suite_extensions")]
    pub suite_extensions: Vec<String>,
}

/// How the external test runner is invoked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunnerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

fn default_suite_extensions() -> Vec<String> {
    vec!["robot".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runner: RunnerConfig::default(),
            suite_extensions: default_suite_extensions(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_file() {
            start_path.parent()?
        } else {
            start_path
        };

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }
            current = current.parent()?;
        }
    }

    /// Config governing `path`, or defaults when none is found
    pub fn load_for(path: &Path) -> Result<Self> {
        match Self::find_config_file(path) {
            Some(config_path) => {
                debug!("Loading config from {}", config_path.display());
                Self::load_from_file(&config_path)
            }
            None => {
                debug!("No config found for {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn runner_command(&self) -> &str {
        self.runner
            .command
            .as_deref()
            .unwrap_or(DEFAULT_RUNNER_COMMAND)
    }
}
