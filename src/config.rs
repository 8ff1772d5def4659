//! Configuration management for mrclog

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
}

/// Input selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// File extensions to process, e.g. [".log"]
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec![".log".to_string()]
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

/// Chart contents and size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Algorithms on the runtime chart
    #[serde(default = "default_runtime_algorithms")]
    pub runtime_algorithms: Vec<String>,
    /// Algorithms on the Olken runtime chart
    #[serde(default = "default_olken_algorithms")]
    pub olken_algorithms: Vec<String>,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_runtime_algorithms() -> Vec<String> {
    vec!["Evicting-Map".to_string(), "Fixed-Size-SHARDS".to_string()]
}

fn default_olken_algorithms() -> Vec<String> {
    vec!["Olken".to_string()]
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    800
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            runtime_algorithms: default_runtime_algorithms(),
            olken_algorithms: default_olken_algorithms(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Config {
    /// Get the default config file path (~/.config/mrclog/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mrclog").join("config.toml"))
    }

    /// Load from `path` if given, else from the default path if it exists,
    /// else return defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config {:?}: {}", path, e))?;
        Ok(config)
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.input.extensions.is_empty() {
            return Err("input.extensions must not be empty".to_string());
        }
        if self.charts.width == 0 || self.charts.height == 0 {
            return Err("charts.width and charts.height must be positive".to_string());
        }
        Ok(())
    }
}
