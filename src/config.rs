use anyhow::{Context, Result};
use ics_earliest_core::{Extreme, TimestampField};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::locate::download_dir;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory bare file names are looked up in
    #[serde(default = "default_search_dir")]
    pub search_dir: String,

    /// Timestamp field events are compared by
    #[serde(default)]
    pub field: TimestampField,

    /// Whether to pick the smallest or largest value
    #[serde(default)]
    pub extreme: Extreme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_dir: default_search_dir(),
            field: TimestampField::default(),
            extreme: Extreme::default(),
        }
    }
}

fn default_search_dir() -> String {
    download_dir().to_string_lossy().into_owned()
}

/// Get the config directory path (~/.config/ics-earliest)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("ics-earliest");
    Ok(config_dir)
}

/// Get the config file path (~/.config/ics-earliest/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/ics-earliest/config.toml
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Load config from `path`, falling back to defaults when the file is missing.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
