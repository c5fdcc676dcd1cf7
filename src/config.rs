use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::OutputFormat;

const APP_NAME: &str = "roadmap";
const CONFIG_FILE: &str = "config.json";

/// Environment variable naming an alternative catalog file.
pub const DATA_ENV: &str = "ROADMAP_DATA";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoadmapConfig {
    /// Catalog file to load instead of the bundled roadmap.
    pub data_path: Option<PathBuf>,
    /// Format used by `stories` when `--format` is not given.
    pub default_format: OutputFormat,
}

impl RoadmapConfig {
    /// Load configuration from the user's config directory.
    /// Returns default config if file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match get_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save the current configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Catalog source with precedence: flag, then environment, then config file.
    ///
    /// `None` means the bundled roadmap.
    pub fn resolve_data_path(
        &self,
        flag: Option<PathBuf>,
        env: Option<String>,
    ) -> Option<PathBuf> {
        flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| self.data_path.clone())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
