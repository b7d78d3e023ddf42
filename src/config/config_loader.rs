use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::config::DemoConfig;

const DEFAULT_CONFIG_FILE: &str = "fileops.toml";

/// The configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
    /// Named by the user; a missing file is then an error
    explicit: bool,
}

impl ConfigLoader {
    /// Create a loader for `fileops.toml` in the current directory
    pub fn new() -> Self {
        Self::with_optional_path(DEFAULT_CONFIG_FILE)
    }

    /// Set a custom config path that must exist
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            explicit: true,
        }
    }

    /// Set a config path that may be absent, in which case defaults are used
    pub fn with_optional_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            explicit: false,
        }
    }

    /// Load the configuration
    pub fn load(&self) -> Result<DemoConfig> {
        if !self.config_path.exists() {
            if self.explicit {
                anyhow::bail!("Config file not found: {:?}", self.config_path);
            }
            debug!(
                "Config file {} not found, using defaults",
                self.config_path.display()
            );
            return Ok(DemoConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file: {:?}", self.config_path))?;
        let config: DemoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", self.config_path))?;

        debug!("Loaded config from {}: {:?}", self.config_path.display(), config);
        Ok(config)
    }

    /// Save the configuration
    pub fn save(&self, config: &DemoConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(&self.config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", self.config_path))?;

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
