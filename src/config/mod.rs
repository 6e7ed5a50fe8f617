//! Configuration loading and management

mod settings;

pub use settings::{
    BackendSettings, CameraSettings, LauncherSettings, Settings, VoiceSettings,
};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Create a configuration with default values
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Directory holding the global config and downloaded whisper models
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".annie")
    }

    /// Path to the global config file (`~/.annie/config.toml`)
    pub fn global_config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Load the global config, creating it with defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::global_config_path();
        if !path.exists() {
            Self::init_config_file(&path, false)?;
            info!("Created default config at {}", path.display());
        }
        Self::from_file(&path)
    }

    /// Write a default config file to the given path
    pub fn init_config_file(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let body = toml::to_string_pretty(&Config::with_defaults())
            .context("Failed to serialize default config")?;
        let content = format!("# Annie voice assistant configuration\n\n{body}");

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
