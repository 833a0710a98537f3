use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::client::DEFAULT_BASE_URL;

/// Location the weather card asks for when none is given or configured.
pub const STARTUP_LOCATION: &str = "Ankara";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Color scheme of the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        }
    }

    pub const fn all() -> &'static [ThemeVariant] {
        &[ThemeVariant::Dark, ThemeVariant::Light]
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_location = "Ankara"
/// theme = "light"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Location the weather card opens with when no argument is given.
    pub default_location: Option<String>,

    /// Override for the weather service, e.g. a local mirror.
    pub base_url: Option<String>,

    pub theme: ThemeVariant,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "tui-demos", "tui-demos")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Location for the weather card: explicit argument, then the configured
    /// default, then [`STARTUP_LOCATION`]. Blank values are skipped.
    pub fn startup_location(&self, explicit: Option<&str>) -> String {
        let non_blank = |s: &&str| !s.trim().is_empty();

        explicit
            .filter(non_blank)
            .or(self.default_location.as_deref().filter(non_blank))
            .map(str::trim)
            .unwrap_or(STARTUP_LOCATION)
            .to_string()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().filter(|s| !s.is_empty()).unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
