//! Persistent settings
//!
//! Stored as JSON in ~/.config/xspfconv/settings.json. Every field is
//! optional; command-line flags take precedence over stored values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::xspf::DEFAULT_TITLE;

const SETTINGS_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Settings format version
    pub version: u32,
    /// Playlist title used when none is given
    #[serde(default)]
    pub default_title: Option<String>,
    /// Directory playlists are written to
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            default_title: None,
            output_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from the user config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Save settings to the user config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;

        let settings: Self =
            serde_json::from_str(&contents).with_context(|| "Failed to parse settings")?;

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;

        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(config_dir.join("xspfconv").join("settings.json"))
    }

    /// Title to use, given an optional override
    pub fn resolve_title(&self, title: Option<&str>) -> String {
        title
            .or(self.default_title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
            .to_string()
    }

    /// Output directory to use, given an optional override
    pub fn resolve_output_dir(&self, dir: Option<&Path>) -> PathBuf {
        dir.map(Path::to_path_buf)
            .or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
