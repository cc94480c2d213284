use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::LayoutSettings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService;

impl SettingsService {
    /// `<config dir>/week-layout/settings.toml`, if a home directory exists
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "week-layout").map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load and validate settings from a TOML file
    pub fn load(path: &Path) -> Result<LayoutSettings> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load settings from {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<LayoutSettings> {
        let settings: LayoutSettings = toml::from_str(content).context("Invalid settings TOML")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> LayoutSettings {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using default layout settings");
            return LayoutSettings::default();
        };
        Self::load_from_or_default(&path)
    }

    pub fn load_from_or_default(path: &Path) -> LayoutSettings {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return LayoutSettings::default();
        }

        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{:#}; using default layout settings", err);
                LayoutSettings::default()
            }
        }
    }

    /// Validate and write settings as TOML, creating parent directories
    pub fn save(path: &Path, settings: &LayoutSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }
}
