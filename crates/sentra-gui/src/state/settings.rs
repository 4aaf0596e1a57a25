//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::theme::ThemeMode;
use sentra_api::DEFAULT_BASE_URL;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory. Loading is
/// lenient: a missing or unparsable file yields defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API connection settings.
    pub api: ApiSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &PathBuf) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content).map_err(|e| format!("Failed to write settings: {}", e))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "Sentra", "AdminStudio")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// API SETTINGS
// =============================================================================

/// API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the platform API.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Appearance mode (light/dark/system).
    pub theme_mode: ThemeMode,

    /// Whether the navigation sidebar is collapsed to icons.
    pub sidebar_collapsed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_api() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(!settings.display.sidebar_collapsed);
    }

    #[test]
    fn test_load_from_missing_file_yields_defaults() {
        let settings = Settings::load_from(&PathBuf::from("/nonexistent/settings.toml"));
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_file_fills_missing_sections() {
        let parsed: Settings = toml::from_str("[display]\nsidebar_collapsed = true\n").unwrap();
        assert!(parsed.display.sidebar_collapsed);
        assert_eq!(parsed.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = std::env::temp_dir().join("sentra-settings-test");
        let path = dir.join("settings.toml");
        let mut settings = Settings::default();
        settings.display.theme_mode = ThemeMode::Light;
        settings.display.sidebar_collapsed = true;
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load_from(&path);
        assert_eq!(reloaded.display.theme_mode, ThemeMode::Light);
        assert!(reloaded.display.sidebar_collapsed);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
