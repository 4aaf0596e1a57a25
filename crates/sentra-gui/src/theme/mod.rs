//! Theme module for Sentra Admin Studio.
//!
//! Provides the studio theme built on Iced's `Theme::custom`:
//! - Light/dark palettes with a System mode following the OS (`studio_theme`)
//! - Console-specific colors via the [`StudioColors`] extension trait
//! - Spacing constants (`spacing`)
//! - Widget style functions (`styles`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::{StudioColors, button_primary, SPACING_MD};
//!
//! button(text("Save")).style(button_primary).padding(SPACING_MD)
//! ```

pub mod colors;
pub mod spacing;
pub mod styles;

pub use colors::{StudioColorSet, StudioColors};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, FORM_MAX_WIDTH, MODAL_WIDTH_MD, MODAL_WIDTH_SM, SIDEBAR_WIDTH,
    SIDEBAR_WIDTH_COLLAPSED, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
    SPACING_XXL,
};

pub use styles::{
    button_danger, button_ghost, button_primary, button_secondary, container_card,
    container_danger_zone, container_error, container_inset, container_sidebar, container_surface,
    text_input_default,
};

use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Appearance mode for the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light appearance.
    Light,
    /// Dark appearance.
    #[default]
    Dark,
    /// Follow the operating system preference.
    System,
}

impl ThemeMode {
    /// All modes, for settings pickers.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Whether this mode renders dark, given the OS preference.
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the studio theme for the given mode.
///
/// # Arguments
///
/// * `mode` - Light, Dark, or System mode
/// * `system_is_dark` - Whether the OS is in dark mode (for System mode)
pub fn studio_theme(mode: ThemeMode, system_is_dark: bool) -> Theme {
    let is_dark = mode.is_dark(system_is_dark);
    let palette = if is_dark {
        dark_palette()
    } else {
        light_palette()
    };
    let name = format!("Sentra {}", if is_dark { "Dark" } else { "Light" });
    Theme::custom(name, palette)
}

/// Light palette - near-white surfaces with an emerald accent.
fn light_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.10, 0.10, 0.12),
        primary: Color::from_rgb(0.05, 0.59, 0.41),
        success: Color::from_rgb(0.20, 0.70, 0.40),
        warning: Color::from_rgb(0.95, 0.65, 0.05),
        danger: Color::from_rgb(0.85, 0.25, 0.25),
    }
}

/// Dark palette - slate surfaces matching the platform's web console.
fn dark_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.07, 0.08, 0.10),
        text: Color::from_rgb(0.93, 0.94, 0.96),
        primary: Color::from_rgb(0.20, 0.83, 0.60),
        success: Color::from_rgb(0.25, 0.75, 0.45),
        warning: Color::from_rgb(0.98, 0.75, 0.14),
        danger: Color::from_rgb(0.94, 0.40, 0.38),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_mode_follows_os() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
        assert!(!ThemeMode::Light.is_dark(true));
    }

    #[test]
    fn test_mode_round_trips_through_settings() {
        let toml = "mode = \"system\"";
        #[derive(serde::Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(parsed.mode, ThemeMode::System);
    }
}
