//! Studio color extension trait for app-specific colors.
//!
//! Provides an extension trait `StudioColors` that adds console-specific
//! color accessors to Iced's `Theme`. These are colors not covered by Iced's
//! built-in `ExtendedPalette`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::StudioColors;
//!
//! // In a style closure that receives &Theme:
//! .style(|theme: &Theme| {
//!     let studio = theme.studio();
//!     container::Style {
//!         background: Some(studio.background_elevated.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// STUDIO COLOR SET
// =============================================================================

/// Console-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub struct StudioColorSet {
    // === Status Tints ===
    /// Info color (blue) - not in Iced's extended palette
    pub info: Color,
    /// Success status light background (published badges)
    pub status_success_light: Color,
    /// Warning status light background (scheduled badges)
    pub status_warning_light: Color,
    /// Error status light background (inline error rows)
    pub status_error_light: Color,

    // === Danger Button States ===
    /// Danger button hover color
    pub danger_hover: Color,
    /// Danger button pressed color
    pub danger_pressed: Color,

    // === Accent Tints ===
    /// Light tint of primary accent (for hover backgrounds)
    pub accent_primary_light: Color,
    /// Medium tint of primary accent (for selections)
    pub accent_primary_medium: Color,

    // === Borders ===
    /// Default border color
    pub border_default: Color,
    /// Subtle/lighter border
    pub border_subtle: Color,
    /// Focused element border (typically accent color)
    pub border_focused: Color,
    /// Error border color
    pub border_error: Color,

    // === Backgrounds ===
    /// Secondary background (sidebar, surfaces)
    pub background_secondary: Color,
    /// Elevated surface (cards, modals) - white in light mode
    pub background_elevated: Color,
    /// Inset/recessed areas (answer rows, code-like blocks)
    pub background_inset: Color,

    // === Text ===
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (descriptions, hints)
    pub text_muted: Color,
    /// Disabled text
    pub text_disabled: Color,
    /// Text on accent color backgrounds
    pub text_on_accent: Color,

    // === Interactive ===
    /// Accent hover color
    pub accent_hover: Color,
    /// Accent pressed color
    pub accent_pressed: Color,
    /// Accent disabled color
    pub accent_disabled: Color,

    // === Special ===
    /// Shadow color for elevation
    pub shadow: Color,
    /// Strong shadow for higher elevation
    pub shadow_strong: Color,
    /// Modal backdrop overlay
    pub backdrop: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for console-specific colors.
///
/// Use it inside style closures that receive a `&Theme`; the set is derived
/// from the theme's extended palette so light and dark mode both work.
pub trait StudioColors {
    /// Get the studio color set for this theme.
    fn studio(&self) -> StudioColorSet;
}

impl StudioColors for Theme {
    fn studio(&self) -> StudioColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;

        StudioColorSet {
            info: Color::from_rgb(0.25, 0.55, 0.85),
            status_success_light: tint(palette.success.base.color, is_dark),
            status_warning_light: tint(palette.warning.base.color, is_dark),
            status_error_light: tint(palette.danger.base.color, is_dark),

            danger_hover: if is_dark {
                blend_color(palette.danger.base.color, Color::WHITE, 0.15)
            } else {
                blend_color(palette.danger.base.color, Color::BLACK, 0.12)
            },
            danger_pressed: blend_color(palette.danger.base.color, Color::BLACK, 0.25),

            accent_primary_light: tint(palette.primary.base.color, is_dark),
            accent_primary_medium: if is_dark {
                with_alpha(palette.primary.base.color, 0.25)
            } else {
                blend_color(palette.primary.base.color, Color::WHITE, 0.70)
            },

            border_default: if is_dark {
                Color::from_rgb(0.28, 0.28, 0.32)
            } else {
                Color::from_rgb(0.85, 0.85, 0.88)
            },
            border_subtle: if is_dark {
                Color::from_rgb(0.22, 0.22, 0.26)
            } else {
                Color::from_rgb(0.91, 0.91, 0.93)
            },
            border_focused: palette.primary.base.color,
            border_error: palette.danger.base.color,

            background_secondary: if is_dark {
                Color::from_rgb(0.12, 0.12, 0.14)
            } else {
                Color::from_rgb(0.95, 0.95, 0.97)
            },
            background_elevated: if is_dark {
                Color::from_rgb(0.16, 0.16, 0.19)
            } else {
                Color::WHITE
            },
            background_inset: if is_dark {
                Color::from_rgb(0.09, 0.09, 0.11)
            } else {
                Color::from_rgb(0.93, 0.93, 0.95)
            },

            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.80, 0.84)
            } else {
                Color::from_rgb(0.25, 0.25, 0.30)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.62, 0.62, 0.68)
            } else {
                Color::from_rgb(0.42, 0.42, 0.48)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.45, 0.45, 0.50)
            } else {
                Color::from_rgb(0.65, 0.65, 0.70)
            },
            text_on_accent: Color::WHITE,

            accent_hover: if is_dark {
                blend_color(palette.primary.base.color, Color::WHITE, 0.15)
            } else {
                blend_color(palette.primary.base.color, Color::BLACK, 0.10)
            },
            accent_pressed: blend_color(palette.primary.base.color, Color::BLACK, 0.20),
            accent_disabled: if is_dark {
                with_alpha(palette.primary.base.color, 0.30)
            } else {
                blend_color(palette.primary.base.color, Color::WHITE, 0.60)
            },

            shadow: with_alpha(Color::BLACK, if is_dark { 0.40 } else { 0.08 }),
            shadow_strong: with_alpha(Color::BLACK, if is_dark { 0.60 } else { 0.18 }),
            backdrop: with_alpha(Color::BLACK, 0.50),
        }
    }
}

/// Light tint of a base color - translucent in dark mode, blended in light.
fn tint(base: Color, is_dark: bool) -> Color {
    if is_dark {
        with_alpha(base, 0.15)
    } else {
        blend_color(base, Color::WHITE, 0.85)
    }
}

/// Linear blend of two colors; `factor` is the weight of `other`.
fn blend_color(base: Color, other: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (other.r - base.r) * factor,
        base.g + (other.g - base.g) * factor,
        base.b + (other.b - base.b) * factor,
    )
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
