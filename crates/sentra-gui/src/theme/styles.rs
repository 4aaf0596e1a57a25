//! Widget style functions.
//!
//! Style functions receive `&Theme` and resolve colors through the extended
//! palette plus the [`StudioColors`] extension trait:
//!
//! ```rust,ignore
//! use crate::theme::button_primary;
//!
//! button(text("Save")).style(button_primary)
//! ```

#![allow(dead_code)]

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::StudioColors;
use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: studio.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(studio.accent_hover.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: studio.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.accent_pressed.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(studio.accent_disabled.into()),
            text_color: studio.text_muted,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        button::Status::Active => button::Style {
            background: Some(studio.background_elevated.into()),
            text_color: studio.text_secondary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.border_default,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.base.color.into()),
            text_color: studio.text_secondary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.text_disabled,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.background_secondary.into()),
            text_color: studio.text_secondary,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.border_default,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(studio.background_secondary.into()),
            text_color: studio.text_disabled,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.border_subtle,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Danger button style - destructive actions.
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.danger.base.color.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: studio.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(studio.danger_hover.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: studio.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.danger_pressed.into()),
            text_color: studio.text_on_accent,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(studio.accent_disabled.into()),
            text_color: studio.text_muted,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Ghost button style - minimal visual weight.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(studio.accent_primary_light.into()),
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(studio.accent_primary_medium.into()),
            text_color: studio.accent_pressed,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: studio.text_disabled,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: studio.border_subtle,
        },
        shadow: Shadow {
            color: studio.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: None,
        ..Default::default()
    }
}

/// Sidebar container style - navigation panel.
pub fn container_sidebar(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_secondary.into()),
        border: Border {
            radius: 0.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        text_color: None,
        ..Default::default()
    }
}

/// Surface container style - subtle elevation.
pub fn container_surface(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_secondary.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        text_color: None,
        ..Default::default()
    }
}

/// Inset container style - recessed area (answer rows, nested lists).
pub fn container_inset(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_inset.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: studio.border_subtle,
        },
        shadow: Shadow::default(),
        text_color: None,
        ..Default::default()
    }
}

/// Danger-zone container style - destructive action sections.
pub fn container_danger_zone(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.status_error_light.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: studio.border_error,
        },
        shadow: Shadow::default(),
        text_color: None,
        ..Default::default()
    }
}

/// Inline error row style - mutation failures near forms.
pub fn container_error(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    container::Style {
        background: Some(studio.status_error_light.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: studio.border_error,
        },
        shadow: Shadow::default(),
        text_color: Some(palette.danger.base.color),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    match status {
        text_input::Status::Active => text_input::Style {
            background: studio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.border_default,
            },
            icon: studio.text_muted,
            placeholder: studio.text_disabled,
            value: palette.background.base.text,
            selection: studio.accent_primary_medium,
        },
        text_input::Status::Hovered => text_input::Style {
            background: studio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.text_disabled,
            },
            icon: studio.text_muted,
            placeholder: studio.text_disabled,
            value: palette.background.base.text,
            selection: studio.accent_primary_medium,
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: studio.background_elevated.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_MEDIUM,
                color: studio.border_focused,
            },
            icon: studio.text_muted,
            placeholder: studio.text_disabled,
            value: palette.background.base.text,
            selection: studio.accent_primary_medium,
        },
        text_input::Status::Disabled => text_input::Style {
            background: studio.background_secondary.into(),
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: studio.border_default,
            },
            icon: studio.text_disabled,
            placeholder: studio.text_disabled,
            value: studio.text_muted,
            selection: studio.border_subtle,
        },
    }
}
