//! Status badge components.
//!
//! Pill badges for publication status, user roles, and video visibility.

use iced::widget::{container, text};
use iced::{Border, Color, Element, Theme};

use sentra_api::schema::{Role, VideoStatus};

use crate::theme::{StudioColors, BORDER_RADIUS_FULL};

/// Semantic tone of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
    Info,
    Neutral,
}

impl Status {
    fn colors(self, theme: &Theme) -> (Color, Color) {
        let palette = theme.extended_palette();
        let studio = theme.studio();
        match self {
            Status::Success => (palette.success.base.color, studio.status_success_light),
            Status::Warning => (palette.warning.base.color, studio.status_warning_light),
            Status::Error => (palette.danger.base.color, studio.status_error_light),
            Status::Info => (studio.info, studio.accent_primary_light),
            Status::Neutral => (studio.text_muted, studio.background_inset),
        }
    }
}

/// Creates a pill-shaped status badge.
pub fn status_badge<'a, M: 'a>(label: impl Into<String>, status: Status) -> Element<'a, M> {
    container(
        text(label.into())
            .size(12)
            .style(move |theme: &Theme| text::Style {
                color: Some(status.colors(theme).0),
            }),
    )
    .padding([4.0, 10.0])
    .style(move |theme: &Theme| container::Style {
        background: Some(status.colors(theme).1.into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// Badge for a user role.
pub fn role_badge<'a, M: 'a>(role: Role) -> Element<'a, M> {
    let status = match role {
        Role::User => Status::Neutral,
        Role::Admin => Status::Info,
        Role::Superadmin => Status::Warning,
    };
    status_badge(role.label(), status)
}

/// Badge for a video's derived publication status.
pub fn video_status_badge<'a, M: 'a>(status: VideoStatus) -> Element<'a, M> {
    let tone = match status {
        VideoStatus::Published => Status::Success,
        VideoStatus::Scheduled => Status::Warning,
    };
    status_badge(status.label(), tone)
}
