//! Toast notification component.
//!
//! Shows a temporary notification that auto-dismisses after a timeout.
//! Rendered bottom-right, on top of the active screen.

use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Border, Element, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::{Toast, ToastKind};
use crate::theme::{button_ghost, StudioColors, BORDER_RADIUS_LG, SPACING_MD, SPACING_SM};

/// Renders a toast notification with an icon matching its kind and a
/// dismiss button.
pub fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let icon = match toast.kind {
        ToastKind::Success => lucide::circle_check()
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().success.base.color),
            }),
        ToastKind::Error => lucide::circle_x()
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            }),
    };

    let message = text(&toast.message)
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_secondary),
        });

    let dismiss = button(lucide::x().size(14).style(|theme: &Theme| text::Style {
        color: Some(theme.studio().text_muted),
    }))
    .on_press(Message::ToastDismissed)
    .padding([4.0, 6.0])
    .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message,
        Space::new().width(SPACING_MD),
        dismiss,
    ]
    .align_y(Alignment::Center);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .style(|theme: &Theme| {
            let studio = theme.studio();
            container::Style {
                background: Some(studio.background_secondary.into()),
                border: Border {
                    radius: BORDER_RADIUS_LG.into(),
                    width: 1.0,
                    color: studio.border_default,
                },
                shadow: Shadow {
                    color: studio.shadow,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 12.0,
                },
                ..Default::default()
            }
        })
        .into()
}
