//! Modal dialog overlay component.
//!
//! In-window modal dialogs with backdrop, title, content, and action
//! buttons. Clicking the backdrop does not close the modal; every dialog
//! carries an explicit close affordance.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{
    button_danger, button_ghost, button_primary, button_secondary, StudioColors, BORDER_RADIUS_LG,
    MODAL_WIDTH_SM, SPACING_LG, SPACING_MD, SPACING_SM,
};

/// Creates a modal dialog overlay.
///
/// The dialog appears centered on top of the base content with a
/// semi-transparent backdrop.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.studio().backdrop.into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(18),
        space::horizontal(),
        button(lucide::x().size(20).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        }))
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_SM))
    .padding(SPACING_LG)
    .style(|theme: &Theme| {
        let studio = theme.studio();
        container::Style {
            background: Some(studio.background_elevated.into()),
            border: Border {
                radius: BORDER_RADIUS_LG.into(),
                width: 1.0,
                color: studio.border_subtle,
            },
            shadow: Shadow {
                color: studio.shadow_strong,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        }
    });

    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates a confirmation modal with cancel/confirm buttons.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: String,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
) -> Element<'a, M> {
    build_confirm(
        base,
        title,
        message,
        confirm_label,
        on_confirm,
        on_cancel,
        false,
    )
}

/// Creates a confirmation modal whose confirm button is styled as
/// destructive. Used for every delete and remove dialog.
pub fn danger_confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: String,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
) -> Element<'a, M> {
    build_confirm(
        base,
        title,
        message,
        confirm_label,
        on_confirm,
        on_cancel,
        true,
    )
}

fn build_confirm<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: String,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
    destructive: bool,
) -> Element<'a, M> {
    let content = text(message).size(14).into();

    let cancel_btn: Element<'a, M> = button(text("Cancel").size(14))
        .on_press(on_cancel.clone())
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    let confirm_btn: Element<'a, M> = button(text(confirm_label).size(14))
        .on_press(on_confirm)
        .padding([10.0, 20.0])
        .style(if destructive {
            button_danger
        } else {
            button_primary
        })
        .into();

    modal(base, title, content, on_cancel, vec![cancel_btn, confirm_btn])
}
