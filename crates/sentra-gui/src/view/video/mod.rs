//! Video screens: list, upload form, and detail with the quiz editor.

mod detail;
mod list;
mod new;
mod questions;

pub use detail::view_video_detail;
pub use list::view_videos;
pub use new::view_video_new;

use iced::widget::{button, column, pick_list, row, text};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::state::{AppState, Visibility};
use crate::theme::{button_primary, button_secondary, StudioColors, SPACING_XS};
use crate::view::user::CompanyChoice;

/// Audience controls shared by the upload form and the detail screen:
/// the visibility toggle plus the company picker it reveals.
fn visibility_section<'a>(
    state: &'a AppState,
    active: Visibility,
    company_id: Option<&str>,
    on_visibility: impl Fn(Visibility) -> Message,
    on_company: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut toggle = row![].spacing(SPACING_XS);
    for visibility in Visibility::ALL {
        let mut btn = button(text(visibility.label()).size(13))
            .padding([6.0, 14.0])
            .style(if visibility == active {
                button_primary
            } else {
                button_secondary
            });
        if visibility != active {
            btn = btn.on_press(on_visibility(visibility));
        }
        toggle = toggle.push(btn);
    }

    let mut section = column![
        text("Audience").size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_secondary),
        }),
        toggle,
        text(active.description())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
    ]
    .spacing(SPACING_XS);

    if active == Visibility::Company {
        let choices = state
            .cache
            .companies()
            .map(CompanyChoice::from_companies)
            .unwrap_or_default();
        let selected = choices
            .iter()
            .find(|choice| choice.id.as_deref() == company_id)
            .cloned();
        section = section.push(
            pick_list(choices, selected, move |choice| match choice.id {
                Some(id) => on_company(id),
                None => Message::Noop,
            })
            .placeholder("Select an organization")
            .text_size(14)
            .width(Length::Fill),
        );
    }

    section.into()
}
