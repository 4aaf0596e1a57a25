//! Navigation sidebar.
//!
//! Fixed-width shell on the left of every operator screen: brand header,
//! one entry per section, and a footer with the theme picker and
//! sign-out. Collapses to an icon rail.

use iced::widget::{button, column, container, pick_list, row, text, Space};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::constants::APP_BRAND;
use crate::message::{AuthMessage, Message};
use crate::state::{AppState, NavSection};
use crate::theme::{
    button_ghost, container_sidebar, StudioColors, ThemeMode, BORDER_RADIUS_MD, SIDEBAR_WIDTH,
    SIDEBAR_WIDTH_COLLAPSED, SPACING_MD, SPACING_SM, SPACING_XS,
};

/// Render the navigation sidebar.
pub fn view_sidebar(state: &AppState) -> Element<'_, Message> {
    let collapsed = state.settings.display.sidebar_collapsed;

    let toggle = button(if collapsed {
        lucide::chevrons_right().size(16)
    } else {
        lucide::chevrons_left().size(16)
    })
    .on_press(Message::ToggleSidebar)
    .padding([6.0, 8.0])
    .style(button_ghost);

    let header: Element<'_, Message> = if collapsed {
        container(toggle).width(Length::Fill).center_x(Length::Fill).into()
    } else {
        row![
            text(APP_BRAND)
                .size(18)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().primary.base.color),
                }),
            Space::new().width(Length::Fill),
            toggle,
        ]
        .align_y(Alignment::Center)
        .into()
    };

    let mut nav = column![].spacing(SPACING_XS);
    let active = state.view.nav_section();
    for section in NavSection::ALL {
        nav = nav.push(nav_item(section, active == Some(section), collapsed));
    }

    let footer = view_footer(state, collapsed);

    let body = column![
        header,
        Space::new().height(SPACING_MD),
        nav,
        Space::new().height(Length::Fill),
        footer,
    ]
    .spacing(0)
    .padding(SPACING_SM);

    container(body)
        .width(Length::Fixed(if collapsed {
            SIDEBAR_WIDTH_COLLAPSED
        } else {
            SIDEBAR_WIDTH
        }))
        .height(Length::Fill)
        .style(container_sidebar)
        .into()
}

fn nav_item<'a>(section: NavSection, active: bool, collapsed: bool) -> Element<'a, Message> {
    let icon = match section {
        NavSection::Dashboard => lucide::house().size(16),
        NavSection::Companies => lucide::package().size(16),
        NavSection::Users => lucide::users().size(16),
        NavSection::Videos => lucide::play().size(16),
    };

    let content: Element<'a, Message> = if collapsed {
        container(icon).width(Length::Fill).center_x(Length::Fill).into()
    } else {
        row![icon, text(section.label()).size(14)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into()
    };

    let message = match section {
        NavSection::Dashboard => Message::go_dashboard(),
        NavSection::Companies => Message::go_companies(),
        NavSection::Users => Message::go_users(),
        NavSection::Videos => Message::go_videos(),
    };

    button(content)
        .on_press(message)
        .width(Length::Fill)
        .padding([8.0, 10.0])
        .style(move |theme: &Theme, status| nav_item_style(theme, status, active))
        .into()
}

fn nav_item_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    active: bool,
) -> iced::widget::button::Style {
    use iced::widget::button::{Status, Style};

    let studio = theme.studio();
    let palette = theme.extended_palette();

    let (background, text_color) = if active {
        (
            Some(studio.accent_primary_light.into()),
            palette.primary.base.color,
        )
    } else {
        match status {
            Status::Hovered | Status::Pressed => {
                (Some(studio.background_inset.into()), studio.text_secondary)
            }
            _ => (None, studio.text_secondary),
        }
    };

    Style {
        background,
        text_color,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn view_footer(state: &AppState, collapsed: bool) -> Element<'_, Message> {
    let sign_out_icon = lucide::log_out().size(14);

    let sign_out: Element<'_, Message> = if collapsed {
        button(
            container(sign_out_icon)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .on_press(Message::Auth(AuthMessage::SignOut))
        .width(Length::Fill)
        .padding([8.0, 10.0])
        .style(button_ghost)
        .into()
    } else {
        button(
            row![sign_out_icon, text("Sign out").size(13)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        )
        .on_press(Message::Auth(AuthMessage::SignOut))
        .width(Length::Fill)
        .padding([8.0, 10.0])
        .style(button_ghost)
        .into()
    };

    if collapsed {
        return column![sign_out].spacing(SPACING_SM).into();
    }

    let theme_picker = pick_list(
        ThemeMode::ALL,
        Some(state.settings.display.theme_mode),
        Message::ThemeModeSelected,
    )
    .text_size(13)
    .width(Length::Fill);

    let mut footer = column![].spacing(SPACING_SM);

    if let Some(user) = &state.current_user {
        footer = footer.push(
            column![
                text(user.display_name()).size(13),
                text(&user.email)
                    .size(11)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.studio().text_muted),
                    }),
            ]
            .spacing(2.0)
            .padding([0.0, 10.0]),
        );
    }

    footer.push(theme_picker).push(sign_out).into()
}
