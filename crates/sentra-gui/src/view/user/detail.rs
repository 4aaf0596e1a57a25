//! User detail screen.
//!
//! Profile summary, the role editor, and the danger zone. The save
//! button stays disabled until the role picker differs from the stored
//! record.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::{Role, User};
use sentra_store::QueryKey;

use crate::component::{danger_confirm_modal, role_badge, ErrorState, LoadingState, PageHeader};
use crate::message::{Message, UserMessage};
use crate::state::{AppState, UserDetailState};
use crate::theme::{
    button_danger, button_primary, container_card, container_danger_zone, StudioColors,
    FORM_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};

/// Render the user detail screen.
pub fn view_user_detail<'a>(
    state: &'a AppState,
    detail: &'a UserDetailState,
) -> Element<'a, Message> {
    let key = QueryKey::User(detail.user_id.clone());
    let user = match state.cache.user(&detail.user_id) {
        Some(user) => user,
        None if state.cache.is_pending(&key) => {
            return LoadingState::new("Loading user").view();
        }
        None => {
            let mut error = ErrorState::new("Could not load user")
                .retry(Message::go_user(detail.user_id.clone()));
            if let Some(err) = state.cache.error(&key) {
                error = error.message(err.user_message().to_string());
            }
            return error.view();
        }
    };

    let is_self = state
        .current_user
        .as_ref()
        .is_some_and(|current| current.id == user.id);

    let header = PageHeader::new(user.display_name())
        .subtitle(user.email.clone())
        .back(Message::go_users())
        .view();

    let body = column![
        view_profile_card(user),
        Space::new().height(SPACING_MD),
        view_role_card(user, detail),
        Space::new().height(SPACING_LG),
        view_danger_zone(detail, is_self),
    ]
    .max_width(FORM_MAX_WIDTH);

    let base: Element<'a, Message> = scrollable(
        column![header, Space::new().height(SPACING_LG), body].padding(SPACING_LG),
    )
    .into();

    if detail.confirm_delete {
        danger_confirm_modal(
            base,
            "Delete User",
            format!("Delete {}? This cannot be undone.", user.display_name()),
            "Delete",
            Message::User(UserMessage::DetailDeleteConfirmed),
            Message::User(UserMessage::DetailDeleteCanceled),
        )
    } else {
        base
    }
}

fn view_profile_card(user: &User) -> Element<'_, Message> {
    let field = |label: &str, value: String| -> Element<'_, Message> {
        column![
            text(label.to_string())
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                }),
            text(value).size(14),
        ]
        .spacing(2.0)
        .into()
    };

    let company_name = user
        .company
        .as_ref()
        .map(|company| company.name.clone())
        .unwrap_or_else(|| "—".to_string());

    container(
        column![
            row![
                text("Profile").size(15),
                Space::new().width(Length::Fill),
                role_badge(user.role),
            ]
            .align_y(Alignment::Center),
            Space::new().height(SPACING_SM),
            row![
                field("Email", user.email.clone()),
                field("Company", company_name),
            ]
            .spacing(SPACING_LG),
            Space::new().height(SPACING_SM),
            field("Member since", short_date(&user.created_at).to_string()),
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}

fn view_role_card<'a>(user: &'a User, detail: &'a UserDetailState) -> Element<'a, Message> {
    let selected = detail.selected_role.unwrap_or(user.role);

    let picker = pick_list(Role::ALL, Some(selected), |role| {
        Message::User(UserMessage::RolePicked(role))
    })
    .text_size(14)
    .width(Length::Fixed(200.0));

    let saving = detail.save.is_pending();
    let mut save = button(text(if saving { "Saving..." } else { "Save" }).size(14))
        .padding([8.0, 20.0])
        .style(button_primary);
    if detail.role_changed(user) && !saving {
        save = save.on_press(Message::User(UserMessage::RoleSaved));
    }

    let mut card = column![
        text("Role").size(15),
        text(selected.description())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
        Space::new().height(SPACING_SM),
        row![picker, save].spacing(SPACING_SM).align_y(Alignment::Center),
    ]
    .spacing(SPACING_XS);

    if let Some(err) = detail.save.error() {
        card = card.push(
            text(err.user_message().to_string())
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
        );
    }

    container(card)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(container_card)
        .into()
}

fn view_danger_zone(detail: &UserDetailState, is_self: bool) -> Element<'_, Message> {
    let deleting = detail.delete.is_pending();

    let mut delete = button(
        row![
            lucide::trash_two().size(14),
            text(if deleting { "Deleting..." } else { "Delete User" }).size(14),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .padding([10.0, 20.0])
    .style(button_danger);
    if !is_self && !deleting {
        delete = delete.on_press(Message::User(UserMessage::DetailDeleteRequested));
    }

    let note = if is_self {
        "You cannot delete the account you are signed in with."
    } else {
        "Removes the account and its quiz history."
    };

    container(
        column![
            text("Danger Zone").size(15),
            text(note).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
            Space::new().height(SPACING_SM),
            delete,
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(container_danger_zone)
    .into()
}

/// Date part of an ISO timestamp.
fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
