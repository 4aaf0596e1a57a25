//! User list screen with search and filters.
//!
//! The company and role filters are part of the cache key and go back
//! to the server; the search box narrows the fetched page locally.

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::{Role, User};
use sentra_store::QueryKey;

use crate::component::{danger_confirm_modal, role_badge, EmptyState, ErrorState, LoadingState, PageHeader};
use crate::message::{Message, Route, UserMessage};
use crate::state::{AppState, UsersState};
use crate::theme::{
    button_ghost, button_primary, button_secondary, container_card, text_input_default,
    StudioColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};

use super::CompanyChoice;

/// Render the user list screen.
pub fn view_users<'a>(state: &'a AppState, list: &'a UsersState) -> Element<'a, Message> {
    let add_button = button(
        row![lucide::plus().size(14), text("Add User").size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Navigate(Route::UserNew))
    .padding([10.0, 20.0])
    .style(button_primary);

    let header = PageHeader::new("Users")
        .subtitle("Accounts across all companies".to_string())
        .trailing(add_button)
        .view();

    let toolbar = view_toolbar(state, list);

    let key = QueryKey::Users(list.filters.clone());
    let body: Element<'a, Message> = match state.cache.users(&list.filters) {
        Some(users) => view_user_rows(list, users),
        None if state.cache.is_pending(&key) => LoadingState::new("Loading users").view(),
        None => {
            let mut error = ErrorState::new("Could not load users").retry(Message::go_users());
            if let Some(err) = state.cache.error(&key) {
                error = error.message(err.user_message().to_string());
            }
            error.view()
        }
    };

    let base: Element<'a, Message> = column![
        header,
        Space::new().height(SPACING_MD),
        toolbar,
        Space::new().height(SPACING_MD),
        body,
    ]
    .padding(SPACING_LG)
    .into();

    match &list.confirm_delete {
        Some(user) => danger_confirm_modal(
            base,
            "Delete User",
            format!("Delete {}? This cannot be undone.", user.display_name()),
            "Delete",
            Message::User(UserMessage::DeleteConfirmed),
            Message::User(UserMessage::DeleteCanceled),
        ),
        None => base,
    }
}

fn view_toolbar<'a>(state: &'a AppState, list: &'a UsersState) -> Element<'a, Message> {
    let search = row![
        lucide::search().size(14).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        }),
        text_input("Search users...", &list.search)
            .on_input(|value| Message::User(UserMessage::SearchChanged(value)))
            .size(13)
            .padding([8.0, 10.0])
            .style(text_input_default),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .width(Length::FillPortion(2));

    let mut company_choices = vec![CompanyChoice::all()];
    if let Some(companies) = state.cache.companies() {
        company_choices.extend(CompanyChoice::from_companies(companies));
    }
    let selected_company = company_choices
        .iter()
        .find(|choice| choice.id == list.filters.company_id)
        .cloned();
    let company_filter = pick_list(company_choices, selected_company, |choice| {
        Message::User(UserMessage::CompanyFilterChanged(choice.id))
    })
    .placeholder("All companies")
    .text_size(13)
    .width(Length::FillPortion(1));

    let mut role_filter = row![].spacing(SPACING_XS);
    let all_active = list.filters.role.is_none();
    let mut all_btn = button(text("All").size(13)).padding([6.0, 12.0]).style(
        if all_active {
            button_primary
        } else {
            button_secondary
        },
    );
    if !all_active {
        all_btn = all_btn.on_press(Message::User(UserMessage::RoleFilterChanged(None)));
    }
    role_filter = role_filter.push(all_btn);
    for role in Role::ALL {
        let active = list.filters.role == Some(role);
        let mut btn = button(text(role.label()).size(13)).padding([6.0, 12.0]).style(
            if active {
                button_primary
            } else {
                button_secondary
            },
        );
        if !active {
            btn = btn.on_press(Message::User(UserMessage::RoleFilterChanged(Some(role))));
        }
        role_filter = role_filter.push(btn);
    }

    row![search, company_filter, role_filter]
        .spacing(SPACING_MD)
        .align_y(Alignment::Center)
        .into()
}

fn view_user_rows<'a>(list: &'a UsersState, users: &'a [User]) -> Element<'a, Message> {
    if users.is_empty() {
        return EmptyState::new(lucide::users().size(40), "No users yet")
            .description("Invite the first user or widen the filters.")
            .action("Add User", Message::Navigate(Route::UserNew))
            .view();
    }

    let filtered = list.filtered(users);
    if filtered.is_empty() {
        return EmptyState::new(lucide::search().size(40), "No matching users")
            .description("No users match the current search.")
            .view();
    }

    let mut rows = column![].spacing(SPACING_SM);
    for user in filtered {
        rows = rows.push(user_row(user));
    }
    scrollable(rows).into()
}

fn user_row(user: &User) -> Element<'_, Message> {
    let company_name = user
        .company
        .as_ref()
        .map(|company| company.name.as_str())
        .unwrap_or("—");

    let info = column![
        row![
            text(user.display_name()).size(15),
            role_badge(user.role),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        text(format!("{} · {}", user.email, company_name))
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
    ]
    .spacing(SPACING_XS);

    let open = button(lucide::chevron_right().size(16))
        .on_press(Message::go_user(&user.id))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let delete = button(lucide::trash_two().size(14).style(|theme: &Theme| {
        text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }
    }))
    .on_press(Message::User(UserMessage::DeleteRequested(user.clone())))
    .padding([6.0, 8.0])
    .style(button_ghost);

    container(
        row![
            info,
            Space::new().width(Length::Fill),
            delete,
            Space::new().width(SPACING_XS),
            open,
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}
