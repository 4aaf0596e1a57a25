//! User creation form.

use iced::widget::{button, column, container, pick_list, row, text, Space};
use iced::{Element, Length, Theme};

use sentra_api::schema::Role;

use crate::component::{PageHeader, TextField};
use crate::message::{Message, UserMessage};
use crate::state::{AppState, UserNewState};
use crate::theme::{
    button_primary, button_secondary, container_error, StudioColors, FORM_MAX_WIDTH, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XS,
};

use super::CompanyChoice;

/// Render the user creation form.
pub fn view_user_new<'a>(state: &'a AppState, form: &'a UserNewState) -> Element<'a, Message> {
    let header = PageHeader::new("New User")
        .back(Message::go_users())
        .view();

    let email_field = TextField::new("Email", &form.email, "person@acme.com", |value| {
        Message::User(UserMessage::EmailChanged(value))
    })
    .required(true)
    .view();

    let first_name_field = TextField::new("First Name", &form.first_name, "Ada", |value| {
        Message::User(UserMessage::FirstNameChanged(value))
    })
    .view();

    let last_name_field = TextField::new("Last Name", &form.last_name, "Lovelace", |value| {
        Message::User(UserMessage::LastNameChanged(value))
    })
    .view();

    let role_picker = column![
        text("Role").size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_secondary),
        }),
        view_role_selector(form.role),
        text(form.role.description())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
    ]
    .spacing(SPACING_XS);

    let company_choices = state
        .cache
        .companies()
        .map(CompanyChoice::from_companies)
        .unwrap_or_default();
    let selected_company = company_choices
        .iter()
        .find(|choice| choice.id == form.company_id)
        .cloned();
    let company_picker = column![
        text("Company").size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_secondary),
        }),
        pick_list(company_choices, selected_company, |choice| {
            match choice.id {
                Some(id) => Message::User(UserMessage::CompanySelected(id)),
                None => Message::Noop,
            }
        })
        .placeholder("Select a company")
        .text_size(14)
        .width(Length::Fill),
    ]
    .spacing(SPACING_XS);

    let submit_label = if form.create.is_pending() {
        "Creating..."
    } else {
        "Create User"
    };
    let mut submit = button(text(submit_label).size(14))
        .padding([10.0, 24.0])
        .style(button_primary);
    if form.can_submit() {
        submit = submit.on_press(Message::User(UserMessage::Submitted));
    }

    let mut body = column![
        email_field,
        Space::new().height(SPACING_MD),
        row![first_name_field, last_name_field].spacing(SPACING_MD),
        Space::new().height(SPACING_MD),
        role_picker,
        Space::new().height(SPACING_MD),
        company_picker,
    ]
    .spacing(0)
    .max_width(FORM_MAX_WIDTH);

    if let Some(err) = form.create.error() {
        body = body.push(Space::new().height(SPACING_SM)).push(
            container(
                text(err.user_message().to_string())
                    .size(13)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    }),
            )
            .width(Length::Fill)
            .padding(SPACING_SM)
            .style(container_error),
        );
    }

    body = body.push(Space::new().height(SPACING_LG)).push(submit);

    column![header, Space::new().height(SPACING_LG), body]
        .padding(SPACING_LG)
        .into()
}

fn view_role_selector<'a>(active: Role) -> Element<'a, Message> {
    let mut selector = row![].spacing(SPACING_XS);
    for role in Role::ALL {
        let mut btn = button(text(role.label()).size(13)).padding([6.0, 14.0]).style(
            if role == active {
                button_primary
            } else {
                button_secondary
            },
        );
        if role != active {
            btn = btn.on_press(Message::User(UserMessage::RoleSelected(role)));
        }
        selector = selector.push(btn);
    }
    selector.into()
}
