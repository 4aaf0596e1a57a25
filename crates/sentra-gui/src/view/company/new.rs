//! Company creation form.

use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Theme};

use sentra_api::schema::MAX_COMPANY_NAME_LEN;

use crate::component::{PageHeader, TextField};
use crate::message::{CompanyMessage, Message};
use crate::state::{AppState, CompanyNewState};
use crate::theme::{
    button_primary, container_error, StudioColors, FORM_MAX_WIDTH, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS,
};

/// Render the company creation form.
pub fn view_company_new<'a>(_state: &'a AppState, form: &'a CompanyNewState) -> Element<'a, Message> {
    let header = PageHeader::new("New Company")
        .back(Message::go_companies())
        .view();

    let name_field = TextField::new("Name", &form.name, "Acme Corporation", |value| {
        Message::Company(CompanyMessage::NameChanged(value))
    })
    .max_length(MAX_COMPANY_NAME_LEN)
    .required(true)
    .view();

    let timezone_field = TextField::new(
        "Timezone",
        &form.timezone,
        "Europe/Amsterdam",
        |value| Message::Company(CompanyMessage::TimezoneChanged(value)),
    )
    .view();

    let timezone_hint = text("IANA identifier; scheduled publish dates resolve in this zone.")
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        });

    let submit_label = if form.create.is_pending() {
        "Creating..."
    } else {
        "Create Company"
    };
    let mut submit = button(text(submit_label).size(14))
        .padding([10.0, 24.0])
        .style(button_primary);
    if form.can_submit() {
        submit = submit.on_press(Message::Company(CompanyMessage::Submitted));
    }

    let mut body = column![
        name_field,
        Space::new().height(SPACING_MD),
        timezone_field,
        timezone_hint,
    ]
    .spacing(SPACING_XS)
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
