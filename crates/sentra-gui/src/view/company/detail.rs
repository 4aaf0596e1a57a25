//! Company detail screen.
//!
//! In-place editing for the name and timezone, domain management, the
//! member list, and the danger zone. The delete action stays disabled
//! while the company still has users.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::{Company, Domain};
use sentra_store::QueryKey;

use crate::component::{danger_confirm_modal, role_badge, ErrorState, LoadingState, PageHeader};
use crate::message::{CompanyMessage, Message};
use crate::state::{AppState, CompanyDetailConfirm, CompanyDetailState};
use crate::theme::{
    button_danger, button_ghost, button_primary, button_secondary, container_card,
    container_danger_zone, text_input_default, StudioColors, FORM_MAX_WIDTH, SPACING_LG,
    SPACING_MD, SPACING_SM, SPACING_XS,
};

/// Render the company detail screen.
pub fn view_company_detail<'a>(
    state: &'a AppState,
    detail: &'a CompanyDetailState,
) -> Element<'a, Message> {
    let key = QueryKey::Company(detail.company_id.clone());
    let company = match state.cache.company(&detail.company_id) {
        Some(company) => company,
        None if state.cache.is_pending(&key) => {
            return LoadingState::new("Loading company").view();
        }
        None => {
            let mut error = ErrorState::new("Could not load company")
                .retry(Message::go_company(detail.company_id.clone()));
            if let Some(err) = state.cache.error(&key) {
                error = error.message(err.user_message().to_string());
            }
            return error.view();
        }
    };

    let header = PageHeader::new(company.name.clone())
        .subtitle(format!("Created {}", short_date(&company.created_at)))
        .back(Message::go_companies())
        .view();

    let body = column![
        view_identity_card(company, detail),
        Space::new().height(SPACING_MD),
        view_domains_card(company, detail),
        Space::new().height(SPACING_MD),
        view_members_card(company),
        Space::new().height(SPACING_LG),
        view_danger_zone(company, detail),
    ]
    .max_width(FORM_MAX_WIDTH);

    let base: Element<'a, Message> = scrollable(
        column![header, Space::new().height(SPACING_LG), body].padding(SPACING_LG),
    )
    .into();

    match &detail.confirm {
        Some(CompanyDetailConfirm::RemoveDomain(domain)) => danger_confirm_modal(
            base,
            "Remove Domain",
            format!(
                "Remove {}? New sign-ups from this domain will be rejected.",
                domain.domain
            ),
            "Remove",
            Message::Company(CompanyMessage::ConfirmAccepted),
            Message::Company(CompanyMessage::ConfirmCanceled),
        ),
        Some(CompanyDetailConfirm::DeleteCompany) => danger_confirm_modal(
            base,
            "Delete Company",
            format!("Delete {}? This cannot be undone.", company.name),
            "Delete",
            Message::Company(CompanyMessage::ConfirmAccepted),
            Message::Company(CompanyMessage::ConfirmCanceled),
        ),
        None => base,
    }
}

// =============================================================================
// IDENTITY
// =============================================================================

fn view_identity_card<'a>(
    company: &'a Company,
    detail: &'a CompanyDetailState,
) -> Element<'a, Message> {
    let name_row = editable_row(
        "Name",
        &company.name,
        detail.name_edit.as_deref(),
        detail.save.is_pending(),
        |value| Message::Company(CompanyMessage::NameEdited(value)),
        Message::Company(CompanyMessage::NameEditStarted),
        Message::Company(CompanyMessage::NameSaved),
        Message::Company(CompanyMessage::NameEditCanceled),
    );

    let timezone_row = editable_row(
        "Timezone",
        &company.timezone,
        detail.timezone_edit.as_deref(),
        detail.save.is_pending(),
        |value| Message::Company(CompanyMessage::TimezoneEdited(value)),
        Message::Company(CompanyMessage::TimezoneEditStarted),
        Message::Company(CompanyMessage::TimezoneSaved),
        Message::Company(CompanyMessage::TimezoneEditCanceled),
    );

    let mut card = column![
        text("Details").size(15),
        Space::new().height(SPACING_SM),
        name_row,
        timezone_row,
    ]
    .spacing(SPACING_SM);

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

/// A label/value row that swaps to an inline editor when a buffer is
/// present.
#[allow(clippy::too_many_arguments)]
fn editable_row<'a>(
    label: &'a str,
    value: &'a str,
    edit: Option<&'a str>,
    saving: bool,
    on_edit: impl Fn(String) -> Message + 'a,
    on_start: Message,
    on_save: Message,
    on_cancel: Message,
) -> Element<'a, Message> {
    let label_text = text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.studio().text_muted),
    });

    match edit {
        Some(buffer) => {
            let input = text_input(value, buffer)
                .on_input(on_edit)
                .on_submit(on_save.clone())
                .size(14)
                .padding([8.0, 10.0])
                .style(text_input_default);

            let mut save = button(text(if saving { "Saving..." } else { "Save" }).size(13))
                .padding([8.0, 14.0])
                .style(button_primary);
            if !saving && !buffer.trim().is_empty() {
                save = save.on_press(on_save);
            }

            let cancel = button(text("Cancel").size(13))
                .on_press(on_cancel)
                .padding([8.0, 14.0])
                .style(button_secondary);

            column![
                label_text,
                row![input, save, cancel]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            ]
            .spacing(SPACING_XS)
            .into()
        }
        None => row![
            column![label_text, text(value.to_string()).size(14)].spacing(SPACING_XS),
            Space::new().width(Length::Fill),
            button(lucide::pencil().size(14))
                .on_press(on_start)
                .padding([6.0, 8.0])
                .style(button_ghost),
        ]
        .align_y(Alignment::Center)
        .into(),
    }
}

// =============================================================================
// DOMAINS
// =============================================================================

fn view_domains_card<'a>(
    company: &'a Company,
    detail: &'a CompanyDetailState,
) -> Element<'a, Message> {
    let mut card = column![
        text("Authorized Domains").size(15),
        text("Emails from these domains may self-register into this company.")
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
        Space::new().height(SPACING_SM),
    ]
    .spacing(SPACING_XS);

    if company.domains.is_empty() {
        card = card.push(
            text("No domains yet.")
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                }),
        );
    } else {
        for domain in &company.domains {
            card = card.push(domain_row(domain));
        }
    }

    let adding = detail.add_domain.is_pending();
    let input = text_input("acme.com", &detail.domain_input)
        .on_input(|value| Message::Company(CompanyMessage::DomainInputChanged(value)))
        .on_submit(Message::Company(CompanyMessage::DomainSubmitted))
        .size(14)
        .padding([8.0, 10.0])
        .style(text_input_default);

    let mut add = button(
        row![
            lucide::plus().size(13),
            text(if adding { "Adding..." } else { "Add" }).size(13),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .padding([8.0, 14.0])
    .style(button_secondary);
    if !adding && !detail.domain_input.trim().is_empty() {
        add = add.on_press(Message::Company(CompanyMessage::DomainSubmitted));
    }

    card = card.push(Space::new().height(SPACING_SM)).push(
        row![input, add].spacing(SPACING_SM).align_y(Alignment::Center),
    );

    if let Some(err) = detail.add_domain.error() {
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

fn domain_row(domain: &Domain) -> Element<'_, Message> {
    row![
        lucide::link().size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        }),
        text(&domain.domain).size(14),
        Space::new().width(Length::Fill),
        button(lucide::x().size(13))
            .on_press(Message::Company(CompanyMessage::DomainRemoveRequested(
                domain.clone(),
            )))
            .padding([4.0, 6.0])
            .style(button_ghost),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

// =============================================================================
// MEMBERS
// =============================================================================

fn view_members_card(company: &Company) -> Element<'_, Message> {
    let mut card = column![
        text(format!("Members ({})", company.user_count())).size(15),
        Space::new().height(SPACING_SM),
    ]
    .spacing(SPACING_XS);

    match company.users.as_deref() {
        Some([]) | None => {
            card = card.push(
                text("No users assigned to this company.")
                    .size(13)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.studio().text_muted),
                    }),
            );
        }
        Some(users) => {
            for user in users {
                let name = match (&user.first_name, &user.last_name) {
                    (Some(first), Some(last)) => format!("{first} {last}"),
                    (Some(first), None) => first.clone(),
                    (None, Some(last)) => last.clone(),
                    (None, None) => user.email.clone(),
                };
                card = card.push(
                    row![
                        button(text(name).size(14))
                            .on_press(Message::go_user(&user.id))
                            .padding([4.0, 6.0])
                            .style(button_ghost),
                        text(&user.email)
                            .size(12)
                            .style(|theme: &Theme| text::Style {
                                color: Some(theme.studio().text_muted),
                            }),
                        Space::new().width(Length::Fill),
                        role_badge(user.role),
                    ]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
                );
            }
        }
    }

    container(card)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(container_card)
        .into()
}

// =============================================================================
// DANGER ZONE
// =============================================================================

fn view_danger_zone<'a>(
    company: &'a Company,
    detail: &'a CompanyDetailState,
) -> Element<'a, Message> {
    let deleting = detail.delete.is_pending();

    let mut delete = button(
        row![
            lucide::trash_two().size(14),
            text(if deleting { "Deleting..." } else { "Delete Company" }).size(14),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .padding([10.0, 20.0])
    .style(button_danger);
    if !company.has_users() && !deleting {
        delete = delete.on_press(Message::Company(CompanyMessage::DetailDeleteRequested));
    }

    let note = if company.has_users() {
        "Reassign or delete this company's users first."
    } else {
        "Deleting a company also removes its authorized domains."
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

// =============================================================================
// HELPERS
// =============================================================================

/// Date part of an ISO timestamp.
fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
