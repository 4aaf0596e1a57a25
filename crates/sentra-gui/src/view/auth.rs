//! Sign-in, access-check, and access-denied screens.
//!
//! These are the only screens rendered without the sidebar shell. The
//! sign-in screen takes a bearer token and an optional work email for
//! the one-time registration fallback; the access-check screen lets a
//! prospective operator verify their email domain before signing up.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::TextField;
use crate::constants::{APP_DESCRIPTION, APP_NAME};
use crate::message::{AuthMessage, Message, Route};
use crate::state::{
    AccessDeniedReason, AccessDeniedState, CheckAccessPhase, CheckAccessState, SignInState,
};
use crate::theme::{
    button_ghost, button_primary, button_secondary, container_card, container_error,
    container_inset, StudioColors, MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};

// =============================================================================
// SIGN IN
// =============================================================================

/// Render the sign-in screen: centered card with token and email fields.
pub fn view_sign_in(state: &SignInState) -> Element<'_, Message> {
    let header = column![
        text(APP_NAME).size(24),
        text(APP_DESCRIPTION)
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
    ]
    .spacing(SPACING_XS)
    .align_x(Alignment::Center);

    let token_field = TextField::new(
        "Access Token",
        &state.token,
        "Paste your bearer token",
        |value| Message::Auth(AuthMessage::TokenChanged(value)),
    )
    .secure(true)
    .required(true)
    .on_submit(Message::Auth(AuthMessage::Submit))
    .view();

    let email_field = TextField::new(
        "Work Email",
        &state.email,
        "you@company.com",
        |value| Message::Auth(AuthMessage::EmailChanged(value)),
    )
    .on_submit(Message::Auth(AuthMessage::Submit))
    .view();

    let email_hint = text("Only needed the first time you sign in.")
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        });

    let submit_label = if state.verifying {
        "Signing in..."
    } else {
        "Sign In"
    };
    let mut submit = button(
        container(text(submit_label).size(14))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding([12.0, 24.0])
    .style(button_primary);
    if state.can_submit() {
        submit = submit.on_press(Message::Auth(AuthMessage::Submit));
    }

    let mut card = column![
        header,
        Space::new().height(SPACING_LG),
        token_field,
        Space::new().height(SPACING_MD),
        email_field,
        email_hint,
    ]
    .spacing(SPACING_XS);

    if let Some(error) = &state.error {
        card = card.push(Space::new().height(SPACING_SM)).push(
            container(text(error).size(13).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            }))
            .width(Length::Fill)
            .padding(SPACING_SM)
            .style(container_error),
        );
    }

    card = card
        .push(Space::new().height(SPACING_LG))
        .push(submit)
        .push(Space::new().height(SPACING_SM))
        .push(
            container(
                button(text("Don't have access? Check your email domain").size(13))
                    .on_press(Message::Navigate(Route::CheckAccess))
                    .padding([6.0, 10.0])
                    .style(button_ghost),
            )
            .width(Length::Fill)
            .center_x(Length::Fill),
        );

    centered_card(card.into())
}

// =============================================================================
// CHECK ACCESS
// =============================================================================

/// Render the pre-signup domain check screen.
pub fn view_check_access(state: &CheckAccessState) -> Element<'_, Message> {
    let header = column![
        text("Check Access").size(24),
        text("Verify whether your email domain is authorized for the platform.")
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
    ]
    .spacing(SPACING_XS)
    .align_x(Alignment::Center);

    let email_field = TextField::new(
        "Work Email",
        &state.email,
        "you@company.com",
        |value| Message::Auth(AuthMessage::CheckEmailChanged(value)),
    )
    .required(true)
    .on_submit(Message::Auth(AuthMessage::CheckDomain))
    .view();

    let submit_label = if matches!(state.phase, CheckAccessPhase::Checking) {
        "Checking..."
    } else {
        "Check Domain"
    };
    let mut submit = button(
        container(text(submit_label).size(14))
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .padding([12.0, 24.0])
    .style(button_primary);
    if state.can_submit() {
        submit = submit.on_press(Message::Auth(AuthMessage::CheckDomain));
    }

    let mut card = column![
        header,
        Space::new().height(SPACING_LG),
        email_field,
        Space::new().height(SPACING_MD),
        submit,
    ]
    .spacing(0);

    if let Some(feedback) = view_check_feedback(&state.phase) {
        card = card.push(Space::new().height(SPACING_MD)).push(feedback);
    }

    card = card.push(Space::new().height(SPACING_SM)).push(
        container(
            button(text("Back to sign in").size(13))
                .on_press(Message::Navigate(Route::SignIn))
                .padding([6.0, 10.0])
                .style(button_ghost),
        )
        .width(Length::Fill)
        .center_x(Length::Fill),
    );

    centered_card(card.into())
}

fn view_check_feedback<'a>(phase: &'a CheckAccessPhase) -> Option<Element<'a, Message>> {
    match phase {
        CheckAccessPhase::Idle => None,
        CheckAccessPhase::Checking => Some(
            row![
                lucide::loader().size(14),
                text("Checking your domain...").size(13),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into(),
        ),
        CheckAccessPhase::Allowed { company_name } => {
            let message = match company_name {
                Some(name) => format!("Your domain is authorized under {name}. You can sign in."),
                None => "Your domain is authorized. You can sign in.".to_string(),
            };
            Some(
                container(
                    row![
                        lucide::shield_check()
                            .size(16)
                            .style(|theme: &Theme| text::Style {
                                color: Some(theme.extended_palette().success.base.color),
                            }),
                        text(message).size(13),
                    ]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
                )
                .width(Length::Fill)
                .padding(SPACING_SM)
                .style(container_inset)
                .into(),
            )
        }
        CheckAccessPhase::Denied { message } => Some(
            container(
                row![
                    lucide::shield_x()
                        .size(16)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().danger.base.color),
                        }),
                    text(message).size(13),
                ]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
            )
            .width(Length::Fill)
            .padding(SPACING_SM)
            .style(container_error)
            .into(),
        ),
        CheckAccessPhase::Failed { message } => Some(
            container(
                column![
                    text("The check could not be completed.").size(13),
                    text(message).size(12).style(|theme: &Theme| text::Style {
                        color: Some(theme.studio().text_muted),
                    }),
                ]
                .spacing(SPACING_XS),
            )
            .width(Length::Fill)
            .padding(SPACING_SM)
            .style(container_error)
            .into(),
        ),
    }
}

// =============================================================================
// ACCESS DENIED
// =============================================================================

/// Render the terminal access-denied screen.
pub fn view_access_denied(state: &AccessDeniedState) -> Element<'_, Message> {
    let (title, message) = match &state.reason {
        AccessDeniedReason::DomainRejected { message } => {
            ("Domain Not Authorized", message.clone())
        }
        AccessDeniedReason::InsufficientRole { email } => (
            "Insufficient Permissions",
            format!(
                "The account for {email} was created, but it does not have \
                 administrator access. Contact a platform administrator to \
                 have your role upgraded."
            ),
        ),
    };

    let card = column![
        container(lucide::shield_x().size(48).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            }
        }))
        .width(Length::Fill)
        .center_x(Length::Fill),
        Space::new().height(SPACING_MD),
        container(text(title).size(20))
            .width(Length::Fill)
            .center_x(Length::Fill),
        Space::new().height(SPACING_SM),
        container(text(message).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_secondary),
        }))
        .width(Length::Fill)
        .padding(SPACING_SM)
        .style(container_inset),
        Space::new().height(SPACING_LG),
        container(
            button(text("Back to sign in").size(14))
                .on_press(Message::Auth(AuthMessage::SignOut))
                .padding([10.0, 24.0])
                .style(button_secondary),
        )
        .width(Length::Fill)
        .center_x(Length::Fill),
    ]
    .spacing(0);

    centered_card(card.into())
}

// =============================================================================
// SHARED
// =============================================================================

fn centered_card(content: Element<'_, Message>) -> Element<'_, Message> {
    iced::widget::center(
        container(content)
            .width(Length::Fixed(MODAL_WIDTH_MD))
            .padding(SPACING_LG)
            .style(container_card),
    )
    .into()
}
