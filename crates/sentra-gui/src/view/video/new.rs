//! Video upload form.
//!
//! The file is picked through the native dialog and held in memory; the
//! title defaults to the filename stem. Submission gates on a parseable
//! publish date.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::MAX_VIDEO_TITLE_LEN;

use crate::component::{PageHeader, TextField};
use crate::message::{Message, VideoMessage};
use crate::state::{AppState, VideoNewState};
use crate::theme::{
    button_primary, button_secondary, container_error, container_inset, StudioColors,
    FORM_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};

use super::visibility_section;

/// Render the video upload form.
pub fn view_video_new<'a>(state: &'a AppState, form: &'a VideoNewState) -> Element<'a, Message> {
    let header = PageHeader::new("Upload Video")
        .back(Message::go_videos())
        .view();

    let file_section = view_file_section(form);

    let title_field = TextField::new("Title", &form.title, "Introduction to onboarding", |value| {
        Message::Video(VideoMessage::TitleChanged(value))
    })
    .max_length(MAX_VIDEO_TITLE_LEN)
    .required(true)
    .view();

    let date_error = (!form.publish_date.trim().is_empty()
        && form.publish_date_rfc3339().is_none())
    .then_some("Use the format 2026-09-01T12:00 (UTC).");
    let publish_field = TextField::new(
        "Publish Date",
        &form.publish_date,
        "2026-09-01T12:00",
        |value| Message::Video(VideoMessage::PublishDateChanged(value)),
    )
    .required(true)
    .error(date_error)
    .view();

    let publish_hint = text("Scheduled in UTC; the video hides from users until this moment.")
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        });

    let audience = visibility_section(
        state,
        form.visibility,
        form.company_id.as_deref(),
        |visibility| Message::Video(VideoMessage::VisibilityPicked(visibility)),
        |company_id| Message::Video(VideoMessage::CompanyPicked(company_id)),
    );

    let uploading = form.upload.is_pending();
    let submit_label = if uploading {
        "Uploading..."
    } else {
        "Upload Video"
    };
    let mut submit = button(
        row![lucide::upload().size(14), text(submit_label).size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([10.0, 24.0])
    .style(button_primary);
    if form.can_submit() {
        submit = submit.on_press(Message::Video(VideoMessage::Submitted));
    }

    let mut body = column![
        file_section,
        Space::new().height(SPACING_MD),
        title_field,
        Space::new().height(SPACING_MD),
        publish_field,
        publish_hint,
        Space::new().height(SPACING_MD),
        audience,
    ]
    .spacing(SPACING_XS)
    .max_width(FORM_MAX_WIDTH);

    if let Some(err) = form.upload.error() {
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

fn view_file_section(form: &VideoNewState) -> Element<'_, Message> {
    match &form.file {
        Some(file) => container(
            row![
                lucide::play().size(16),
                column![
                    text(&file.name).size(14),
                    text(file.size_label())
                        .size(12)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.studio().text_muted),
                        }),
                ]
                .spacing(2.0),
                Space::new().width(Length::Fill),
                button(text("Change").size(13))
                    .on_press(Message::Video(VideoMessage::PickFile))
                    .padding([8.0, 14.0])
                    .style(button_secondary),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(container_inset)
        .into(),
        None => container(
            column![
                lucide::upload().size(28).style(|theme: &Theme| text::Style {
                    color: Some(theme.studio().text_muted),
                }),
                Space::new().height(SPACING_SM),
                button(text("Choose Video File").size(14))
                    .on_press(Message::Video(VideoMessage::PickFile))
                    .padding([10.0, 20.0])
                    .style(button_secondary),
            ]
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(SPACING_LG)
        .style(container_inset)
        .into(),
    }
}
