//! Video detail screen.
//!
//! Metadata form, file replacement, the quiz question editor, and the
//! danger zone. The save button covers the replacement upload and the
//! metadata update in one action and stays disabled until something
//! actually differs from the stored record.

use chrono::Utc;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::{Video, MAX_VIDEO_TITLE_LEN};
use sentra_store::QueryKey;

use crate::component::{
    danger_confirm_modal, video_status_badge, ErrorState, LoadingState, PageHeader, TextField,
};
use crate::message::{Message, VideoMessage};
use crate::state::{AppState, VideoDetailState};
use crate::theme::{
    button_danger, button_ghost, button_primary, button_secondary, container_card,
    container_danger_zone, container_inset, StudioColors, FORM_MAX_WIDTH, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS,
};

use super::{questions, visibility_section};

/// Render the video detail screen.
pub fn view_video_detail<'a>(
    state: &'a AppState,
    detail: &'a VideoDetailState,
) -> Element<'a, Message> {
    let key = QueryKey::Video(detail.video_id.clone());
    let video = match state.cache.video(&detail.video_id) {
        Some(video) => video,
        None if state.cache.is_pending(&key) => {
            return LoadingState::new("Loading video").view();
        }
        None => {
            let mut error = ErrorState::new("Could not load video")
                .retry(Message::go_video(detail.video_id.clone()));
            if let Some(err) = state.cache.error(&key) {
                error = error.message(err.user_message().to_string());
            }
            return error.view();
        }
    };

    let open_button = button(
        row![lucide::external_link().size(14), text("Open").size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::OpenUrl(video.url.clone()))
    .padding([8.0, 16.0])
    .style(button_secondary);

    let header = PageHeader::new(video.title.clone())
        .subtitle(format!("Uploaded {}", short_date(&video.created_at)))
        .back(Message::go_videos())
        .trailing(open_button)
        .view();

    let status_line = row![
        video_status_badge(video.status(Utc::now())),
        text(format!("Publishes {}", short_date(&video.publish_date)))
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.studio().text_muted),
            }),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let body = column![
        status_line,
        Space::new().height(SPACING_MD),
        view_metadata_card(state, detail, video),
        Space::new().height(SPACING_LG),
        questions::view_questions(state, detail),
        Space::new().height(SPACING_LG),
        view_danger_zone(detail),
    ]
    .max_width(FORM_MAX_WIDTH);

    let base: Element<'a, Message> = scrollable(
        column![header, Space::new().height(SPACING_LG), body].padding(SPACING_LG),
    )
    .into();

    if detail.confirm_delete {
        danger_confirm_modal(
            base,
            "Delete Video",
            format!(
                "Delete {}? Its quiz questions and answers are removed too.",
                video.title
            ),
            "Delete",
            Message::Video(VideoMessage::DetailDeleteConfirmed),
            Message::Video(VideoMessage::DetailDeleteCanceled),
        )
    } else {
        base
    }
}

// =============================================================================
// METADATA
// =============================================================================

fn view_metadata_card<'a>(
    state: &'a AppState,
    detail: &'a VideoDetailState,
    video: &'a Video,
) -> Element<'a, Message> {
    let title_field = TextField::new("Title", &detail.title, "Video title", |value| {
        Message::Video(VideoMessage::DetailTitleChanged(value))
    })
    .max_length(MAX_VIDEO_TITLE_LEN)
    .required(true)
    .view();

    let date_error = (!detail.publish_date.trim().is_empty()
        && detail.publish_date_rfc3339().is_none())
    .then_some("Use the format 2026-09-01T12:00 (UTC).");
    let publish_field = TextField::new(
        "Publish Date",
        &detail.publish_date,
        "2026-09-01T12:00",
        |value| Message::Video(VideoMessage::DetailPublishDateChanged(value)),
    )
    .error(date_error)
    .view();

    let audience = visibility_section(
        state,
        detail.visibility,
        detail.company_id.as_deref(),
        |visibility| Message::Video(VideoMessage::DetailVisibilityPicked(visibility)),
        |company_id| Message::Video(VideoMessage::DetailCompanyPicked(company_id)),
    );

    let replacement = view_replacement_section(detail);

    let saving = detail.save.is_pending();
    let mut save = button(
        row![
            lucide::save().size(14),
            text(if saving { "Saving..." } else { "Save Changes" }).size(14),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .padding([10.0, 20.0])
    .style(button_primary);
    if detail.has_changes(video) && !saving {
        save = save.on_press(Message::Video(VideoMessage::SaveRequested));
    }

    let mut card = column![
        text("Details").size(15),
        Space::new().height(SPACING_SM),
        title_field,
        Space::new().height(SPACING_MD),
        publish_field,
        Space::new().height(SPACING_MD),
        audience,
        Space::new().height(SPACING_MD),
        replacement,
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

    card = card.push(Space::new().height(SPACING_SM)).push(save);

    container(card)
        .width(Length::Fill)
        .padding(SPACING_MD)
        .style(container_card)
        .into()
}

fn view_replacement_section(detail: &VideoDetailState) -> Element<'_, Message> {
    let label = text("Video File")
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_secondary),
        });

    let content: Element<'_, Message> = match &detail.replacement {
        Some(file) => container(
            row![
                lucide::upload().size(14),
                column![
                    text(&file.name).size(13),
                    text(format!("{} · replaces the current file on save", file.size_label()))
                        .size(11)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.studio().text_muted),
                        }),
                ]
                .spacing(2.0),
                Space::new().width(Length::Fill),
                button(lucide::x().size(13))
                    .on_press(Message::Video(VideoMessage::ReplacementCleared))
                    .padding([4.0, 6.0])
                    .style(button_ghost),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(SPACING_SM)
        .style(container_inset)
        .into(),
        None => button(text("Replace File...").size(13))
            .on_press(Message::Video(VideoMessage::PickReplacement))
            .padding([8.0, 14.0])
            .style(button_secondary)
            .into(),
    };

    column![label, content].spacing(SPACING_XS).into()
}

// =============================================================================
// DANGER ZONE
// =============================================================================

fn view_danger_zone(detail: &VideoDetailState) -> Element<'_, Message> {
    let deleting = detail.delete.is_pending();

    let mut delete = button(
        row![
            lucide::trash_two().size(14),
            text(if deleting { "Deleting..." } else { "Delete Video" }).size(14),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center),
    )
    .padding([10.0, 20.0])
    .style(button_danger);
    if !deleting {
        delete = delete.on_press(Message::Video(VideoMessage::DetailDeleteRequested));
    }

    container(
        column![
            text("Danger Zone").size(15),
            text("Deleting a video removes its quiz questions and answers.")
                .size(12)
                .style(|theme: &Theme| text::Style {
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
