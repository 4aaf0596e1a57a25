//! Video list screen.

use chrono::Utc;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use sentra_api::schema::Video;
use sentra_store::QueryKey;

use crate::component::{
    danger_confirm_modal, video_status_badge, EmptyState, ErrorState, LoadingState, PageHeader,
};
use crate::message::{Message, Route, VideoMessage};
use crate::state::{AppState, VideosState};
use crate::theme::{
    button_ghost, button_primary, container_card, StudioColors, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XS,
};

/// Render the video list screen.
pub fn view_videos<'a>(state: &'a AppState, list: &'a VideosState) -> Element<'a, Message> {
    let upload_button = button(
        row![lucide::upload().size(14), text("Upload Video").size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Navigate(Route::VideoNew))
    .padding([10.0, 20.0])
    .style(button_primary);

    let header = PageHeader::new("Videos")
        .subtitle("Training videos and their quizzes".to_string())
        .trailing(upload_button)
        .view();

    let body: Element<'a, Message> = match state.cache.videos() {
        Some([]) => EmptyState::new(lucide::play().size(40), "No videos yet")
            .description("Upload the first training video to get started.")
            .action("Upload Video", Message::Navigate(Route::VideoNew))
            .view(),
        Some(videos) => {
            let now = Utc::now();
            let mut rows = column![].spacing(SPACING_SM);
            for video in videos {
                rows = rows.push(video_row(video, now));
            }
            scrollable(rows).into()
        }
        None if state.cache.is_pending(&QueryKey::Videos) => {
            LoadingState::new("Loading videos").view()
        }
        None => {
            let mut error = ErrorState::new("Could not load videos").retry(Message::go_videos());
            if let Some(err) = state.cache.error(&QueryKey::Videos) {
                error = error.message(err.user_message().to_string());
            }
            error.view()
        }
    };

    let base: Element<'a, Message> = column![header, Space::new().height(SPACING_LG), body]
        .padding(SPACING_LG)
        .into();

    match &list.confirm_delete {
        Some(video) => danger_confirm_modal(
            base,
            "Delete Video",
            format!(
                "Delete {}? Its quiz questions and answers are removed too.",
                video.title
            ),
            "Delete",
            Message::Video(VideoMessage::DeleteConfirmed),
            Message::Video(VideoMessage::DeleteCanceled),
        ),
        None => base,
    }
}

fn video_row(video: &Video, now: chrono::DateTime<Utc>) -> Element<'_, Message> {
    let meta = format!(
        "{} · {}",
        video.visibility_label(),
        short_date(&video.publish_date)
    );

    let info = column![
        row![
            text(&video.title).size(15),
            video_status_badge(video.status(now)),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
        text(meta).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.studio().text_muted),
        }),
    ]
    .spacing(SPACING_XS);

    let open = button(lucide::chevron_right().size(16))
        .on_press(Message::go_video(&video.id))
        .padding([6.0, 8.0])
        .style(button_ghost);

    let delete = button(lucide::trash_two().size(14).style(|theme: &Theme| {
        text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }
    }))
    .on_press(Message::Video(VideoMessage::DeleteRequested(video.clone())))
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

/// Date part of an ISO timestamp.
fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
