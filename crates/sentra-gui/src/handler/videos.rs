//! Video message handler.
//!
//! Handles:
//! - The video list and its delete confirmation
//! - The upload form, including the native file picker
//! - Detail-screen metadata edits and the file replacement chain
//!
//! Saving the detail form is a two-step chain when a replacement file is
//! staged: the file goes up first, and only a non-empty metadata diff is
//! sent afterwards. A metadata-only save skips the replacement endpoint
//! entirely.

use iced::Task;

use sentra_store::{CachedPayload, MutationKind, MutationState, QueryKey};

use super::{fail_fetch, navigation, MessageHandler};
use crate::message::{Message, Route, VideoMessage};
use crate::service;
use crate::state::{AppState, ViewState, Visibility};

/// Handler for video list, upload, and detail messages.
pub struct VideoHandler;

impl MessageHandler<VideoMessage> for VideoHandler {
    fn handle(&self, state: &mut AppState, msg: VideoMessage) -> Task<Message> {
        match msg {
            // List
            VideoMessage::Loaded(Ok(videos)) => {
                state
                    .cache
                    .resolve(QueryKey::Videos, CachedPayload::Videos(videos));
                Task::none()
            }
            VideoMessage::Loaded(Err(error)) => fail_fetch(state, QueryKey::Videos, error),
            VideoMessage::DeleteRequested(video) => {
                if let ViewState::Videos(list) = &mut state.view {
                    list.confirm_delete = Some(video);
                }
                Task::none()
            }
            VideoMessage::DeleteCanceled => {
                if let ViewState::Videos(list) = &mut state.view {
                    list.confirm_delete = None;
                }
                Task::none()
            }
            VideoMessage::DeleteConfirmed => handle_delete_confirmed(state),
            VideoMessage::Deleted(result) => match result {
                Ok(()) => {
                    state.cache.apply(&MutationKind::VideoWrite);
                    if let ViewState::Videos(list) = &mut state.view {
                        list.confirm_delete = None;
                        list.delete = MutationState::Idle;
                    }
                    state.show_success("Video deleted");
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let ViewState::Videos(list) = &mut state.view {
                        list.delete = MutationState::Idle;
                    }
                    state.show_error(error.user_message());
                    Task::none()
                }
            },

            // Upload form
            VideoMessage::PickFile => Task::perform(service::file_dialog::pick_video(), |picked| {
                Message::Video(VideoMessage::FilePicked(picked))
            }),
            VideoMessage::FilePicked(Some(file)) => {
                if let ViewState::VideoNew(form) = &mut state.view {
                    form.set_file(file);
                }
                Task::none()
            }
            // A cancelled picker keeps whatever was staged before.
            VideoMessage::FilePicked(None) => Task::none(),
            VideoMessage::TitleChanged(title) => {
                if let ViewState::VideoNew(form) = &mut state.view {
                    form.title = title;
                }
                Task::none()
            }
            VideoMessage::PublishDateChanged(publish_date) => {
                if let ViewState::VideoNew(form) = &mut state.view {
                    form.publish_date = publish_date;
                }
                Task::none()
            }
            VideoMessage::VisibilityPicked(visibility) => {
                let seed = first_company_id(state);
                if let ViewState::VideoNew(form) = &mut state.view {
                    form.visibility = visibility;
                    if visibility == Visibility::Company && form.company_id.is_none() {
                        form.company_id = seed;
                    }
                }
                Task::none()
            }
            VideoMessage::CompanyPicked(company_id) => {
                if let ViewState::VideoNew(form) = &mut state.view {
                    form.company_id = Some(company_id);
                }
                Task::none()
            }
            VideoMessage::Submitted => handle_upload_submitted(state),
            VideoMessage::Uploaded(result) => match result {
                Ok(video) => {
                    state.cache.apply(&MutationKind::VideoWrite);
                    state.show_success("Video uploaded");
                    navigation::navigate(state, Route::VideoDetail(video.id))
                }
                Err(error) => {
                    if let ViewState::VideoNew(form) = &mut state.view {
                        form.upload = MutationState::Error(error);
                    }
                    Task::none()
                }
            },

            // Detail metadata form
            VideoMessage::DetailLoaded(id, Ok(video)) => {
                state
                    .cache
                    .resolve(QueryKey::Video(id.clone()), CachedPayload::Video(video.clone()));
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    if detail.video_id == id {
                        detail.sync_from(&video);
                    }
                }
                Task::none()
            }
            VideoMessage::DetailLoaded(id, Err(error)) => {
                fail_fetch(state, QueryKey::Video(id), error)
            }
            VideoMessage::DetailTitleChanged(title) => {
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.title = title;
                }
                Task::none()
            }
            VideoMessage::DetailPublishDateChanged(publish_date) => {
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.publish_date = publish_date;
                }
                Task::none()
            }
            VideoMessage::DetailVisibilityPicked(visibility) => {
                let seed = detail_company_seed(state);
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.visibility = visibility;
                    if visibility == Visibility::Company && detail.company_id.is_none() {
                        detail.company_id = seed;
                    }
                }
                Task::none()
            }
            VideoMessage::DetailCompanyPicked(company_id) => {
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.company_id = Some(company_id);
                }
                Task::none()
            }
            VideoMessage::PickReplacement => {
                Task::perform(service::file_dialog::pick_video(), |picked| {
                    Message::Video(VideoMessage::ReplacementPicked(picked))
                })
            }
            VideoMessage::ReplacementPicked(Some(file)) => {
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.replacement = Some(file);
                }
                Task::none()
            }
            VideoMessage::ReplacementPicked(None) => Task::none(),
            VideoMessage::ReplacementCleared => {
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.replacement = None;
                }
                Task::none()
            }
            VideoMessage::SaveRequested => handle_save_requested(state),
            VideoMessage::Replaced(result) => handle_replaced(state, result),
            VideoMessage::Saved(result) => match result {
                Ok(video) => finish_save(state, video),
                Err(error) => {
                    if let ViewState::VideoDetail(detail) = &mut state.view {
                        detail.save = MutationState::Error(error);
                    }
                    Task::none()
                }
            },

            // Detail delete
            VideoMessage::DetailDeleteRequested => {
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.confirm_delete = true;
                }
                Task::none()
            }
            VideoMessage::DetailDeleteCanceled => {
                if let ViewState::VideoDetail(detail) = &mut state.view {
                    detail.confirm_delete = false;
                }
                Task::none()
            }
            VideoMessage::DetailDeleteConfirmed => handle_detail_delete_confirmed(state),
            VideoMessage::DetailDeleted(result) => match result {
                Ok(()) => {
                    state.cache.apply(&MutationKind::VideoWrite);
                    state.show_success("Video deleted");
                    navigation::navigate(state, Route::Videos)
                }
                Err(error) => {
                    if let ViewState::VideoDetail(detail) = &mut state.view {
                        detail.delete = MutationState::Idle;
                    }
                    state.show_error(error.user_message());
                    Task::none()
                }
            },
        }
    }
}

// =============================================================================
// HANDLER FUNCTIONS
// =============================================================================

fn handle_delete_confirmed(state: &mut AppState) -> Task<Message> {
    let ViewState::Videos(list) = &mut state.view else {
        return Task::none();
    };
    let Some(video) = list.confirm_delete.clone() else {
        return Task::none();
    };
    if list.delete.is_pending() {
        return Task::none();
    }
    list.delete = MutationState::Pending;

    Task::perform(
        service::videos::delete_video(state.client.clone(), video.id),
        |result| Message::Video(VideoMessage::Deleted(result)),
    )
}

/// Kick off the upload with the staged file and typed metadata.
fn handle_upload_submitted(state: &mut AppState) -> Task<Message> {
    let ViewState::VideoNew(form) = &mut state.view else {
        return Task::none();
    };
    if !form.can_submit() {
        return Task::none();
    }
    let Some(file) = form.file.clone() else {
        return Task::none();
    };
    // can_submit already vouched for the date.
    let Some(publish_date) = form.publish_date_rfc3339() else {
        return Task::none();
    };
    let title = form.title.trim().to_string();
    let company_id = form.effective_company_id();
    form.upload = MutationState::Pending;

    Task::perform(
        service::videos::upload_video(
            state.client.clone(),
            file.into_body(),
            title,
            publish_date,
            company_id,
        ),
        |result| Message::Video(VideoMessage::Uploaded(result)),
    )
}

/// Start the save chain: file replacement first when one is staged,
/// otherwise straight to the metadata update.
fn handle_save_requested(state: &mut AppState) -> Task<Message> {
    let stored = match &state.view {
        ViewState::VideoDetail(detail) => state.cache.video(&detail.video_id).cloned(),
        _ => None,
    };
    let ViewState::VideoDetail(detail) = &mut state.view else {
        return Task::none();
    };
    let Some(stored) = stored else {
        return Task::none();
    };
    if detail.save.is_pending() || !detail.has_changes(&stored) {
        return Task::none();
    }
    detail.save = MutationState::Pending;
    let id = detail.video_id.clone();

    if let Some(file) = detail.replacement.clone() {
        Task::perform(
            service::videos::replace_video_file(state.client.clone(), id, file.into_body()),
            |result| Message::Video(VideoMessage::Replaced(result)),
        )
    } else {
        let input = detail.changed_fields(&stored);
        Task::perform(
            service::videos::update_video(state.client.clone(), id, input),
            |result| Message::Video(VideoMessage::Saved(result)),
        )
    }
}

/// The replacement finished; send the rest of the diff or wrap up.
fn handle_replaced(
    state: &mut AppState,
    result: Result<sentra_api::schema::Video, sentra_api::ApiError>,
) -> Task<Message> {
    match result {
        Ok(video) => {
            let ViewState::VideoDetail(detail) = &mut state.view else {
                // The screen is gone; record the write and move on.
                state.cache.apply(&MutationKind::VideoWrite);
                return Task::none();
            };
            detail.replacement = None;
            let input = detail.changed_fields(&video);
            if input.title.is_none() && input.publish_date.is_none() && input.company_id.is_none() {
                return finish_save(state, video);
            }
            let id = detail.video_id.clone();
            Task::perform(
                service::videos::update_video(state.client.clone(), id, input),
                |result| Message::Video(VideoMessage::Saved(result)),
            )
        }
        Err(error) => {
            if let ViewState::VideoDetail(detail) = &mut state.view {
                detail.save = MutationState::Error(error);
            }
            Task::none()
        }
    }
}

/// Record a completed save and refresh what the screen shows.
fn finish_save(state: &mut AppState, video: sentra_api::schema::Video) -> Task<Message> {
    state.cache.apply(&MutationKind::VideoWrite);
    state
        .cache
        .resolve(QueryKey::Video(video.id.clone()), CachedPayload::Video(video));
    if let ViewState::VideoDetail(detail) = &mut state.view {
        detail.replacement = None;
        detail.save = MutationState::Success;
    }
    state.show_success("Video updated");
    navigation::fetch_required(state)
}

fn handle_detail_delete_confirmed(state: &mut AppState) -> Task<Message> {
    let ViewState::VideoDetail(detail) = &mut state.view else {
        return Task::none();
    };
    if !detail.confirm_delete || detail.delete.is_pending() {
        return Task::none();
    }
    detail.delete = MutationState::Pending;
    let id = detail.video_id.clone();

    Task::perform(
        service::videos::delete_video(state.client.clone(), id),
        |result| Message::Video(VideoMessage::DetailDeleted(result)),
    )
}

/// First company in the cached collection, for seeding the org picker.
fn first_company_id(state: &AppState) -> Option<String> {
    state
        .cache
        .companies()
        .and_then(|companies| companies.first())
        .map(|company| company.id.clone())
}

/// Seed for the detail-screen org picker: the video's own company when it
/// has one, the first company otherwise.
fn detail_company_seed(state: &AppState) -> Option<String> {
    let ViewState::VideoDetail(detail) = &state.view else {
        return None;
    };
    state
        .cache
        .video(&detail.video_id)
        .and_then(|video| video.company_id.clone())
        .or_else(|| first_company_id(state))
}
