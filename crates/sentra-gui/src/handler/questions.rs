//! Quiz question editor message handler.
//!
//! Handles:
//! - Expanding and collapsing question cards
//! - The new-question and edit drafts
//! - Create, update, delete, and reorder writes
//!
//! All of it lives inside the video detail screen; every arm no-ops when
//! that screen is gone, except cache bookkeeping, which always runs so a
//! completion is never lost.

use iced::Task;

use sentra_store::{CachedPayload, MutationKind, MutationState, QueryKey};

use super::{fail_fetch, navigation, MessageHandler};
use crate::message::{DraftTarget, Message, QuestionMessage};
use crate::service;
use crate::state::{
    reorder_after_move, AppState, QuestionDraft, VideoDetailState, ViewState,
};

/// Handler for the question editor on the video detail screen.
pub struct QuestionHandler;

impl MessageHandler<QuestionMessage> for QuestionHandler {
    fn handle(&self, state: &mut AppState, msg: QuestionMessage) -> Task<Message> {
        match msg {
            QuestionMessage::Loaded(video_id, Ok(questions)) => {
                state.cache.resolve(
                    QueryKey::VideoQuestions(video_id),
                    CachedPayload::Questions(questions),
                );
                Task::none()
            }
            QuestionMessage::Loaded(video_id, Err(error)) => {
                fail_fetch(state, QueryKey::VideoQuestions(video_id), error)
            }
            QuestionMessage::Toggled(question_id) => {
                if let Some(detail) = detail_mut(state) {
                    // The open edit keeps its card pinned; clicks on it
                    // only land once the edit is closed.
                    if !detail.editor.edit.is_editing(&question_id) {
                        detail.editor.toggle_expanded(&question_id);
                    }
                }
                Task::none()
            }

            // Drafts
            QuestionMessage::AddStarted => {
                if let Some(detail) = detail_mut(state) {
                    detail.editor.begin_add();
                }
                Task::none()
            }
            QuestionMessage::AddCanceled => {
                if let Some(detail) = detail_mut(state) {
                    detail.editor.cancel_add();
                }
                Task::none()
            }
            QuestionMessage::EditStarted(question) => {
                if let Some(detail) = detail_mut(state) {
                    detail.editor.begin_edit(&question);
                }
                Task::none()
            }
            QuestionMessage::EditCanceled => {
                if let Some(detail) = detail_mut(state) {
                    detail.editor.cancel_edit();
                }
                Task::none()
            }
            QuestionMessage::TextChanged(target, text) => {
                if let Some(draft) = target_draft(state, target) {
                    draft.set_text(text);
                }
                Task::none()
            }
            QuestionMessage::AnswerTextChanged(target, index, text) => {
                if let Some(draft) = target_draft(state, target) {
                    draft.set_answer_text(index, text);
                }
                Task::none()
            }
            QuestionMessage::CorrectToggled(target, index) => {
                if let Some(draft) = target_draft(state, target) {
                    draft.toggle_correct(index);
                }
                Task::none()
            }
            QuestionMessage::AnswerAdded(target) => {
                if let Some(draft) = target_draft(state, target) {
                    draft.add_answer();
                }
                Task::none()
            }
            QuestionMessage::AnswerRemoved(target, index) => {
                if let Some(draft) = target_draft(state, target) {
                    draft.remove_answer(index);
                }
                Task::none()
            }

            // Writes
            QuestionMessage::CreateSubmitted => handle_create_submitted(state),
            QuestionMessage::Created(video_id, result) => match result {
                Ok(question) => {
                    state.cache.apply(&MutationKind::CreateQuestion {
                        video_id: video_id.clone(),
                    });
                    state.cache.resolve(
                        QueryKey::Question(question.id.clone()),
                        CachedPayload::Question(question),
                    );
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.editor.cancel_add();
                        detail.questions.create = MutationState::Success;
                    }
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.questions.create = MutationState::Error(error);
                    }
                    Task::none()
                }
            },
            QuestionMessage::UpdateSubmitted => handle_update_submitted(state),
            QuestionMessage::Updated(video_id, result) => match result {
                Ok(question) => {
                    state.cache.apply(&MutationKind::UpdateQuestion {
                        question_id: question.id.clone(),
                        video_id: video_id.clone(),
                    });
                    state.cache.resolve(
                        QueryKey::Question(question.id.clone()),
                        CachedPayload::Question(question),
                    );
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.editor.cancel_edit();
                        detail.questions.update = MutationState::Success;
                    }
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.questions.update = MutationState::Error(error);
                    }
                    Task::none()
                }
            },
            QuestionMessage::DeleteRequested(question_id) => {
                handle_delete_requested(state, question_id)
            }
            QuestionMessage::Deleted(video_id, question_id, result) => match result {
                Ok(()) => {
                    state.cache.apply(&MutationKind::DeleteQuestion {
                        video_id: video_id.clone(),
                    });
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.questions.delete = MutationState::Success;
                        if detail.editor.edit.is_editing(&question_id) {
                            detail.editor.cancel_edit();
                        }
                        detail.editor.expanded.remove(&question_id);
                    }
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.questions.delete = MutationState::Idle;
                    }
                    state.show_error(error.user_message());
                    Task::none()
                }
            },
            QuestionMessage::MovedUp(index) => {
                if index == 0 {
                    return Task::none();
                }
                handle_move(state, index, index - 1)
            }
            QuestionMessage::MovedDown(index) => handle_move(state, index, index + 1),
            QuestionMessage::Reordered(video_id, result) => match result {
                Ok(questions) => {
                    state.cache.apply(&MutationKind::ReorderQuestions {
                        video_id: video_id.clone(),
                    });
                    // The response carries the fresh ordering, no refetch.
                    state.cache.resolve(
                        QueryKey::VideoQuestions(video_id.clone()),
                        CachedPayload::Questions(questions),
                    );
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.questions.reorder = MutationState::Success;
                    }
                    Task::none()
                }
                Err(error) => {
                    if let Some(detail) = detail_for(state, &video_id) {
                        detail.questions.reorder = MutationState::Idle;
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

/// The video detail state, if that is the current screen.
fn detail_mut(state: &mut AppState) -> Option<&mut VideoDetailState> {
    match &mut state.view {
        ViewState::VideoDetail(detail) => Some(detail),
        _ => None,
    }
}

/// The detail state only when it still shows the given video.
fn detail_for<'a>(state: &'a mut AppState, video_id: &str) -> Option<&'a mut VideoDetailState> {
    detail_mut(state).filter(|detail| detail.video_id == video_id)
}

/// The draft a field edit applies to, if it is open.
fn target_draft(state: &mut AppState, target: DraftTarget) -> Option<&mut QuestionDraft> {
    let editor = &mut detail_mut(state)?.editor;
    match target {
        DraftTarget::New => editor.adding.as_mut(),
        DraftTarget::Edit => editor.edit_draft_mut(),
    }
}

fn handle_create_submitted(state: &mut AppState) -> Task<Message> {
    let Some(detail) = detail_mut(state) else {
        return Task::none();
    };
    let Some(draft) = &detail.editor.adding else {
        return Task::none();
    };
    if !draft.is_valid() || detail.questions.create.is_pending() {
        return Task::none();
    }
    let input = draft.to_create_input();
    detail.questions.create = MutationState::Pending;
    let video_id = detail.video_id.clone();
    let completion_id = video_id.clone();

    Task::perform(
        service::questions::create_question(state.client.clone(), video_id, input),
        move |result| Message::Question(QuestionMessage::Created(completion_id.clone(), result)),
    )
}

fn handle_update_submitted(state: &mut AppState) -> Task<Message> {
    let Some(detail) = detail_mut(state) else {
        return Task::none();
    };
    let Some(question_id) = detail.editor.edit.editing_id().map(String::from) else {
        return Task::none();
    };
    let Some(draft) = detail.editor.edit_draft_mut() else {
        return Task::none();
    };
    if !draft.is_valid() || detail.questions.update.is_pending() {
        return Task::none();
    }
    let input = draft.to_update_input();
    detail.questions.update = MutationState::Pending;
    let video_id = detail.video_id.clone();

    Task::perform(
        service::questions::update_question(state.client.clone(), question_id, input),
        move |result| Message::Question(QuestionMessage::Updated(video_id.clone(), result)),
    )
}

fn handle_delete_requested(state: &mut AppState, question_id: String) -> Task<Message> {
    let Some(detail) = detail_mut(state) else {
        return Task::none();
    };
    if detail.questions.delete.is_pending() {
        return Task::none();
    }
    detail.questions.delete = MutationState::Pending;
    let video_id = detail.video_id.clone();
    let completion_id = question_id.clone();

    Task::perform(
        service::questions::delete_question(state.client.clone(), question_id),
        move |result| {
            Message::Question(QuestionMessage::Deleted(
                video_id.clone(),
                completion_id.clone(),
                result,
            ))
        },
    )
}

/// Move the question at `from` to `to` and persist the new ordering.
fn handle_move(state: &mut AppState, from: usize, to: usize) -> Task<Message> {
    let prepared = match &state.view {
        ViewState::VideoDetail(detail) if !detail.questions.reorder.is_pending() => state
            .cache
            .questions_for(&detail.video_id)
            .and_then(|questions| reorder_after_move(questions, from, to))
            .map(|input| (detail.video_id.clone(), input)),
        _ => None,
    };
    let Some((video_id, input)) = prepared else {
        return Task::none();
    };
    if let Some(detail) = detail_mut(state) {
        detail.questions.reorder = MutationState::Pending;
    }
    let completion_id = video_id.clone();

    Task::perform(
        service::questions::reorder_questions(state.client.clone(), video_id, input),
        move |result| Message::Question(QuestionMessage::Reordered(completion_id.clone(), result)),
    )
}
