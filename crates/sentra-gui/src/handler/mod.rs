//! Message handler architecture for the Iced update loop.
//!
//! Trait-based dispatch that keeps per-feature message handling out of the
//! main App struct. Each handler owns one message group:
//!
//! ```ignore
//! pub struct CompanyHandler;
//!
//! impl MessageHandler<CompanyMessage> for CompanyHandler {
//!     fn handle(&self, state: &mut AppState, msg: CompanyMessage) -> Task<Message> {
//!         match msg {
//!             CompanyMessage::Loaded(result) => { /* ... */ }
//!             // ...
//!         }
//!     }
//! }
//! ```
//!
//! `App::update()` routes each group to its handler:
//!
//! ```ignore
//! match message {
//!     Message::Company(msg) => CompanyHandler.handle(&mut self.state, msg),
//!     Message::Video(msg) => VideoHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```
//!
//! # Fetching
//!
//! All server reads flow through [`ensure`]: it consults the cache, marks the
//! entry pending, and spawns the one service call that can satisfy the key.
//! Completions land back here as `*Loaded` messages; the owning handler
//! resolves or fails the entry. Handlers never bypass the cache, so two
//! screens asking for the same key share one in-flight request.

mod auth;
mod companies;
mod dashboard;
pub mod navigation;
mod questions;
mod users;
mod videos;

use iced::Task;

use sentra_api::ApiError;
use sentra_store::QueryKey;

use crate::message::{
    CompanyMessage, DashboardMessage, Message, QuestionMessage, UserMessage, VideoMessage,
};
use crate::service;
use crate::state::{AppState, ViewState};

pub use auth::AuthHandler;
pub use companies::CompanyHandler;
pub use dashboard::DashboardHandler;
pub use questions::QuestionHandler;
pub use users::UserHandler;
pub use videos::VideoHandler;

/// Trait for handling messages in the Iced architecture.
///
/// Each handler is responsible for one message type and receives the full
/// application state. Keeping handlers as unit structs makes them trivially
/// testable without an event loop.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task, or `Task::none()` when the update is purely local.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}

// =============================================================================
// FETCH MACHINERY
// =============================================================================

/// Fetch the data behind `key` unless the cache already has a fresh copy or
/// a request is in flight.
pub(crate) fn ensure(state: &mut AppState, key: QueryKey) -> Task<Message> {
    if !state.cache.needs_fetch(&key) {
        return Task::none();
    }
    state.cache.begin_fetch(key.clone());

    let client = state.client.clone();
    match key {
        QueryKey::Companies => Task::perform(service::companies::fetch_companies(client), |r| {
            Message::Company(CompanyMessage::Loaded(r))
        }),
        QueryKey::Company(id) => Task::perform(
            service::companies::fetch_company(client, id.clone()),
            move |r| Message::Company(CompanyMessage::DetailLoaded(id.clone(), r)),
        ),
        QueryKey::Users(filters) => Task::perform(
            service::users::fetch_users(client, filters.clone()),
            move |r| Message::User(UserMessage::Loaded(filters.clone(), r)),
        ),
        QueryKey::User(id) => Task::perform(
            service::users::fetch_user(client, id.clone()),
            move |r| Message::User(UserMessage::DetailLoaded(id.clone(), r)),
        ),
        QueryKey::Videos => Task::perform(service::videos::fetch_videos(client), |r| {
            Message::Video(VideoMessage::Loaded(r))
        }),
        QueryKey::Video(id) => Task::perform(
            service::videos::fetch_video(client, id.clone()),
            move |r| Message::Video(VideoMessage::DetailLoaded(id.clone(), r)),
        ),
        QueryKey::VideoQuestions(video_id) => Task::perform(
            service::questions::fetch_questions(client, video_id.clone()),
            move |r| Message::Question(QuestionMessage::Loaded(video_id.clone(), r)),
        ),
        QueryKey::Stats(period) => {
            Task::perform(service::stats::fetch_stats(client, period), move |r| {
                Message::Dashboard(DashboardMessage::Loaded(period, r))
            })
        }
        // Single questions are filled in by mutation responses and the auth
        // entry by the sign-in flow; neither has a standalone fetch.
        QueryKey::Question(_) | QueryKey::AuthMe => Task::none(),
    }
}

/// Record a failed fetch, or tear the session down when the server no longer
/// recognizes it.
pub(crate) fn fail_fetch(state: &mut AppState, key: QueryKey, error: ApiError) -> Task<Message> {
    if session_expired(&error) {
        tracing::warn!(%key, "Session rejected by the API, signing out");
        state.sign_out();
        if let ViewState::SignIn(form) = &mut state.view {
            form.error = Some("Your session has expired. Sign in again.".to_string());
        }
        return Task::none();
    }
    state.cache.fail(key, error);
    Task::none()
}

fn session_expired(error: &ApiError) -> bool {
    error.status() == Some(401)
}
