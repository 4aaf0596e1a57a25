//! Screen navigation and per-screen data requirements.
//!
//! A route names a destination; the [`ViewState`] built for it starts from a
//! clean slate, so half-typed forms and open confirms never survive
//! navigation. Each screen declares the cache keys it renders from, and
//! [`fetch_required`] turns the missing ones into fetch tasks.

use iced::Task;

use sentra_store::QueryKey;

use super::ensure;
use crate::message::{Message, Route};
use crate::state::{AppState, ViewState};

/// Switch to `route`, dropping the previous screen's UI state, then kick off
/// whatever fetches the new screen needs.
pub fn navigate(state: &mut AppState, route: Route) -> Task<Message> {
    let signed_in = state.current_user.is_some();
    let view = match route {
        Route::SignIn => ViewState::sign_in(),
        Route::CheckAccess => ViewState::check_access(),
        // Everything below is operator-only.
        _ if !signed_in => ViewState::sign_in(),
        Route::Dashboard => ViewState::dashboard(),
        Route::Companies => ViewState::companies(),
        Route::CompanyNew => ViewState::company_new(),
        Route::CompanyDetail(id) => ViewState::company_detail(id),
        Route::Users => ViewState::users(),
        Route::UserNew => ViewState::user_new(),
        Route::UserDetail(id) => ViewState::user_detail(id),
        Route::Videos => ViewState::videos(),
        Route::VideoNew => ViewState::video_new(),
        Route::VideoDetail(id) => ViewState::video_detail(id),
    };
    state.navigate(view);
    fetch_required(state)
}

/// The cache keys the current screen renders from.
///
/// Pickers widen the list: any screen with a company selector needs the
/// company collection alongside its own record.
pub(crate) fn required_fetches(state: &AppState) -> Vec<QueryKey> {
    match &state.view {
        ViewState::SignIn(_) | ViewState::CheckAccess(_) | ViewState::AccessDenied(_) => Vec::new(),
        ViewState::Dashboard { period } => vec![QueryKey::Stats(*period)],
        ViewState::Companies(_) => vec![QueryKey::Companies],
        ViewState::CompanyNew(_) => Vec::new(),
        ViewState::CompanyDetail(detail) => vec![QueryKey::Company(detail.company_id.clone())],
        ViewState::Users(list) => {
            vec![QueryKey::Users(list.filters.clone()), QueryKey::Companies]
        }
        ViewState::UserNew(_) => vec![QueryKey::Companies],
        ViewState::UserDetail(detail) => vec![QueryKey::User(detail.user_id.clone())],
        ViewState::Videos(_) => vec![QueryKey::Videos],
        ViewState::VideoNew(_) => vec![QueryKey::Companies],
        ViewState::VideoDetail(detail) => vec![
            QueryKey::Video(detail.video_id.clone()),
            QueryKey::VideoQuestions(detail.video_id.clone()),
            QueryKey::Companies,
        ],
    }
}

/// Ensure every key the current screen depends on, fetching the stale and
/// missing ones. Mutation handlers call this after invalidating so the
/// screen repopulates without a navigation round trip.
pub(crate) fn fetch_required(state: &mut AppState) -> Task<Message> {
    let mut tasks = Vec::new();
    for key in required_fetches(state) {
        tasks.push(ensure(state, key));
    }
    Task::batch(tasks)
}
