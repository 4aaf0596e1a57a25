//! User message handler.
//!
//! Handles:
//! - The user list with server-side filters and client-side search
//! - The invitation form
//! - Detail-screen role changes and deletion

use iced::Task;

use sentra_api::schema::CreateUserInput;
use sentra_store::{CachedPayload, MutationKind, MutationState, QueryKey};

use super::{ensure, fail_fetch, navigation, MessageHandler};
use crate::message::{Message, Route, UserMessage};
use crate::service;
use crate::state::{AppState, ViewState};

/// Handler for user list, creation, and detail messages.
pub struct UserHandler;

impl MessageHandler<UserMessage> for UserHandler {
    fn handle(&self, state: &mut AppState, msg: UserMessage) -> Task<Message> {
        match msg {
            // List
            UserMessage::Loaded(filters, Ok(users)) => {
                state
                    .cache
                    .resolve(QueryKey::Users(filters), CachedPayload::Users(users));
                Task::none()
            }
            UserMessage::Loaded(filters, Err(error)) => {
                fail_fetch(state, QueryKey::Users(filters), error)
            }
            UserMessage::SearchChanged(search) => {
                if let ViewState::Users(list) = &mut state.view {
                    list.search = search;
                }
                Task::none()
            }
            UserMessage::CompanyFilterChanged(company_id) => {
                if let ViewState::Users(list) = &mut state.view {
                    list.filters.company_id = company_id;
                    let key = QueryKey::Users(list.filters.clone());
                    return ensure(state, key);
                }
                Task::none()
            }
            UserMessage::RoleFilterChanged(role) => {
                if let ViewState::Users(list) = &mut state.view {
                    list.filters.role = role;
                    let key = QueryKey::Users(list.filters.clone());
                    return ensure(state, key);
                }
                Task::none()
            }
            UserMessage::DeleteRequested(user) => {
                if let ViewState::Users(list) = &mut state.view {
                    list.confirm_delete = Some(user);
                }
                Task::none()
            }
            UserMessage::DeleteCanceled => {
                if let ViewState::Users(list) = &mut state.view {
                    list.confirm_delete = None;
                }
                Task::none()
            }
            UserMessage::DeleteConfirmed => handle_delete_confirmed(state),
            UserMessage::Deleted(result) => match result {
                Ok(()) => {
                    state.cache.apply(&MutationKind::UserWrite);
                    if let ViewState::Users(list) = &mut state.view {
                        list.confirm_delete = None;
                        list.delete = MutationState::Idle;
                    }
                    state.show_success("User deleted");
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let ViewState::Users(list) = &mut state.view {
                        list.delete = MutationState::Idle;
                    }
                    state.show_error(error.user_message());
                    Task::none()
                }
            },

            // Invitation form
            UserMessage::EmailChanged(email) => {
                if let ViewState::UserNew(form) = &mut state.view {
                    form.email = email;
                }
                Task::none()
            }
            UserMessage::FirstNameChanged(first_name) => {
                if let ViewState::UserNew(form) = &mut state.view {
                    form.first_name = first_name;
                }
                Task::none()
            }
            UserMessage::LastNameChanged(last_name) => {
                if let ViewState::UserNew(form) = &mut state.view {
                    form.last_name = last_name;
                }
                Task::none()
            }
            UserMessage::RoleSelected(role) => {
                if let ViewState::UserNew(form) = &mut state.view {
                    form.role = role;
                }
                Task::none()
            }
            UserMessage::CompanySelected(company_id) => {
                if let ViewState::UserNew(form) = &mut state.view {
                    form.company_id = Some(company_id);
                }
                Task::none()
            }
            UserMessage::Submitted => handle_create_submitted(state),
            UserMessage::Created(result) => match result {
                Ok(user) => {
                    state.cache.apply(&MutationKind::UserWrite);
                    state.show_success("User created");
                    navigation::navigate(state, Route::UserDetail(user.id))
                }
                Err(error) => {
                    if let ViewState::UserNew(form) = &mut state.view {
                        form.create = MutationState::Error(error);
                    }
                    Task::none()
                }
            },

            // Detail
            UserMessage::DetailLoaded(id, Ok(user)) => {
                state
                    .cache
                    .resolve(QueryKey::User(id.clone()), CachedPayload::User(user.clone()));
                if let ViewState::UserDetail(detail) = &mut state.view {
                    if detail.user_id == id {
                        detail.sync_from(&user);
                    }
                }
                Task::none()
            }
            UserMessage::DetailLoaded(id, Err(error)) => fail_fetch(state, QueryKey::User(id), error),
            UserMessage::RolePicked(role) => {
                if let ViewState::UserDetail(detail) = &mut state.view {
                    detail.selected_role = Some(role);
                }
                Task::none()
            }
            UserMessage::RoleSaved => handle_role_saved(state),
            UserMessage::RoleUpdated(result) => match result {
                Ok(user) => {
                    state.cache.apply(&MutationKind::UserWrite);
                    if let ViewState::UserDetail(detail) = &mut state.view {
                        if detail.user_id == user.id {
                            detail.save = MutationState::Success;
                        }
                    }
                    navigation::fetch_required(state)
                }
                Err(error) => {
                    if let ViewState::UserDetail(detail) = &mut state.view {
                        detail.save = MutationState::Error(error);
                    }
                    Task::none()
                }
            },
            UserMessage::DetailDeleteRequested => {
                if let ViewState::UserDetail(detail) = &mut state.view {
                    detail.confirm_delete = true;
                }
                Task::none()
            }
            UserMessage::DetailDeleteCanceled => {
                if let ViewState::UserDetail(detail) = &mut state.view {
                    detail.confirm_delete = false;
                }
                Task::none()
            }
            UserMessage::DetailDeleteConfirmed => handle_detail_delete_confirmed(state),
            UserMessage::DetailDeleted(result) => match result {
                Ok(()) => {
                    state.cache.apply(&MutationKind::UserWrite);
                    state.show_success("User deleted");
                    navigation::navigate(state, Route::Users)
                }
                Err(error) => {
                    if let ViewState::UserDetail(detail) = &mut state.view {
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
    let ViewState::Users(list) = &mut state.view else {
        return Task::none();
    };
    let Some(user) = list.confirm_delete.clone() else {
        return Task::none();
    };
    if list.delete.is_pending() {
        return Task::none();
    }
    list.delete = MutationState::Pending;

    Task::perform(
        service::users::delete_user(state.client.clone(), user.id),
        |result| Message::User(UserMessage::Deleted(result)),
    )
}

fn handle_create_submitted(state: &mut AppState) -> Task<Message> {
    let ViewState::UserNew(form) = &mut state.view else {
        return Task::none();
    };
    if !form.can_submit() {
        return Task::none();
    }
    let Some(company_id) = form.company_id.clone() else {
        return Task::none();
    };
    let input = CreateUserInput {
        email: form.email.trim().to_string(),
        first_name: none_if_empty(&form.first_name),
        last_name: none_if_empty(&form.last_name),
        role: form.role,
        company_id,
    };
    form.create = MutationState::Pending;

    Task::perform(
        service::users::create_user(state.client.clone(), input),
        |result| Message::User(UserMessage::Created(result)),
    )
}

/// Save the picked role. Saving the role the record already has is a no-op;
/// the button is disabled in that case, this guards the keyboard path.
fn handle_role_saved(state: &mut AppState) -> Task<Message> {
    let current = match &state.view {
        ViewState::UserDetail(detail) => state.cache.user(&detail.user_id).map(|u| u.role),
        _ => None,
    };
    let ViewState::UserDetail(detail) = &mut state.view else {
        return Task::none();
    };
    let Some(role) = detail.selected_role else {
        return Task::none();
    };
    if detail.save.is_pending() || current == Some(role) {
        return Task::none();
    }
    detail.save = MutationState::Pending;
    let id = detail.user_id.clone();

    Task::perform(
        service::users::update_user_role(state.client.clone(), id, role),
        |result| Message::User(UserMessage::RoleUpdated(result)),
    )
}

fn handle_detail_delete_confirmed(state: &mut AppState) -> Task<Message> {
    let ViewState::UserDetail(detail) = &mut state.view else {
        return Task::none();
    };
    if !detail.confirm_delete || detail.delete.is_pending() {
        return Task::none();
    }
    detail.delete = MutationState::Pending;
    let id = detail.user_id.clone();

    Task::perform(
        service::users::delete_user(state.client.clone(), id),
        |result| Message::User(UserMessage::DetailDeleted(result)),
    )
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
