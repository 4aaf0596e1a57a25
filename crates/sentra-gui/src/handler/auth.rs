//! Authentication message handler.
//!
//! Handles:
//! - Token verification against GET /api/auth/me
//! - The one-shot registration fallback for unknown accounts
//! - The public pre-signup domain check
//! - Sign-out

use iced::Task;

use sentra_api::schema::{RegisterResponse, User};
use sentra_api::ApiError;
use sentra_store::{CachedPayload, QueryKey};

use super::{navigation, MessageHandler};
use crate::message::{AuthMessage, Message, Route};
use crate::service;
use crate::state::{
    AccessDeniedReason, AppState, CheckAccessPhase, ViewState,
};

/// Handler for sign-in, access-check, and session messages.
pub struct AuthHandler;

impl MessageHandler<AuthMessage> for AuthHandler {
    fn handle(&self, state: &mut AppState, msg: AuthMessage) -> Task<Message> {
        match msg {
            // Sign-in form
            AuthMessage::TokenChanged(token) => {
                if let ViewState::SignIn(form) = &mut state.view {
                    form.token = token;
                }
                Task::none()
            }
            AuthMessage::EmailChanged(email) => {
                if let ViewState::SignIn(form) = &mut state.view {
                    form.email = email;
                }
                Task::none()
            }
            AuthMessage::Submit => handle_submit(state),
            AuthMessage::SessionLoaded(result) => handle_session_loaded(state, result),
            AuthMessage::Registered(result) => handle_registered(state, result),

            // Access check
            AuthMessage::CheckEmailChanged(email) => {
                if let ViewState::CheckAccess(form) = &mut state.view {
                    form.email = email;
                }
                Task::none()
            }
            AuthMessage::CheckDomain => handle_check_domain(state),
            AuthMessage::DomainChecked(result) => {
                if let ViewState::CheckAccess(form) = &mut state.view {
                    form.phase = match result {
                        Ok(response) if response.allowed => CheckAccessPhase::Allowed {
                            company_name: response.company_name,
                        },
                        Ok(response) => CheckAccessPhase::Denied {
                            message: response.message.unwrap_or_else(|| {
                                "This email domain is not authorized. \
                                 Please contact us to get access."
                                    .to_string()
                            }),
                        },
                        Err(_) => CheckAccessPhase::Failed {
                            message: "Unable to verify access. Please try again.".to_string(),
                        },
                    };
                }
                Task::none()
            }

            // Session
            AuthMessage::SignOut => {
                tracing::info!("Signed out");
                state.sign_out();
                Task::none()
            }
        }
    }
}

// =============================================================================
// HANDLER FUNCTIONS
// =============================================================================

/// Store the pasted token and verify it against the API.
fn handle_submit(state: &mut AppState) -> Task<Message> {
    let ViewState::SignIn(form) = &mut state.view else {
        return Task::none();
    };
    if !form.can_submit() {
        return Task::none();
    }
    let token = form.token.trim().to_string();
    form.verifying = true;
    form.error = None;

    state.tokens.set(token);
    Task::perform(service::auth::load_session(state.client.clone()), |result| {
        Message::Auth(AuthMessage::SessionLoaded(result))
    })
}

/// The session probe came back: admit, register, or surface the error.
fn handle_session_loaded(state: &mut AppState, result: Result<User, ApiError>) -> Task<Message> {
    match result {
        Ok(user) => finish_sign_in(state, user),
        Err(error) if user_not_found(&error) && !state.register_attempted => {
            let email = match &state.view {
                ViewState::SignIn(form) => form.email.trim().to_string(),
                _ => String::new(),
            };
            if email.is_empty() {
                if let ViewState::SignIn(form) = &mut state.view {
                    form.verifying = false;
                    form.error = Some(
                        "Enter your work email so the account can be created.".to_string(),
                    );
                }
                return Task::none();
            }
            state.register_attempted = true;
            tracing::info!(%email, "No account for this token, registering");
            Task::perform(
                service::auth::register(state.client.clone(), email),
                |result| Message::Auth(AuthMessage::Registered(result)),
            )
        }
        Err(error) => {
            if let ViewState::SignIn(form) = &mut state.view {
                form.verifying = false;
                form.error = Some(error.user_message().to_string());
            }
            Task::none()
        }
    }
}

/// The registration fallback came back.
fn handle_registered(
    state: &mut AppState,
    result: Result<RegisterResponse, ApiError>,
) -> Task<Message> {
    match result {
        Ok(response) => finish_sign_in(state, response.user),
        Err(error @ ApiError::Transport(_)) => {
            // A request that never reached the server does not use up the
            // one registration attempt.
            state.register_attempted = false;
            tracing::warn!(%error, "Registration request failed in transit");
            if let ViewState::SignIn(form) = &mut state.view {
                form.verifying = false;
                form.error = Some("Unable to verify your account. Please try again.".to_string());
            }
            Task::none()
        }
        Err(error) => {
            let message = if domain_rejected(&error) {
                "Your email domain is not authorized. Please contact us for access.".to_string()
            } else {
                error.user_message().to_string()
            };
            state.view = ViewState::access_denied(AccessDeniedReason::DomainRejected { message });
            Task::none()
        }
    }
}

/// Admit a verified superadmin, or show the denial screen for anyone else.
fn finish_sign_in(state: &mut AppState, user: User) -> Task<Message> {
    if !user.is_superadmin() {
        tracing::warn!(email = %user.email, role = %user.role, "Console sign-in refused");
        state.view = ViewState::access_denied(AccessDeniedReason::InsufficientRole {
            email: user.email,
        });
        return Task::none();
    }
    tracing::info!(email = %user.email, "Signed in");
    state
        .cache
        .resolve(QueryKey::AuthMe, CachedPayload::AuthUser(user.clone()));
    state.current_user = Some(user);
    navigation::navigate(state, Route::Dashboard)
}

/// Run the public domain allow-check for the typed email.
fn handle_check_domain(state: &mut AppState) -> Task<Message> {
    let ViewState::CheckAccess(form) = &mut state.view else {
        return Task::none();
    };
    if !form.can_submit() {
        return Task::none();
    }
    let email = form.email.trim().to_string();
    form.phase = CheckAccessPhase::Checking;

    Task::perform(
        service::auth::check_domain(state.client.clone(), email),
        |result| Message::Auth(AuthMessage::DomainChecked(result)),
    )
}

fn user_not_found(error: &ApiError) -> bool {
    error.status() == Some(404) || error.code() == Some("USER_NOT_FOUND")
}

fn domain_rejected(error: &ApiError) -> bool {
    error.code() == Some("DOMAIN_NOT_AUTHORIZED")
        || error.user_message().to_lowercase().contains("not authorized")
}
