//! Main application module for Sentra Admin Studio.
//!
//! Implements the Iced 0.14 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! All state changes happen in `update()`; views are pure functions over
//! [`AppState`]. Per-entity message groups are routed to their handlers,
//! and everything left (navigation, theming, keyboard, toasts) is
//! handled here.

mod subscription;

use std::sync::Arc;

use iced::widget::{container, row, stack, Space};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};

use sentra_api::client::{SentraClient, SessionTokens, TokenProvider};

use crate::component::view_toast;
use crate::constants::APP_NAME;
use crate::handler::{
    navigation, AuthHandler, CompanyHandler, DashboardHandler, MessageHandler, QuestionHandler,
    UserHandler, VideoHandler,
};
use crate::message::Message;
use crate::state::{AppState, Settings, ViewState};
use crate::theme::studio_theme;
use crate::view::{
    view_access_denied, view_check_access, view_companies, view_company_detail, view_company_new,
    view_dashboard, view_sidebar, view_sign_in, view_user_detail, view_user_new, view_users,
    view_video_detail, view_video_new, view_videos,
};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct, the root of the Iced application.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. The session starts signed out; there is
    /// no token persistence, so the first screen is always sign-in.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let tokens = Arc::new(SessionTokens::new());
        let provider: Arc<dyn TokenProvider> = tokens.clone();
        let client = SentraClient::new(settings.api.base_url.clone(), provider).unwrap_or_else(
            |err| {
                // Only fails when the OS refuses a TLS/HTTP stack; there
                // is nothing to run without one.
                tracing::error!("Failed to construct the HTTP client: {err}");
                std::process::exit(1);
            },
        );

        let app = Self {
            state: AppState::new(settings, client, tokens),
        };

        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::Navigate(route) => navigation::navigate(&mut self.state, route),

            Message::ToggleSidebar => {
                self.state.settings.display.sidebar_collapsed =
                    !self.state.settings.display.sidebar_collapsed;
                save_settings(&self.state);
                Task::none()
            }

            // =================================================================
            // Per-entity message groups
            // =================================================================
            Message::Auth(msg) => AuthHandler.handle(&mut self.state, msg),
            Message::Dashboard(msg) => DashboardHandler.handle(&mut self.state, msg),
            Message::Company(msg) => CompanyHandler.handle(&mut self.state, msg),
            Message::User(msg) => UserHandler.handle(&mut self.state, msg),
            Message::Video(msg) => VideoHandler.handle(&mut self.state, msg),
            Message::Question(msg) => QuestionHandler.handle(&mut self.state, msg),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, _modifiers) => {
                if let keyboard::Key::Named(keyboard::key::Named::Escape) = key {
                    handle_escape(&mut self.state);
                }
                Task::none()
            }

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }

            Message::ThemeModeSelected(mode) => {
                self.state.settings.display.theme_mode = mode;
                save_settings(&self.state);
                Task::none()
            }

            // =================================================================
            // External actions
            // =================================================================
            Message::OpenUrl(url) => {
                if let Err(err) = open::that(&url) {
                    tracing::warn!(%url, "Failed to open browser: {err}");
                    self.state.show_error("Could not open the browser");
                }
                Task::none()
            }

            // =================================================================
            // Notifications
            // =================================================================
            Message::ToastDismissed => {
                self.state.toast = None;
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current screen.
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match &self.state.view {
            ViewState::SignIn(form) => view_sign_in(form),
            ViewState::CheckAccess(form) => view_check_access(form),
            ViewState::AccessDenied(denied) => view_access_denied(denied),
            ViewState::Dashboard { period } => view_dashboard(&self.state, *period),
            ViewState::Companies(list) => view_companies(&self.state, list),
            ViewState::CompanyNew(form) => view_company_new(&self.state, form),
            ViewState::CompanyDetail(detail) => view_company_detail(&self.state, detail),
            ViewState::Users(list) => view_users(&self.state, list),
            ViewState::UserNew(form) => view_user_new(&self.state, form),
            ViewState::UserDetail(detail) => view_user_detail(&self.state, detail),
            ViewState::Videos(list) => view_videos(&self.state, list),
            ViewState::VideoNew(form) => view_video_new(&self.state, form),
            ViewState::VideoDetail(detail) => view_video_detail(&self.state, detail),
        };

        // Operator screens get the sidebar shell; auth screens render bare.
        let content: Element<'_, Message> = if self.state.view.shows_sidebar() {
            row![
                view_sidebar(&self.state),
                container(screen).width(Length::Fill).height(Length::Fill),
            ]
            .into()
        } else {
            screen
        };

        match &self.state.toast {
            Some(toast) => {
                // Bottom-right overlay on top of the content.
                let toast_row = row![
                    Space::new().width(Length::Fill),
                    container(view_toast(toast)).padding([0.0, 24.0]),
                ];
                let toast_overlay = iced::widget::column![
                    Space::new().height(Length::Fill),
                    toast_row,
                    Space::new().height(24.0),
                ];

                stack![
                    container(content).width(Length::Fill).height(Length::Fill),
                    toast_overlay,
                ]
                .into()
            }
            None => container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        }
    }

    /// Window title for the current screen.
    pub fn title(&self) -> String {
        let screen = match &self.state.view {
            ViewState::SignIn(_) => "Sign In",
            ViewState::CheckAccess(_) => "Check Access",
            ViewState::AccessDenied(_) => "Access Denied",
            ViewState::Dashboard { .. } => "Dashboard",
            ViewState::Companies(_) => "Companies",
            ViewState::CompanyNew(_) => "New Company",
            ViewState::CompanyDetail(_) => "Company",
            ViewState::Users(_) => "Users",
            ViewState::UserNew(_) => "New User",
            ViewState::UserDetail(_) => "User",
            ViewState::Videos(_) => "Videos",
            ViewState::VideoNew(_) => "Upload Video",
            ViewState::VideoDetail(_) => "Video",
        };
        format!("{screen} - {APP_NAME}")
    }

    /// Theme for the window, resolved from the mode preference and the
    /// last observed OS theme.
    pub fn theme(&self) -> Theme {
        studio_theme(
            self.state.settings.display.theme_mode,
            self.state.system_is_dark,
        )
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Persist settings, demoting failures to a log line. A read-only config
/// directory should never block the interaction that changed them.
fn save_settings(state: &AppState) {
    if let Err(err) = state.settings.save() {
        tracing::warn!("Failed to save settings: {err}");
    }
}

/// Escape closes the topmost transient: an open confirm dialog first,
/// then the toast.
fn handle_escape(state: &mut AppState) {
    let closed_confirm = match &mut state.view {
        ViewState::Companies(list) => list.confirm_delete.take().is_some(),
        ViewState::CompanyDetail(detail) => detail.confirm.take().is_some(),
        ViewState::Users(list) => list.confirm_delete.take().is_some(),
        ViewState::UserDetail(detail) => std::mem::take(&mut detail.confirm_delete),
        ViewState::Videos(list) => list.confirm_delete.take().is_some(),
        ViewState::VideoDetail(detail) => std::mem::take(&mut detail.confirm_delete),
        _ => false,
    };

    if !closed_confirm && state.toast.is_some() {
        state.toast = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CompaniesState, Toast};

    fn test_state() -> AppState {
        let settings = Settings::default();
        let tokens = Arc::new(SessionTokens::new());
        let provider: Arc<dyn TokenProvider> = tokens.clone();
        let client = SentraClient::new("http://localhost:3001", provider)
            .expect("client construction");
        AppState::new(settings, client, tokens)
    }

    #[test]
    fn test_escape_closes_confirm_before_toast() {
        let mut state = test_state();
        let mut list = CompaniesState::default();
        list.confirm_delete = Some(sample_company());
        state.view = ViewState::Companies(list);
        state.toast = Some(Toast::success("Saved"));

        handle_escape(&mut state);
        match &state.view {
            ViewState::Companies(list) => assert!(list.confirm_delete.is_none()),
            other => panic!("unexpected view: {other:?}"),
        }
        assert!(state.toast.is_some());

        handle_escape(&mut state);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_title_names_the_screen() {
        let (app, _task) = App::new();
        assert_eq!(app.title(), "Sign In - Sentra Admin Studio");
    }

    fn sample_company() -> sentra_api::schema::Company {
        serde_json::from_value(serde_json::json!({
            "id": "c1",
            "name": "Acme",
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-01T00:00:00.000Z"
        }))
        .expect("sample company")
    }
}
