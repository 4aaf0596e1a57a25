//! Application state shared across all screens.

use std::sync::Arc;

use sentra_api::client::{SentraClient, SessionTokens};
use sentra_api::schema::User;
use sentra_store::ResourceCache;

use super::settings::Settings;
use super::view_state::ViewState;

/// A transient notification overlaid on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Central application state.
///
/// Owns the current view, the resource cache, the API client, and the
/// signed-in user. Handlers mutate this; views only read it.
#[derive(Debug)]
pub struct AppState {
    /// Current screen and its UI state.
    pub view: ViewState,

    /// Server data keyed by query, with staleness tracking.
    pub cache: ResourceCache,

    /// API client shared by every background task.
    pub client: SentraClient,

    /// Session token slot the client reads its bearer token from.
    pub tokens: Arc<SessionTokens>,

    /// The verified operator, present only after sign-in succeeds.
    pub current_user: Option<User>,

    /// Whether the one-time registration fallback has been used this
    /// session. A failed registration is terminal, never retried.
    pub register_attempted: bool,

    /// Persisted preferences.
    pub settings: Settings,

    /// Active toast, if any.
    pub toast: Option<Toast>,

    /// Last reported OS theme, used when the theme mode is `System`.
    pub system_is_dark: bool,
}

impl AppState {
    pub fn new(settings: Settings, client: SentraClient, tokens: Arc<SessionTokens>) -> Self {
        Self {
            view: ViewState::default(),
            cache: ResourceCache::new(),
            client,
            tokens,
            current_user: None,
            register_attempted: false,
            settings,
            toast: None,
            system_is_dark: true,
        }
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Switches screens, dropping the previous screen's UI state.
    pub fn navigate(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Tears down the session: clears the token, the cache, and the
    /// signed-in user, then returns to the sign-in screen.
    pub fn sign_out(&mut self) {
        self.tokens.clear();
        self.cache.clear();
        self.current_user = None;
        self.register_attempted = false;
        self.view = ViewState::sign_in();
        self.toast = None;
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::success(message));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message));
    }

    // =========================================================================
    // THEME
    // =========================================================================

    /// Resolves the theme mode to a concrete light/dark choice.
    pub fn dark_theme_active(&self) -> bool {
        self.settings.display.theme_mode.is_dark(self.system_is_dark)
    }
}
