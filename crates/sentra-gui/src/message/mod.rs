//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background-task completions flow through
//! these types. The root [`Message`] fans out to one sub-enum per
//! entity domain; the `update` function dispatches each sub-enum to its
//! handler.

use iced::keyboard;

use crate::theme::ThemeMode;

pub mod auth;
pub mod companies;
pub mod dashboard;
pub mod questions;
pub mod users;
pub mod videos;

pub use auth::AuthMessage;
pub use companies::CompanyMessage;
pub use dashboard::DashboardMessage;
pub use questions::{DraftTarget, QuestionMessage};
pub use users::UserMessage;
pub use videos::VideoMessage;

/// Navigation target, resolved to view state (and the fetches the
/// screen needs) by the navigation handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SignIn,
    CheckAccess,
    Dashboard,
    Companies,
    CompanyNew,
    CompanyDetail(String),
    Users,
    UserNew,
    UserDetail(String),
    Videos,
    VideoNew,
    VideoDetail(String),
}

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Switch to another screen
    Navigate(Route),

    /// Collapse or expand the navigation sidebar
    ToggleSidebar,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Sign-in, access check, and session messages
    Auth(AuthMessage),

    /// Dashboard messages
    Dashboard(DashboardMessage),

    /// Company list, form, and detail messages
    Company(CompanyMessage),

    /// User list, form, and detail messages
    User(UserMessage),

    /// Video list, upload, and detail messages
    Video(VideoMessage),

    /// Quiz question editor messages
    Question(QuestionMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// OS light/dark mode changed
    SystemThemeChanged(iced::theme::Mode),

    /// Theme mode picked from the sidebar footer
    ThemeModeSelected(ThemeMode),

    // =========================================================================
    // External actions
    // =========================================================================
    /// Open a URL in the system browser
    OpenUrl(String),

    // =========================================================================
    // Notifications
    // =========================================================================
    /// Close the active toast, from its button or the auto-dismiss timer
    ToastDismissed,

    /// No operation - used for placeholder actions
    Noop,
}

impl Message {
    /// Creates a navigation message to the dashboard.
    pub fn go_dashboard() -> Self {
        Self::Navigate(Route::Dashboard)
    }

    /// Creates a navigation message to the company list.
    pub fn go_companies() -> Self {
        Self::Navigate(Route::Companies)
    }

    /// Creates a navigation message to one company's detail screen.
    pub fn go_company(company_id: impl Into<String>) -> Self {
        Self::Navigate(Route::CompanyDetail(company_id.into()))
    }

    /// Creates a navigation message to the user list.
    pub fn go_users() -> Self {
        Self::Navigate(Route::Users)
    }

    /// Creates a navigation message to one user's detail screen.
    pub fn go_user(user_id: impl Into<String>) -> Self {
        Self::Navigate(Route::UserDetail(user_id.into()))
    }

    /// Creates a navigation message to the video list.
    pub fn go_videos() -> Self {
        Self::Navigate(Route::Videos)
    }

    /// Creates a navigation message to one video's detail screen.
    pub fn go_video(video_id: impl Into<String>) -> Self {
        Self::Navigate(Route::VideoDetail(video_id.into()))
    }
}
