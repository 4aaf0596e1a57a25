//! Application subscriptions.
//!
//! Batched event sources running alongside the app:
//!
//! | Subscription | Condition | Purpose |
//! |--------------|-----------|---------|
//! | Keyboard | Always | Escape closes confirms and toasts |
//! | System theme | Always | Track OS light/dark for `ThemeMode::System` |
//! | Toast dismiss | Toast visible | Auto-dismiss after 5 seconds |
//!
//! Conditional subscriptions return `Subscription::none()` when their
//! condition is not met, avoiding unnecessary polling.

use std::time::Duration;

use iced::keyboard;
use iced::Subscription;
use iced::{system, time};

use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        keyboard_subscription(),
        system_theme_subscription(),
        toast_subscription(state),
    ])
}

/// Keyboard event subscription for global shortcuts.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// OS light/dark changes, consulted when the theme mode is `System`.
fn system_theme_subscription() -> Subscription<Message> {
    system::theme_changes().map(Message::SystemThemeChanged)
}

/// Toast auto-dismiss timer, only running while a toast is visible.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toast.is_some() {
        time::every(Duration::from_secs(5)).map(|_| Message::ToastDismissed)
    } else {
        Subscription::none()
    }
}
