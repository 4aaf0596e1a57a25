//! Sentra Admin Studio - Desktop Admin Console
//!
//! A desktop application for administering the Sentra training platform:
//! companies and their sign-up domains, users and roles, training videos,
//! and the quizzes attached to them.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::window;
use iced::Size;

use sentra_gui::app::App;
use sentra_gui::constants::APP_NAME;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting {APP_NAME}");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .font(sentra_gui::component::LUCIDE_FONT_BYTES)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            icon: load_icon(),
            ..Default::default()
        })
        .run()
}

/// Load the application icon from embedded PNG data.
fn load_icon() -> Option<window::Icon> {
    let icon_data = include_bytes!("../assets/icon.png");
    window::icon::from_file_data(icon_data, Some(image::ImageFormat::Png)).ok()
}
