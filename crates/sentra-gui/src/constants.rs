//! Application identity constants.
//!
//! Centralized constants for application metadata used across the codebase.
//! This avoids magic strings scattered throughout the application.

/// Application display name.
pub const APP_NAME: &str = "Sentra Admin Studio";

/// Short product name shown in the sidebar brand.
pub const APP_BRAND: &str = "Sentra";

/// Application identifier (reverse domain notation).
pub const APP_ID: &str = "com.sentra.admin-studio";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application description.
pub const APP_DESCRIPTION: &str = "Administrative console for the Sentra training platform";
