//! Sign-in, access-check, and session messages.

use sentra_api::client::ApiError;
use sentra_api::schema::{CheckDomainResponse, RegisterResponse, User};

/// Messages for the auth screens and the session lifecycle.
#[derive(Debug, Clone)]
pub enum AuthMessage {
    // =========================================================================
    // Sign-in
    // =========================================================================
    /// Token field edited
    TokenChanged(String),

    /// Work email field edited
    EmailChanged(String),

    /// Sign-in submitted; stores the token and verifies the session
    Submit,

    /// Session lookup completed
    SessionLoaded(Result<User, ApiError>),

    /// One-time registration fallback completed
    Registered(Result<RegisterResponse, ApiError>),

    // =========================================================================
    // Access check
    // =========================================================================
    /// Email field on the access-check screen edited
    CheckEmailChanged(String),

    /// Domain check submitted
    CheckDomain,

    /// Domain check completed
    DomainChecked(Result<CheckDomainResponse, ApiError>),

    // =========================================================================
    // Session
    // =========================================================================
    /// Clear the session and return to sign-in
    SignOut,
}
