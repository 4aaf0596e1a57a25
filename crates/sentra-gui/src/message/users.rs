//! User list, creation form, and detail messages.

use sentra_api::client::ApiError;
use sentra_api::schema::{Role, User};
use sentra_store::UserFilters;

/// Messages for the user screens.
#[derive(Debug, Clone)]
pub enum UserMessage {
    // =========================================================================
    // List
    // =========================================================================
    /// User list fetch completed for a filter set
    Loaded(UserFilters, Result<Vec<User>, ApiError>),

    /// Client-side search field edited
    SearchChanged(String),

    /// Company filter picked (`None` clears it)
    CompanyFilterChanged(Option<String>),

    /// Role filter picked (`None` clears it)
    RoleFilterChanged(Option<Role>),

    /// Delete clicked on a row; opens the confirm dialog
    DeleteRequested(User),

    /// Confirm dialog dismissed
    DeleteCanceled,

    /// Confirm dialog accepted
    DeleteConfirmed,

    /// Delete completed
    Deleted(Result<(), ApiError>),

    // =========================================================================
    // Creation form
    // =========================================================================
    /// Email field edited
    EmailChanged(String),

    /// First name field edited
    FirstNameChanged(String),

    /// Last name field edited
    LastNameChanged(String),

    /// Role picked
    RoleSelected(Role),

    /// Company picked
    CompanySelected(String),

    /// Form submitted
    Submitted,

    /// Create completed
    Created(Result<User, ApiError>),

    // =========================================================================
    // Detail
    // =========================================================================
    /// Detail fetch completed for a user
    DetailLoaded(String, Result<User, ApiError>),

    /// Role picker changed
    RolePicked(Role),

    /// Role save clicked
    RoleSaved,

    /// Role update completed
    RoleUpdated(Result<User, ApiError>),

    /// Delete clicked in the danger zone; opens the confirm dialog
    DetailDeleteRequested,

    /// Detail confirm dialog dismissed
    DetailDeleteCanceled,

    /// Detail confirm dialog accepted
    DetailDeleteConfirmed,

    /// Delete from the detail screen completed
    DetailDeleted(Result<(), ApiError>),
}
