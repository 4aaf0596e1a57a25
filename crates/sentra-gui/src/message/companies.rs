//! Company list, creation form, and detail messages.

use sentra_api::client::ApiError;
use sentra_api::schema::{Company, Domain};

/// Messages for the company screens.
#[derive(Debug, Clone)]
pub enum CompanyMessage {
    // =========================================================================
    // List
    // =========================================================================
    /// Company list fetch completed
    Loaded(Result<Vec<Company>, ApiError>),

    /// Delete clicked on a row; opens the confirm dialog
    DeleteRequested(Company),

    /// Confirm dialog dismissed
    DeleteCanceled,

    /// Confirm dialog accepted
    DeleteConfirmed,

    /// Delete completed
    Deleted(Result<(), ApiError>),

    // =========================================================================
    // Creation form
    // =========================================================================
    /// Name field edited
    NameChanged(String),

    /// Timezone field edited
    TimezoneChanged(String),

    /// Form submitted
    Submitted,

    /// Create completed
    Created(Result<Company, ApiError>),

    // =========================================================================
    // Detail
    // =========================================================================
    /// Detail fetch completed for a company
    DetailLoaded(String, Result<Company, ApiError>),

    /// Name row switched to edit mode
    NameEditStarted,

    /// Name edit buffer edited
    NameEdited(String),

    /// Name edit saved
    NameSaved,

    /// Name edit abandoned
    NameEditCanceled,

    /// Timezone row switched to edit mode
    TimezoneEditStarted,

    /// Timezone edit buffer edited
    TimezoneEdited(String),

    /// Timezone edit saved
    TimezoneSaved,

    /// Timezone edit abandoned
    TimezoneEditCanceled,

    /// Name or timezone update completed
    Updated(Result<Company, ApiError>),

    /// Delete clicked in the danger zone; opens the confirm dialog
    DetailDeleteRequested,

    /// Detail confirm dialog dismissed
    ConfirmCanceled,

    /// Detail confirm dialog accepted (delete company or remove domain)
    ConfirmAccepted,

    /// Delete from the detail screen completed
    DetailDeleted(Result<(), ApiError>),

    // =========================================================================
    // Domains
    // =========================================================================
    /// Domain entry field edited
    DomainInputChanged(String),

    /// Add-domain form submitted
    DomainSubmitted,

    /// Add-domain completed
    DomainAdded(Result<Domain, ApiError>),

    /// Remove clicked on a domain; opens the confirm dialog
    DomainRemoveRequested(Domain),

    /// Remove-domain completed
    DomainRemoved(Result<(), ApiError>),
}
