//! Video list, upload form, and detail messages.

use sentra_api::client::ApiError;
use sentra_api::schema::Video;

use crate::state::{PickedFile, Visibility};

/// Messages for the video screens.
#[derive(Debug, Clone)]
pub enum VideoMessage {
    // =========================================================================
    // List
    // =========================================================================
    /// Video list fetch completed
    Loaded(Result<Vec<Video>, ApiError>),

    /// Delete clicked on a row; opens the confirm dialog
    DeleteRequested(Video),

    /// Confirm dialog dismissed
    DeleteCanceled,

    /// Confirm dialog accepted
    DeleteConfirmed,

    /// Delete completed
    Deleted(Result<(), ApiError>),

    // =========================================================================
    // Upload form
    // =========================================================================
    /// Browse clicked; opens the native file picker
    PickFile,

    /// File picker closed (`None` when canceled)
    FilePicked(Option<PickedFile>),

    /// Title field edited
    TitleChanged(String),

    /// Publish date field edited
    PublishDateChanged(String),

    /// Audience toggle picked
    VisibilityPicked(Visibility),

    /// Company picked for the audience
    CompanyPicked(String),

    /// Upload submitted
    Submitted,

    /// Upload completed
    Uploaded(Result<Video, ApiError>),

    // =========================================================================
    // Detail
    // =========================================================================
    /// Detail fetch completed for a video
    DetailLoaded(String, Result<Video, ApiError>),

    /// Title field on the detail form edited
    DetailTitleChanged(String),

    /// Publish date field on the detail form edited
    DetailPublishDateChanged(String),

    /// Audience toggle on the detail form picked
    DetailVisibilityPicked(Visibility),

    /// Company on the detail form picked
    DetailCompanyPicked(String),

    /// Replace-file clicked; opens the native file picker
    PickReplacement,

    /// Replacement picker closed (`None` when canceled)
    ReplacementPicked(Option<PickedFile>),

    /// Pending replacement discarded
    ReplacementCleared,

    /// Save clicked on the detail form
    SaveRequested,

    /// File replacement step completed; a metadata update may follow
    Replaced(Result<Video, ApiError>),

    /// Metadata update completed
    Saved(Result<Video, ApiError>),

    /// Delete clicked in the danger zone; opens the confirm dialog
    DetailDeleteRequested,

    /// Detail confirm dialog dismissed
    DetailDeleteCanceled,

    /// Detail confirm dialog accepted
    DetailDeleteConfirmed,

    /// Delete from the detail screen completed
    DetailDeleted(Result<(), ApiError>),
}
