//! Quiz question editor messages.
//!
//! The editor lives on the video detail screen. Two drafts can be open
//! at once (a new question below the list, an edit inside one card), so
//! draft edits carry a [`DraftTarget`].

use sentra_api::client::ApiError;
use sentra_api::schema::Question;

/// Which draft a field edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTarget {
    /// The new-question form below the list.
    New,
    /// The open edit inside a question card.
    Edit,
}

/// Messages for the question editor.
#[derive(Debug, Clone)]
pub enum QuestionMessage {
    /// Question list fetch completed for a video
    Loaded(String, Result<Vec<Question>, ApiError>),

    /// Question card expanded or collapsed
    Toggled(String),

    // =========================================================================
    // Drafts
    // =========================================================================
    /// Add-question form opened
    AddStarted,

    /// Add-question form abandoned
    AddCanceled,

    /// Edit opened on a question, seeded from its current content
    EditStarted(Question),

    /// Edit abandoned
    EditCanceled,

    /// Question text edited
    TextChanged(DraftTarget, String),

    /// One answer's text edited
    AnswerTextChanged(DraftTarget, usize, String),

    /// One answer's correct flag flipped
    CorrectToggled(DraftTarget, usize),

    /// Blank answer appended
    AnswerAdded(DraftTarget),

    /// Answer removed
    AnswerRemoved(DraftTarget, usize),

    // =========================================================================
    // Writes
    // =========================================================================
    /// New-question draft submitted
    CreateSubmitted,

    /// Create completed
    Created(String, Result<Question, ApiError>),

    /// Edit draft submitted
    UpdateSubmitted,

    /// Update completed
    Updated(String, Result<Question, ApiError>),

    /// Delete clicked on a question
    DeleteRequested(String),

    /// Delete completed: the video's id, the deleted question's id, and
    /// the outcome
    Deleted(String, String, Result<(), ApiError>),

    /// Question moved one slot up
    MovedUp(usize),

    /// Question moved one slot down
    MovedDown(usize),

    /// Reorder completed
    Reordered(String, Result<Vec<Question>, ApiError>),
}
