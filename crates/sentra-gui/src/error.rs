//! GUI-specific error types.
//!
//! This module provides a unified error type for GUI operations, designed to
//! integrate with Iced's message-based architecture while providing
//! user-friendly error messages and suggestions.

use sentra_api::ApiError;
use thiserror::Error;

/// GUI-specific errors.
///
/// These errors are designed to be displayed to users and include actionable
/// information about how to resolve them.
///
/// # Display Behavior
///
/// Errors are categorized for different display treatments:
/// - **Transient**: Brief errors shown as toasts (auto-dismiss)
/// - **Inline**: Mutation errors rendered next to the form that caused them
/// - **Blocking**: Authorization failures that replace the whole view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // RESOURCE LOADING
    // =========================================================================
    /// Failed to fetch a resource from the API.
    #[error("Failed to load {resource}: {reason}")]
    Load {
        /// Resource that was being fetched (e.g. "companies").
        resource: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // MUTATIONS
    // =========================================================================
    /// A create/update/delete operation was rejected.
    #[error("{operation} failed: {reason}")]
    Operation {
        /// Name of the operation that failed.
        operation: String,
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // AUTHORIZATION
    // =========================================================================
    /// The current session is not authorized for the admin console.
    #[error("Access denied: {reason}")]
    AccessDenied {
        /// Why access was refused.
        reason: String,
    },

    /// No session token is available.
    #[error("Not signed in")]
    NotSignedIn,

    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // GENERAL
    // =========================================================================
    /// Internal error (should not normally occur).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Coarse display category for a [`GuiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Fetch failures: retryable, shown in place of the missing data.
    Load,
    /// Mutation failures: shown inline near the submitting form.
    Mutation,
    /// Authorization failures: replace the whole view.
    Authorization,
    /// Settings persistence failures: shown as toasts.
    Settings,
    /// Everything else.
    Internal,
}

impl ErrorCategory {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Load => "Load",
            ErrorCategory::Mutation => "Mutation",
            ErrorCategory::Authorization => "Authorization",
            ErrorCategory::Settings => "Settings",
            ErrorCategory::Internal => "Internal",
        }
    }
}

impl GuiError {
    /// Create a resource-load error.
    pub fn load(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create an operation error.
    pub fn operation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Operation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an access-denied error.
    pub fn access_denied(reason: impl Into<String>) -> Self {
        Self::AccessDenied {
            reason: reason.into(),
        }
    }

    /// The display category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Load { .. } => ErrorCategory::Load,
            Self::Operation { .. } => ErrorCategory::Mutation,
            Self::AccessDenied { .. } | Self::NotSignedIn => ErrorCategory::Authorization,
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => ErrorCategory::Settings,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error should be shown as a transient toast notification.
    ///
    /// Transient errors are minor issues that don't require user acknowledgment.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::SettingsLoad { .. } | Self::SettingsSave { .. })
    }

    /// Check if this error is critical and replaces the current view.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::AccessDenied { .. } | Self::NotSignedIn)
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Load { .. } => Some("Check that the API server is running, then retry."),
            Self::Operation { .. } => Some("Review the highlighted fields and try again."),
            Self::AccessDenied { .. } => {
                Some("Contact a platform administrator to request access.")
            }
            Self::NotSignedIn => Some("Sign in to continue."),
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => {
                Some("Check file permissions in the configuration directory.")
            }
            Self::Internal { .. } => None,
        }
    }
}

impl From<ApiError> for GuiError {
    fn from(err: ApiError) -> Self {
        match err.code() {
            Some("DOMAIN_NOT_AUTHORIZED" | "FORBIDDEN") => Self::AccessDenied {
                reason: err.user_message().to_string(),
            },
            _ => Self::Operation {
                operation: "Request".to_string(),
                reason: err.user_message().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_is_blocking() {
        let err = GuiError::access_denied("This email domain is not authorized");
        assert!(err.is_blocking());
        assert!(!err.is_transient());
        assert_eq!(err.category(), ErrorCategory::Authorization);
    }

    #[test]
    fn test_settings_errors_are_transient() {
        let err = GuiError::SettingsSave {
            reason: "read-only filesystem".to_string(),
        };
        assert!(err.is_transient());
        assert!(!err.is_blocking());
    }

    #[test]
    fn test_domain_rejection_maps_to_access_denied() {
        let api = ApiError::Rejected {
            status: 403,
            message: "This email domain is not authorized.".to_string(),
            code: Some("DOMAIN_NOT_AUTHORIZED".to_string()),
            details: Vec::new(),
        };
        let gui = GuiError::from(api);
        assert!(gui.is_blocking());
    }

    #[test]
    fn test_plain_rejection_maps_to_operation() {
        let api = ApiError::Rejected {
            status: 422,
            message: "Name is required".to_string(),
            code: None,
            details: Vec::new(),
        };
        let gui = GuiError::from(api);
        assert_eq!(gui.category(), ErrorCategory::Mutation);
        assert_eq!(gui.to_string(), "Request failed: Name is required");
    }
}
