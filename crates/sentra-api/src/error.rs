//! Error types for the Sentra API client.

use serde::Deserialize;
use thiserror::Error;

/// Wire shape of an error response body.
///
/// Every error response from the platform is expected as
/// `{error, code?, message?, details?}`. Bodies that do not conform are
/// still surfaced, with a generic message derived from the status code.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub error: String,

    /// Optional machine-readable error code (e.g., "DOMAIN_NOT_AUTHORIZED").
    pub code: Option<String>,

    /// Secondary message some endpoints attach alongside `error`.
    pub message: Option<String>,

    /// Optional per-field validation details.
    pub details: Option<Vec<FieldDetail>>,
}

/// A single field-level validation detail from a structured error body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDetail {
    /// The input field the detail refers to.
    pub field: String,

    /// The validation message for that field.
    pub message: String,
}

/// Errors that can occur when talking to the Sentra API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    /// Request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Transport(String),

    /// Server rejected the request with a structured error body.
    #[error("API rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided error message.
        message: String,
        /// Optional machine-readable code.
        code: Option<String>,
        /// Field-level validation details, empty when none were sent.
        details: Vec<FieldDetail>,
    },

    /// Non-success status with no recognizable error body.
    #[error("unexpected API response ({status}): {message}")]
    Unexpected {
        /// HTTP status code of the response.
        status: u16,
        /// Fallback message, the raw `error` field or "API Error: {status}".
        message: String,
    },

    /// Response body could not be deserialized into the expected type.
    #[error("response parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Returns a user-facing message suitable for inline display.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => {
                "Could not reach the Sentra API. Please check your connection."
            }
            Self::Rejected { message, .. } | Self::Unexpected { message, .. } => message,
            Self::Parse(_) => "An unexpected error occurred.",
        }
    }

    /// Returns the HTTP status code, when the server responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Unexpected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Parse(_) => None,
        }
    }

    /// Returns the machine-readable error code, if the server sent one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Returns the validation message for a specific input field, if present.
    #[must_use]
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            Self::Rejected { details, .. } => details
                .iter()
                .find(|detail| detail.field == field)
                .map(|detail| detail.message.as_str()),
            _ => None,
        }
    }

    /// Returns whether this error is potentially recoverable with a retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { status, .. } | Self::Unexpected { status, .. } => *status >= 500,
            Self::Parse(_) => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ApiError::Transport("connection refused".to_string());
        assert!(err.user_message().contains("connection"));

        let err = ApiError::Rejected {
            status: 422,
            message: "Company name is required".to_string(),
            code: None,
            details: vec![],
        };
        assert_eq!(err.user_message(), "Company name is required");

        let err = ApiError::Unexpected {
            status: 502,
            message: "API Error: 502".to_string(),
        };
        assert_eq!(err.user_message(), "API Error: 502");
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::Transport("timeout".to_string()).is_retryable());
        assert!(
            ApiError::Unexpected {
                status: 503,
                message: "API Error: 503".to_string()
            }
            .is_retryable()
        );
        assert!(
            !ApiError::Rejected {
                status: 404,
                message: "Not found".to_string(),
                code: None,
                details: vec![],
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_field_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Validation failed".to_string(),
            code: Some("VALIDATION_ERROR".to_string()),
            details: vec![FieldDetail {
                field: "email".to_string(),
                message: "Invalid email address".to_string(),
            }],
        };
        assert_eq!(err.field_message("email"), Some("Invalid email address"));
        assert_eq!(err.field_message("name"), None);
        assert_eq!(err.code(), Some("VALIDATION_ERROR"));
    }

    #[test]
    fn test_error_body_parses_without_optionals() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": "Not found"}"#).expect("parse error body");
        assert_eq!(body.error, "Not found");
        assert!(body.code.is_none());
        assert!(body.message.is_none());
        assert!(body.details.is_none());
    }
}
