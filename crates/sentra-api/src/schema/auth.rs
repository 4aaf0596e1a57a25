//! Authentication and registration wire types.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Payload for POST /api/auth/check-domain.
#[derive(Debug, Clone, Serialize)]
pub struct CheckDomainInput {
    pub email: String,
}

/// Response of the pre-signup domain allow-check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDomainResponse {
    pub allowed: bool,

    /// Explanation when access is denied, rendered verbatim.
    #[serde(default)]
    pub message: Option<String>,

    /// Name of the company that will claim the user when allowed.
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Payload for POST /api/auth/register.
///
/// Name fields are sent even when null, mirroring what the identity
/// provider hands over.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Response wrapper for GET /api/auth/me.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthMeResponse {
    pub user: User,
}

/// Response of POST /api/auth/register.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_domain_denied_carries_message() {
        let json = r#"{"allowed": false, "message": "This domain is not registered."}"#;
        let response: CheckDomainResponse = serde_json::from_str(json).expect("parse");
        assert!(!response.allowed);
        assert_eq!(
            response.message.as_deref(),
            Some("This domain is not registered.")
        );
        assert!(response.company_name.is_none());
    }

    #[test]
    fn register_input_serializes_null_names() {
        let input = RegisterInput {
            email: "jane@acme.com".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: None,
        };
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"email": "jane@acme.com", "firstName": "Jane", "lastName": null})
        );
    }
}
