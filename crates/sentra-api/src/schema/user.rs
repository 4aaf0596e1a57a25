//! User wire types and the role hierarchy.

use serde::{Deserialize, Serialize};

use super::company::CompanyRef;

/// Access level of a user, ordered by privilege.
///
/// The derived `Ord` follows declaration order, so
/// `Role::User < Role::Admin < Role::Superadmin` holds and privilege
/// checks can compare directly.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Superadmin,
}

impl Role {
    /// All roles in ascending privilege order.
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::Superadmin];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
            Role::Superadmin => "Super Admin",
        }
    }

    /// Short description shown next to the label in role pickers.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Role::User => "Basic access",
            Role::Admin => "Dashboard access",
            Role::Superadmin => "Full CMS access",
        }
    }

    /// Wire representation, also used for the users list query filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// Whether this role grants admin dashboard access.
    #[must_use]
    pub fn is_admin(self) -> bool {
        self >= Role::Admin
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    /// Identity-provider subject id mapped to this user.
    pub auth_id: String,

    pub email: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub role: Role,

    pub company_id: String,

    pub created_at: String,

    pub updated_at: String,

    /// Owning company summary, only present on list and detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyRef>,
}

impl User {
    /// Returns "First Last", falling back to whichever part exists, then
    /// to the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => self.email.clone(),
        }
    }

    /// Whether this user may use the admin console at all.
    #[must_use]
    pub fn is_superadmin(&self) -> bool {
        self.role == Role::Superadmin
    }
}

/// Payload for POST /api/users.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    pub role: Role,

    pub company_id: String,
}

/// Payload for PATCH /api/users/{id}/role.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserRoleInput {
    pub role: Role,
}

/// Response wrapper for the users collection.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Response wrapper for a single user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ordering() {
        assert!(Role::User < Role::Admin);
        assert!(Role::Admin < Role::Superadmin);
        assert!(Role::Superadmin.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }

    #[test]
    fn role_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Superadmin).expect("serialize");
        assert_eq!(json, "\"superadmin\"");
        let role: Role = serde_json::from_str("\"admin\"").expect("deserialize");
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn display_name_fallbacks() {
        let mut user: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "authId": "idp_123",
            "email": "jane@acme.com",
            "firstName": "Jane",
            "lastName": "Doe",
            "role": "user",
            "companyId": "c1",
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-01T00:00:00.000Z"
        }))
        .expect("parse user");

        assert_eq!(user.display_name(), "Jane Doe");
        user.last_name = None;
        assert_eq!(user.display_name(), "Jane");
        user.first_name = None;
        assert_eq!(user.display_name(), "jane@acme.com");
    }

    #[test]
    fn create_input_omits_missing_names() {
        let input = CreateUserInput {
            email: "new@acme.com".to_string(),
            first_name: None,
            last_name: None,
            role: Role::User,
            company_id: "c1".to_string(),
        };
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"email": "new@acme.com", "role": "user", "companyId": "c1"})
        );
    }
}
