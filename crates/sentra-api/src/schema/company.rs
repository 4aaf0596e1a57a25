//! Company and domain wire types.

use serde::{Deserialize, Serialize};

/// An email domain authorizing self-registration into a company.
///
/// When embedded in a [`Company`], the API omits `companyId` and
/// `updatedAt`, so both are optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: String,

    /// Hostname suffix, stored lowercase (e.g., "acme.com").
    pub domain: String,

    /// Owning company, absent when embedded in a company payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Denormalized relation counts attached to a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCounts {
    pub users: u64,
}

/// A company row as embedded in a user making up the company detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUser {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: super::user::Role,
    pub created_at: String,
}

/// A tenant on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,

    pub name: String,

    /// IANA timezone identifier, "UTC" when the server omits it.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    pub created_at: String,

    pub updated_at: String,

    /// Domains authorizing self-registration, newest last.
    #[serde(default)]
    pub domains: Vec<Domain>,

    /// Relation counts, only present on list and detail responses.
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<CompanyCounts>,

    /// Member users, only present on the detail response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<CompanyUser>>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Company {
    /// Returns the denormalized user count, zero when the server sent none.
    #[must_use]
    pub fn user_count(&self) -> u64 {
        self.count.as_ref().map_or(0, |count| count.users)
    }

    /// Returns whether deletion must be blocked because users still belong
    /// to this company.
    #[must_use]
    pub fn has_users(&self) -> bool {
        self.user_count() > 0
    }
}

/// Minimal company reference embedded in users and videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: String,
    pub name: String,
}

/// Payload for POST /api/companies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyInput {
    pub name: String,
    pub timezone: String,
}

/// Payload for PUT /api/companies/{id}. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Payload for POST /api/companies/{id}/domains.
#[derive(Debug, Clone, Serialize)]
pub struct AddDomainInput {
    pub domain: String,
}

impl AddDomainInput {
    /// Builds the payload, lowercasing the domain the way the form does
    /// before submission.
    #[must_use]
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.trim().to_lowercase(),
        }
    }
}

/// Response wrapper for the company collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
}

/// Response wrapper for a single company.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyResponse {
    pub company: Company,
}

/// Response wrapper for a newly added domain.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainResponse {
    pub domain: Domain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_parses_without_counts_or_users() {
        let json = r#"{
            "id": "c1",
            "name": "Acme",
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-02T00:00:00.000Z",
            "domains": [{"id": "d1", "domain": "acme.com", "createdAt": "2026-01-01T00:00:00.000Z"}]
        }"#;
        let company: Company = serde_json::from_str(json).expect("parse company");
        assert_eq!(company.timezone, "UTC");
        assert_eq!(company.user_count(), 0);
        assert!(!company.has_users());
        assert_eq!(company.domains.len(), 1);
        assert!(company.domains[0].company_id.is_none());
    }

    #[test]
    fn company_user_count_blocks_delete() {
        let json = r#"{
            "id": "c1",
            "name": "Acme",
            "timezone": "Europe/Amsterdam",
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-02T00:00:00.000Z",
            "domains": [],
            "_count": {"users": 3}
        }"#;
        let company: Company = serde_json::from_str(json).expect("parse company");
        assert_eq!(company.timezone, "Europe/Amsterdam");
        assert_eq!(company.user_count(), 3);
        assert!(company.has_users());
    }

    #[test]
    fn add_domain_input_lowercases() {
        let input = AddDomainInput::new("  Acme.COM ");
        assert_eq!(input.domain, "acme.com");
    }

    #[test]
    fn update_input_omits_unchanged_fields() {
        let input = UpdateCompanyInput {
            name: Some("Acme BV".to_string()),
            timezone: None,
        };
        let json = serde_json::to_value(&input).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "Acme BV"}));
    }
}
