//! Wire schemas for every platform entity and payload.
//!
//! Each response shape has a matching runtime validator in
//! [`crate::validate`]; the structs here deserialize leniently so that a
//! drifted but usable payload still materializes.

pub mod auth;
pub mod company;
pub mod question;
pub mod stats;
pub mod user;
pub mod video;

pub use auth::{AuthMeResponse, CheckDomainInput, CheckDomainResponse, RegisterInput, RegisterResponse};
pub use company::{
    AddDomainInput, CompaniesResponse, Company, CompanyCounts, CompanyRef, CompanyResponse,
    CompanyUser, CreateCompanyInput, Domain, DomainResponse, UpdateCompanyInput,
};
pub use question::{
    Answer, AnswerInput, CreateQuestionInput, MAX_ANSWER_LEN, MAX_QUESTION_LEN, MIN_ANSWERS,
    Question, QuestionOrder, QuestionResponse, QuestionsResponse, ReorderQuestionsInput,
    UpdateQuestionInput,
};
pub use stats::{
    RoleBreakdown, StatsGrowth, StatsPeriod, StatsResponse, StatsTotals, TimePoint, TimeSeries,
};
pub use user::{CreateUserInput, Role, UpdateUserRoleInput, User, UserResponse, UsersResponse};
pub use video::{CreateVideoInput, UpdateVideoInput, Video, VideoResponse, VideoStatus, VideosResponse};

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Maximum length of a company name.
pub const MAX_COMPANY_NAME_LEN: usize = 100;

/// Maximum length of a video title.
pub const MAX_VIDEO_TITLE_LEN: usize = 200;

/// Hostname-like pattern a domain must match, checked after lowercasing.
static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*\.[a-zA-Z]{2,}$").expect("Invalid domain regex")
});

/// Whether a domain string is acceptable for submission (e.g. "acme.com").
#[must_use]
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_REGEX.is_match(domain)
}

/// Generic `{message}` acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_pattern() {
        assert!(is_valid_domain("acme.com"));
        assert!(is_valid_domain("sub-brand.io"));
        assert!(is_valid_domain("a.co"));
        assert!(!is_valid_domain("acme"));
        assert!(!is_valid_domain(".com"));
        assert!(!is_valid_domain("-acme.com"));
        assert!(!is_valid_domain("acme.c"));
        assert!(!is_valid_domain("acme.c0m"));
        assert!(!is_valid_domain(""));
    }
}
