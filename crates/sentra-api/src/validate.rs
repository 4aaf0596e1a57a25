//! Runtime validators for response shapes.
//!
//! Each validator walks a parsed JSON body and collects structural
//! mismatches against the declared shape. Validation is advisory: the
//! client logs the issues and still hands the payload to the caller, so a
//! cosmetic schema drift never blocks an admin from acting.

use serde_json::Value;

/// One structural mismatch found in a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dotted path to the offending value (e.g. "companies[2].name").
    pub path: String,
    /// What was expected there.
    pub message: String,
}

impl std::fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A response-shape validator as accepted by the client verbs.
pub type Validator = fn(&Value) -> Vec<SchemaIssue>;

fn push(issues: &mut Vec<SchemaIssue>, path: &str, message: &str) {
    issues.push(SchemaIssue {
        path: path.to_string(),
        message: message.to_string(),
    });
}

fn require_string(value: &Value, path: &str, key: &str, issues: &mut Vec<SchemaIssue>) {
    let child = format!("{path}.{key}");
    match value.get(key) {
        Some(Value::String(_)) => {}
        Some(_) => push(issues, &child, "expected a string"),
        None => push(issues, &child, "missing required string"),
    }
}

fn require_number(value: &Value, path: &str, key: &str, issues: &mut Vec<SchemaIssue>) {
    let child = format!("{path}.{key}");
    match value.get(key) {
        Some(Value::Number(_)) => {}
        Some(_) => push(issues, &child, "expected a number"),
        None => push(issues, &child, "missing required number"),
    }
}

fn require_bool(value: &Value, path: &str, key: &str, issues: &mut Vec<SchemaIssue>) {
    let child = format!("{path}.{key}");
    match value.get(key) {
        Some(Value::Bool(_)) => {}
        Some(_) => push(issues, &child, "expected a boolean"),
        None => push(issues, &child, "missing required boolean"),
    }
}

/// String that may be null but must be present.
fn require_nullable_string(value: &Value, path: &str, key: &str, issues: &mut Vec<SchemaIssue>) {
    let child = format!("{path}.{key}");
    match value.get(key) {
        Some(Value::String(_) | Value::Null) => {}
        Some(_) => push(issues, &child, "expected a string or null"),
        None => push(issues, &child, "missing required nullable string"),
    }
}

fn require_object<'a>(
    value: &'a Value,
    path: &str,
    key: &str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<&'a Value> {
    let child = format!("{path}.{key}");
    match value.get(key) {
        Some(object @ Value::Object(_)) => Some(object),
        Some(_) => {
            push(issues, &child, "expected an object");
            None
        }
        None => {
            push(issues, &child, "missing required object");
            None
        }
    }
}

fn require_array<'a>(
    value: &'a Value,
    path: &str,
    key: &str,
    issues: &mut Vec<SchemaIssue>,
) -> Option<&'a Vec<Value>> {
    let child = format!("{path}.{key}");
    match value.get(key) {
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            push(issues, &child, "expected an array");
            None
        }
        None => {
            push(issues, &child, "missing required array");
            None
        }
    }
}

fn check_role(value: &Value, path: &str, key: &str, issues: &mut Vec<SchemaIssue>) {
    let child = format!("{path}.{key}");
    match value.get(key).and_then(Value::as_str) {
        Some("user" | "admin" | "superadmin") => {}
        Some(_) => push(issues, &child, "expected one of user, admin, superadmin"),
        None => push(issues, &child, "missing required role"),
    }
}

fn check_domain(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    require_string(value, path, "id", issues);
    require_string(value, path, "domain", issues);
    require_string(value, path, "createdAt", issues);
}

fn check_company(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    require_string(value, path, "id", issues);
    require_string(value, path, "name", issues);
    require_string(value, path, "createdAt", issues);
    require_string(value, path, "updatedAt", issues);
    if let Some(domains) = require_array(value, path, "domains", issues) {
        for (index, domain) in domains.iter().enumerate() {
            check_domain(domain, &format!("{path}.domains[{index}]"), issues);
        }
    }
    if let Some(count) = value.get("_count") {
        require_number(count, &format!("{path}._count"), "users", issues);
    }
}

fn check_user(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    require_string(value, path, "id", issues);
    require_string(value, path, "authId", issues);
    require_string(value, path, "email", issues);
    require_nullable_string(value, path, "firstName", issues);
    require_nullable_string(value, path, "lastName", issues);
    check_role(value, path, "role", issues);
    require_string(value, path, "companyId", issues);
    require_string(value, path, "createdAt", issues);
    require_string(value, path, "updatedAt", issues);
}

fn check_video(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    require_string(value, path, "id", issues);
    require_string(value, path, "title", issues);
    require_string(value, path, "url", issues);
    require_string(value, path, "publishDate", issues);
    require_nullable_string(value, path, "companyId", issues);
    require_string(value, path, "createdAt", issues);
    require_string(value, path, "updatedAt", issues);
}

fn check_answer(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    require_string(value, path, "id", issues);
    require_string(value, path, "text", issues);
    require_bool(value, path, "isCorrect", issues);
    require_number(value, path, "order", issues);
    require_string(value, path, "questionId", issues);
}

fn check_question(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    require_string(value, path, "id", issues);
    require_string(value, path, "text", issues);
    require_number(value, path, "order", issues);
    require_string(value, path, "videoId", issues);
    if let Some(answers) = require_array(value, path, "answers", issues) {
        for (index, answer) in answers.iter().enumerate() {
            check_answer(answer, &format!("{path}.answers[{index}]"), issues);
        }
    }
}

fn check_time_series(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    require_string(value, path, "label", issues);
    require_number(value, path, "total", issues);
    if let Some(points) = require_array(value, path, "data", issues) {
        for (index, point) in points.iter().enumerate() {
            let point_path = format!("{path}.data[{index}]");
            require_string(point, &point_path, "date", issues);
            require_number(point, &point_path, "count", issues);
        }
    }
}

/// Validates `{companies: [...]}`.
pub fn companies_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(companies) = require_array(value, "$", "companies", &mut issues) {
        for (index, company) in companies.iter().enumerate() {
            check_company(company, &format!("$.companies[{index}]"), &mut issues);
        }
    }
    issues
}

/// Validates `{company: ...}` including the optional member users.
pub fn company_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(company) = require_object(value, "$", "company", &mut issues) {
        check_company(company, "$.company", &mut issues);
        if let Some(Value::Array(users)) = company.get("users") {
            for (index, user) in users.iter().enumerate() {
                let user_path = format!("$.company.users[{index}]");
                require_string(user, &user_path, "id", &mut issues);
                require_string(user, &user_path, "email", &mut issues);
                check_role(user, &user_path, "role", &mut issues);
            }
        }
    }
    issues
}

/// Validates `{domain: ...}`.
pub fn domain_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(domain) = require_object(value, "$", "domain", &mut issues) {
        check_domain(domain, "$.domain", &mut issues);
    }
    issues
}

/// Validates `{users: [...]}`.
pub fn users_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(users) = require_array(value, "$", "users", &mut issues) {
        for (index, user) in users.iter().enumerate() {
            check_user(user, &format!("$.users[{index}]"), &mut issues);
        }
    }
    issues
}

/// Validates `{user: ...}`.
pub fn user_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(user) = require_object(value, "$", "user", &mut issues) {
        check_user(user, "$.user", &mut issues);
    }
    issues
}

/// Validates `{videos: [...]}`.
pub fn videos_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(videos) = require_array(value, "$", "videos", &mut issues) {
        for (index, video) in videos.iter().enumerate() {
            check_video(video, &format!("$.videos[{index}]"), &mut issues);
        }
    }
    issues
}

/// Validates `{video: ...}`.
pub fn video_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(video) = require_object(value, "$", "video", &mut issues) {
        check_video(video, "$.video", &mut issues);
    }
    issues
}

/// Validates `{questions: [...]}` with nested answers.
pub fn questions_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(questions) = require_array(value, "$", "questions", &mut issues) {
        for (index, question) in questions.iter().enumerate() {
            check_question(question, &format!("$.questions[{index}]"), &mut issues);
        }
    }
    issues
}

/// Validates `{question: ...}` with nested answers.
pub fn question_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(question) = require_object(value, "$", "question", &mut issues) {
        check_question(question, "$.question", &mut issues);
    }
    issues
}

/// Validates the aggregate stats response.
pub fn stats_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    if let Some(totals) = require_object(value, "$", "totals", &mut issues) {
        for key in ["users", "companies", "videos", "questions", "answers"] {
            require_number(totals, "$.totals", key, &mut issues);
        }
    }
    if let Some(breakdown) = require_object(value, "$", "roleBreakdown", &mut issues) {
        for key in ["user", "admin", "superadmin"] {
            require_number(breakdown, "$.roleBreakdown", key, &mut issues);
        }
    }
    if let Some(growth) = require_object(value, "$", "growth", &mut issues) {
        for key in ["users", "companies", "videos", "questions"] {
            if let Some(series) = require_object(growth, "$.growth", key, &mut issues) {
                check_time_series(series, &format!("$.growth.{key}"), &mut issues);
            }
        }
    }
    require_string(value, "$", "period", &mut issues);
    issues
}

/// Validates `{allowed, message?, companyName?}`.
pub fn check_domain_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    require_bool(value, "$", "allowed", &mut issues);
    issues
}

/// Validates `{user: ...}` from the auth endpoints.
pub fn auth_me_response(value: &Value) -> Vec<SchemaIssue> {
    user_response(value)
}

/// Validates `{message, user}` from registration.
pub fn register_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    require_string(value, "$", "message", &mut issues);
    if let Some(user) = require_object(value, "$", "user", &mut issues) {
        check_user(user, "$.user", &mut issues);
    }
    issues
}

/// Validates the generic `{message}` acknowledgement.
pub fn message_response(value: &Value) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    require_string(value, "$", "message", &mut issues);
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_companies_pass() {
        let body = json!({
            "companies": [{
                "id": "c1",
                "name": "Acme",
                "timezone": "UTC",
                "createdAt": "2026-01-01T00:00:00.000Z",
                "updatedAt": "2026-01-01T00:00:00.000Z",
                "domains": [],
                "_count": {"users": 2}
            }]
        });
        assert!(companies_response(&body).is_empty());
    }

    #[test]
    fn missing_field_reported_with_path() {
        let body = json!({
            "companies": [{
                "id": "c1",
                "createdAt": "2026-01-01T00:00:00.000Z",
                "updatedAt": "2026-01-01T00:00:00.000Z",
                "domains": []
            }]
        });
        let issues = companies_response(&body);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "$.companies[0].name");
    }

    #[test]
    fn nullable_company_id_accepted_on_video() {
        let body = json!({
            "video": {
                "id": "v1",
                "title": "Intro",
                "url": "https://cdn.example.com/v1.mp4",
                "publishDate": "2026-01-01T00:00:00.000Z",
                "companyId": null,
                "createdAt": "2026-01-01T00:00:00.000Z",
                "updatedAt": "2026-01-01T00:00:00.000Z"
            }
        });
        assert!(video_response(&body).is_empty());
    }

    #[test]
    fn wrong_type_reported() {
        let body = json!({"questions": [{
            "id": "q1",
            "text": "Question?",
            "order": "first",
            "videoId": "v1",
            "answers": []
        }]});
        let issues = questions_response(&body);
        assert!(
            issues
                .iter()
                .any(|issue| issue.path == "$.questions[0].order")
        );
    }

    #[test]
    fn check_domain_requires_allowed() {
        assert!(check_domain_response(&json!({"allowed": true})).is_empty());
        let issues = check_domain_response(&json!({"message": "no"}));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "$.allowed");
    }
}
