//! Authenticated HTTP gateway for the Sentra platform API.
//!
//! Every network call in the application goes through [`SentraClient`].
//! The client attaches bearer credentials from an injected
//! [`TokenProvider`], serializes JSON bodies, sends raw binary bodies for
//! file uploads, and funnels every response through one parse and
//! validation pipeline.

use std::sync::{Arc, RwLock};

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::error::ApiError;

use crate::error::{ApiErrorBody, Result};
use crate::validate::Validator;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("sentra-admin-studio/", env!("CARGO_PKG_VERSION"));

/// Capability that supplies the current bearer credential.
///
/// The client never refreshes or retries tokens itself; freshness is
/// entirely the provider's concern. `None` means signed out, in which
/// case requests go out without an Authorization header.
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    /// Returns the current bearer token, if any.
    fn bearer_token(&self) -> Option<String>;
}

/// In-memory token holder backing the desktop session.
#[derive(Debug, Default)]
pub struct SessionTokens {
    token: RwLock<Option<String>>,
}

impl SessionTokens {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current token.
    pub fn set(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    /// Drops the current token, signing the session out.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

impl TokenProvider for SessionTokens {
    fn bearer_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        }
    }
}

/// A file to be sent as a raw request body.
///
/// Metadata travels in query parameters, never multipart.
#[derive(Debug, Clone)]
pub struct FileBody {
    /// Original filename, forwarded as the `filename` query parameter.
    pub filename: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// Declared MIME type, if the picker knew one.
    pub content_type: Option<String>,
}

impl FileBody {
    /// The Content-Type header value for this file.
    #[must_use]
    pub fn content_type_or_default(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|value| !value.is_empty())
            .unwrap_or("application/octet-stream")
    }
}

/// Authenticated client for the Sentra REST API.
#[derive(Debug, Clone)]
pub struct SentraClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl SentraClient {
    /// Creates a client for the given base URL with an injected
    /// credential provider.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            tokens,
        })
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        validator: Option<Validator>,
    ) -> Result<T> {
        tracing::debug!("GET {}", path);
        self.execute(self.client.get(self.url(path)), validator)
            .await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        validator: Option<Validator>,
    ) -> Result<T> {
        tracing::debug!("GET {} with {} query parameters", path, query.len());
        self.execute(self.client.get(self.url(path)).query(query), validator)
            .await
    }

    /// POST a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B, validator: Option<Validator>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("POST {}", path);
        self.execute(self.client.post(self.url(path)).json(body), validator)
            .await
    }

    /// POST without a body.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        validator: Option<Validator>,
    ) -> Result<T> {
        tracing::debug!("POST {}", path);
        self.execute(self.client.post(self.url(path)), validator)
            .await
    }

    /// PUT a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B, validator: Option<Validator>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("PUT {}", path);
        self.execute(self.client.put(self.url(path)).json(body), validator)
            .await
    }

    /// PATCH a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B, validator: Option<Validator>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("PATCH {}", path);
        self.execute(self.client.patch(self.url(path)).json(body), validator)
            .await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        validator: Option<Validator>,
    ) -> Result<T> {
        tracing::debug!("DELETE {}", path);
        self.execute(self.client.delete(self.url(path)), validator)
            .await
    }

    /// POST a raw file body. The filename and any extra metadata travel
    /// as query parameters, not as multipart fields.
    pub async fn upload_file<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        file: FileBody,
        validator: Option<Validator>,
    ) -> Result<T> {
        tracing::debug!("POST {} ({} bytes)", path, file.bytes.len());
        let request = self
            .client
            .post(self.url(path))
            .query(&file_query(query, &file))
            .header(CONTENT_TYPE, file.content_type_or_default())
            .body(file.bytes);
        self.execute(request, validator).await
    }

    /// PUT a raw file body, replacing an existing file.
    pub async fn replace_file<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        file: FileBody,
        validator: Option<Validator>,
    ) -> Result<T> {
        tracing::debug!("PUT {} ({} bytes)", path, file.bytes.len());
        let request = self
            .client
            .put(self.url(path))
            .query(&file_query(query, &file))
            .header(CONTENT_TYPE, file.content_type_or_default())
            .body(file.bytes);
        self.execute(request, validator).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.bearer_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        validator: Option<Validator>,
    ) -> Result<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        // The body is parsed as JSON regardless of status; a body that
        // does not parse becomes a synthetic error payload instead of
        // failing the pipeline here.
        let data = match response.json::<Value>().await {
            Ok(value) => value,
            Err(_) => serde_json::json!({"error": "Failed to parse response"}),
        };

        if !status.is_success() {
            return Err(rejection(status.as_u16(), &data));
        }

        materialize(data, validator)
    }
}

/// Prepends the file's name to the caller's query parameters.
fn file_query(query: &[(&str, String)], file: &FileBody) -> Vec<(String, String)> {
    let mut pairs = vec![("filename".to_string(), file.filename.clone())];
    pairs.extend(
        query
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone())),
    );
    pairs
}

/// Maps a non-success response body into a typed error.
fn rejection(status: u16, data: &Value) -> ApiError {
    match serde_json::from_value::<ApiErrorBody>(data.clone()) {
        Ok(body) => ApiError::Rejected {
            status,
            message: body.error,
            code: body.code,
            details: body.details.unwrap_or_default(),
        },
        Err(_) => {
            let message = data
                .get("error")
                .and_then(Value::as_str)
                .map_or_else(|| format!("API Error: {status}"), str::to_string);
            ApiError::Unexpected { status, message }
        }
    }
}

/// Validates and deserializes a success payload.
///
/// Validation issues are logged, never raised: the payload is handed to
/// the caller as-is so a drifted but usable response still renders.
fn materialize<T: DeserializeOwned>(data: Value, validator: Option<Validator>) -> Result<T> {
    if let Some(validate) = validator {
        let issues = validate(&data);
        if !issues.is_empty() {
            tracing::warn!(
                "response failed schema validation ({} issues), returning raw payload",
                issues.len()
            );
            for issue in &issues {
                tracing::debug!("schema issue at {}", issue);
            }
        }
    }
    serde_json::from_value(data).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::VideoResponse;
    use crate::validate;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let tokens: Arc<dyn TokenProvider> = Arc::new(SessionTokens::new());
        let client = SentraClient::new(DEFAULT_BASE_URL, tokens);
        assert!(client.is_ok());
    }

    #[test]
    fn session_tokens_set_and_clear() {
        let tokens = SessionTokens::new();
        assert!(tokens.bearer_token().is_none());
        tokens.set("abc123");
        assert_eq!(tokens.bearer_token().as_deref(), Some("abc123"));
        tokens.clear();
        assert!(tokens.bearer_token().is_none());
    }

    #[test]
    fn file_body_content_type_fallback() {
        let mut file = FileBody {
            filename: "clip.mp4".to_string(),
            bytes: vec![0u8; 4],
            content_type: Some("video/mp4".to_string()),
        };
        assert_eq!(file.content_type_or_default(), "video/mp4");
        file.content_type = None;
        assert_eq!(file.content_type_or_default(), "application/octet-stream");
        file.content_type = Some(String::new());
        assert_eq!(file.content_type_or_default(), "application/octet-stream");
    }

    #[test]
    fn file_query_prepends_the_filename() {
        let file = FileBody {
            filename: "intro.mp4".to_string(),
            bytes: Vec::new(),
            content_type: None,
        };
        let query = [("title", "Intro".to_string())];
        let pairs = file_query(&query, &file);
        assert_eq!(pairs[0], ("filename".to_string(), "intro.mp4".to_string()));
        assert_eq!(pairs[1], ("title".to_string(), "Intro".to_string()));
    }

    #[test]
    fn structured_rejection_carries_details() {
        let body = json!({
            "error": "Validation failed",
            "code": "VALIDATION_ERROR",
            "details": [{"field": "title", "message": "Title is required"}]
        });
        let err = rejection(400, &body);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.code(), Some("VALIDATION_ERROR"));
        assert_eq!(err.field_message("title"), Some("Title is required"));
    }

    #[test]
    fn unstructured_rejection_falls_back_to_status() {
        let err = rejection(502, &json!("bad gateway"));
        assert_eq!(err.user_message(), "API Error: 502");

        // A malformed details list still surfaces the raw error string.
        let err = rejection(400, &json!({"error": "broken", "details": "not-a-list"}));
        assert_eq!(err.user_message(), "broken");
    }

    #[test]
    fn schema_drift_returns_raw_payload() {
        // publishDate is missing, so validation flags the payload, but the
        // call must still succeed with whatever deserializes.
        let drifted = json!({
            "video": {
                "id": "v1",
                "title": "Intro",
                "url": "https://cdn.example.com/v1.mp4",
                "publishDate": "2026-01-01T00:00:00.000Z",
                "companyId": null,
                "createdAt": "2026-01-01T00:00:00.000Z",
                "updatedAt": "2026-01-01T00:00:00.000Z",
                "unexpected": {"drift": true}
            }
        });
        assert!(!validate::video_response(&json!({"video": {}})).is_empty());
        let result: Result<VideoResponse> = materialize(drifted, Some(validate::video_response));
        assert!(result.is_ok());
    }
}
