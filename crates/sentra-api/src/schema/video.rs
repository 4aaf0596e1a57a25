//! Video wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::CompanyRef;

/// Derived publication state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoStatus {
    /// Publish date is in the past or now.
    Published,
    /// Publish date is in the future.
    Scheduled,
}

impl VideoStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VideoStatus::Published => "Published",
            VideoStatus::Scheduled => "Scheduled",
        }
    }
}

/// A training video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,

    pub title: String,

    /// Playable URL served by the file store.
    pub url: String,

    /// ISO-8601 publication timestamp. Status is derived from it, never
    /// stored.
    pub publish_date: String,

    /// Owning company. `None` means the video is visible to everyone,
    /// which is a meaningful state, not an unset value.
    pub company_id: Option<String>,

    pub created_at: String,

    pub updated_at: String,

    /// Owning company summary, absent or null for everyone-visible videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyRef>,
}

impl Video {
    /// Derives the publication status at `now`.
    ///
    /// An unparseable publish date counts as not yet published.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> VideoStatus {
        let published = DateTime::parse_from_rfc3339(&self.publish_date)
            .map(|date| date.with_timezone(&Utc) <= now)
            .unwrap_or(false);
        if published {
            VideoStatus::Published
        } else {
            VideoStatus::Scheduled
        }
    }

    /// Label for the visibility column: the owning company's name, or the
    /// everyone wording when no company scope is set.
    #[must_use]
    pub fn visibility_label(&self) -> &str {
        match &self.company {
            Some(company) => &company.name,
            None => "Everyone",
        }
    }
}

/// Payload for POST /api/videos (metadata-only create).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoInput {
    pub title: String,

    pub publish_date: String,

    /// Omitted entirely when the video should be visible to everyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

/// Payload for PUT /api/videos/{id}. Omitted fields are left unchanged.
///
/// `company_id` distinguishes three states: `None` leaves the scope
/// untouched, `Some(None)` serializes as `null` to make the video visible
/// to everyone, `Some(Some(id))` assigns a company.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Option<String>>,
}

/// Response wrapper for the video collection.
#[derive(Debug, Clone, Deserialize)]
pub struct VideosResponse {
    pub videos: Vec<Video>,
}

/// Response wrapper for a single video.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoResponse {
    pub video: Video,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(publish_date: &str, company: Option<CompanyRef>) -> Video {
        Video {
            id: "v1".to_string(),
            title: "Onboarding".to_string(),
            url: "https://cdn.example.com/v1.mp4".to_string(),
            publish_date: publish_date.to_string(),
            company_id: company.as_ref().map(|c| c.id.clone()),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            company,
        }
    }

    #[test]
    fn status_derivation() {
        let now = DateTime::parse_from_rfc3339("2026-06-01T12:00:00Z")
            .expect("parse now")
            .with_timezone(&Utc);

        let past = video("2026-05-31T00:00:00.000Z", None);
        assert_eq!(past.status(now), VideoStatus::Published);

        let future = video("2026-07-01T00:00:00.000Z", None);
        assert_eq!(future.status(now), VideoStatus::Scheduled);

        let garbage = video("not-a-date", None);
        assert_eq!(garbage.status(now), VideoStatus::Scheduled);
    }

    #[test]
    fn null_company_means_everyone() {
        let json = r#"{
            "id": "v1",
            "title": "Onboarding",
            "url": "https://cdn.example.com/v1.mp4",
            "publishDate": "2026-01-01T00:00:00.000Z",
            "companyId": null,
            "createdAt": "2026-01-01T00:00:00.000Z",
            "updatedAt": "2026-01-01T00:00:00.000Z",
            "company": null
        }"#;
        let video: Video = serde_json::from_str(json).expect("parse video");
        assert!(video.company_id.is_none());
        assert_eq!(video.visibility_label(), "Everyone");
    }

    #[test]
    fn update_company_scope_states() {
        let untouched = UpdateVideoInput::default();
        assert_eq!(
            serde_json::to_value(&untouched).expect("serialize"),
            serde_json::json!({})
        );

        let everyone = UpdateVideoInput {
            company_id: Some(None),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&everyone).expect("serialize"),
            serde_json::json!({"companyId": null})
        );

        let assigned = UpdateVideoInput {
            company_id: Some(Some("c1".to_string())),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&assigned).expect("serialize"),
            serde_json::json!({"companyId": "c1"})
        );
    }
}
