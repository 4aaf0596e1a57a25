//! Keyed response cache with staleness tracking.
//!
//! The cache is a plain map from [`QueryKey`] to the last known state of
//! that query. It never fetches anything itself; the application asks
//! [`ResourceCache::needs_fetch`] before spawning a request and feeds the
//! outcome back through [`ResourceCache::resolve`] or
//! [`ResourceCache::fail`].

use std::collections::HashMap;
use std::time::{Duration, Instant};

use sentra_api::ApiError;
use sentra_api::schema::{Company, Question, StatsPeriod, StatsResponse, User, Video};

use crate::key::{EntityKind, InvalidationSelector, QueryKey, UserFilters};
use crate::mutation::MutationKind;

/// How long a resolved entry stays fresh.
///
/// Statistics and the signed-in user change rarely and tolerate a short
/// window; everything else is stale immediately, so revisiting a screen
/// always refetches.
fn stale_time(kind: EntityKind) -> Duration {
    match kind {
        EntityKind::Stats | EntityKind::Auth => Duration::from_secs(5 * 60),
        _ => Duration::ZERO,
    }
}

/// Typed payload of a resolved query.
#[derive(Debug, Clone)]
pub enum CachedPayload {
    Companies(Vec<Company>),
    Company(Company),
    Users(Vec<User>),
    User(User),
    Videos(Vec<Video>),
    Video(Video),
    Questions(Vec<Question>),
    Question(Question),
    Stats(StatsResponse),
    AuthUser(User),
}

/// Where a query currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Last known state of one query.
#[derive(Debug, Clone, Default)]
pub struct CacheEntry {
    /// Most recent successful payload, kept across refetches and errors.
    pub payload: Option<CachedPayload>,
    pub status: QueryStatus,
    /// Error from the most recent failed attempt.
    pub error: Option<ApiError>,
    updated_at: Option<Instant>,
    invalidated: bool,
}

impl CacheEntry {
    #[must_use]
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }
}

/// All cached query state for the running session.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl ResourceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entry(&self, key: &QueryKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn payload(&self, key: &QueryKey) -> Option<&CachedPayload> {
        self.entries.get(key)?.payload.as_ref()
    }

    #[must_use]
    pub fn is_pending(&self, key: &QueryKey) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| entry.status == QueryStatus::Pending)
    }

    #[must_use]
    pub fn error(&self, key: &QueryKey) -> Option<&ApiError> {
        self.entries.get(key)?.error.as_ref()
    }

    /// Whether a screen showing this query should spawn a fetch.
    ///
    /// Never true while a fetch is already in flight. Otherwise true for
    /// unknown, empty, invalidated, errored, or expired entries.
    #[must_use]
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return true;
        };
        if entry.status == QueryStatus::Pending {
            return false;
        }
        if entry.payload.is_none() || entry.invalidated || entry.status == QueryStatus::Error {
            return true;
        }
        match entry.updated_at {
            Some(at) => at.elapsed() >= stale_time(key.kind()),
            None => true,
        }
    }

    /// Marks a fetch as in flight. Existing data stays visible.
    pub fn begin_fetch(&mut self, key: QueryKey) {
        tracing::debug!("fetch {}", key);
        let entry = self.entries.entry(key).or_default();
        entry.status = QueryStatus::Pending;
    }

    /// Stores a successful payload and restarts the freshness window.
    pub fn resolve(&mut self, key: QueryKey, payload: CachedPayload) {
        tracing::debug!("resolve {}", key);
        let entry = self.entries.entry(key).or_default();
        entry.payload = Some(payload);
        entry.status = QueryStatus::Success;
        entry.error = None;
        entry.updated_at = Some(Instant::now());
        entry.invalidated = false;
    }

    /// Records a failed fetch. The previous payload, if any, is kept so
    /// the screen can show stale data next to the error.
    pub fn fail(&mut self, key: QueryKey, error: ApiError) {
        tracing::debug!("fail {}: {}", key, error);
        let entry = self.entries.entry(key).or_default();
        entry.status = QueryStatus::Error;
        entry.error = Some(error);
    }

    /// Marks every entry the selector matches as stale.
    pub fn invalidate(&mut self, selector: &InvalidationSelector) -> usize {
        let mut hit = 0;
        for (key, entry) in &mut self.entries {
            if selector.matches(key) {
                entry.invalidated = true;
                hit += 1;
            }
        }
        tracing::debug!("invalidated {} entries for {:?}", hit, selector);
        hit
    }

    /// Applies a completed mutation's invalidations.
    pub fn apply(&mut self, mutation: &MutationKind) {
        for selector in mutation.invalidations() {
            self.invalidate(&selector);
        }
    }

    /// Drops everything, used when the session signs out.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn companies(&self) -> Option<&[Company]> {
        match self.payload(&QueryKey::Companies)? {
            CachedPayload::Companies(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn company(&self, id: &str) -> Option<&Company> {
        match self.payload(&QueryKey::Company(id.to_string()))? {
            CachedPayload::Company(company) => Some(company),
            _ => None,
        }
    }

    #[must_use]
    pub fn users(&self, filters: &UserFilters) -> Option<&[User]> {
        match self.payload(&QueryKey::Users(filters.clone()))? {
            CachedPayload::Users(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        match self.payload(&QueryKey::User(id.to_string()))? {
            CachedPayload::User(user) => Some(user),
            _ => None,
        }
    }

    #[must_use]
    pub fn videos(&self) -> Option<&[Video]> {
        match self.payload(&QueryKey::Videos)? {
            CachedPayload::Videos(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn video(&self, id: &str) -> Option<&Video> {
        match self.payload(&QueryKey::Video(id.to_string()))? {
            CachedPayload::Video(video) => Some(video),
            _ => None,
        }
    }

    /// The question list of one video, already in display order.
    #[must_use]
    pub fn questions_for(&self, video_id: &str) -> Option<&[Question]> {
        match self.payload(&QueryKey::VideoQuestions(video_id.to_string()))? {
            CachedPayload::Questions(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        match self.payload(&QueryKey::Question(id.to_string()))? {
            CachedPayload::Question(question) => Some(question),
            _ => None,
        }
    }

    #[must_use]
    pub fn stats(&self, period: StatsPeriod) -> Option<&StatsResponse> {
        match self.payload(&QueryKey::Stats(period))? {
            CachedPayload::Stats(stats) => Some(stats),
            _ => None,
        }
    }

    #[must_use]
    pub fn auth_user(&self) -> Option<&User> {
        match self.payload(&QueryKey::AuthMe)? {
            CachedPayload::AuthUser(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Video {id}"),
            url: format!("https://cdn.example.com/{id}.mp4"),
            publish_date: "2026-01-01T00:00:00.000Z".to_string(),
            company_id: None,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            company: None,
        }
    }

    fn stats() -> StatsResponse {
        let series = |label: &str| sentra_api::schema::TimeSeries {
            label: label.to_string(),
            data: vec![],
            total: 0,
        };
        StatsResponse {
            totals: sentra_api::schema::StatsTotals::default(),
            role_breakdown: sentra_api::schema::RoleBreakdown::default(),
            growth: sentra_api::schema::StatsGrowth {
                users: series("Users"),
                companies: series("Companies"),
                videos: series("Videos"),
                questions: series("Questions"),
            },
            period: StatsPeriod::Month,
        }
    }

    #[test]
    fn fetch_lifecycle() {
        let mut cache = ResourceCache::new();
        assert!(cache.needs_fetch(&QueryKey::Videos));

        cache.begin_fetch(QueryKey::Videos);
        assert!(cache.is_pending(&QueryKey::Videos));
        assert!(!cache.needs_fetch(&QueryKey::Videos));

        cache.resolve(QueryKey::Videos, CachedPayload::Videos(vec![video("v1")]));
        assert!(!cache.is_pending(&QueryKey::Videos));
        assert_eq!(cache.videos().map(<[Video]>::len), Some(1));
    }

    #[test]
    fn stats_stay_fresh_within_the_window() {
        let mut cache = ResourceCache::new();
        let key = QueryKey::Stats(StatsPeriod::Month);
        cache.begin_fetch(key.clone());
        cache.resolve(key.clone(), CachedPayload::Stats(stats()));
        assert!(!cache.needs_fetch(&key));

        // Zero stale time means a revisit always refetches.
        cache.resolve(QueryKey::Videos, CachedPayload::Videos(vec![]));
        assert!(cache.needs_fetch(&QueryKey::Videos));
    }

    #[test]
    fn error_keeps_the_previous_payload() {
        let mut cache = ResourceCache::new();
        cache.resolve(QueryKey::Videos, CachedPayload::Videos(vec![video("v1")]));
        cache.fail(
            QueryKey::Videos,
            ApiError::Transport("connection reset".to_string()),
        );

        assert!(cache.videos().is_some());
        assert!(cache.error(&QueryKey::Videos).is_some());
        assert!(cache.needs_fetch(&QueryKey::Videos));
    }

    #[test]
    fn invalidation_marks_matches_stale() {
        let mut cache = ResourceCache::new();
        let stats_key = QueryKey::Stats(StatsPeriod::Month);
        cache.resolve(QueryKey::Videos, CachedPayload::Videos(vec![]));
        cache.resolve(
            QueryKey::Video("v1".to_string()),
            CachedPayload::Video(video("v1")),
        );
        cache.resolve(stats_key.clone(), CachedPayload::Stats(stats()));

        let hit = cache.invalidate(&InvalidationSelector::Kind(EntityKind::Videos));
        assert_eq!(hit, 2);
        assert!(cache.needs_fetch(&QueryKey::Video("v1".to_string())));
        // Fresh stats are untouched by a video sweep.
        assert!(!cache.needs_fetch(&stats_key));
    }

    #[test]
    fn question_mutations_invalidate_precisely() {
        let mut cache = ResourceCache::new();
        let list_v1 = QueryKey::VideoQuestions("v1".to_string());
        let list_v2 = QueryKey::VideoQuestions("v2".to_string());
        cache.resolve(list_v1.clone(), CachedPayload::Questions(vec![]));
        cache.resolve(list_v2.clone(), CachedPayload::Questions(vec![]));
        cache.resolve(QueryKey::Videos, CachedPayload::Videos(vec![]));

        cache.apply(&MutationKind::CreateQuestion {
            video_id: "v1".to_string(),
        });

        assert!(cache.entry(&list_v1).is_some_and(CacheEntry::is_invalidated));
        assert!(!cache.entry(&list_v2).is_some_and(CacheEntry::is_invalidated));
        assert!(!cache.entry(&QueryKey::Videos).is_some_and(CacheEntry::is_invalidated));
    }

    #[test]
    fn clear_forgets_the_session() {
        let mut cache = ResourceCache::new();
        cache.resolve(QueryKey::Videos, CachedPayload::Videos(vec![video("v1")]));
        cache.clear();
        assert!(cache.videos().is_none());
        assert!(cache.needs_fetch(&QueryKey::Videos));
    }
}
